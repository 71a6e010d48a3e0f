use crate::types::{CollectionConfig, SalePhase};
use shared_utils::TimeUtils;
use soroban_sdk::Env;

/// Derive the sale phase from the ledger clock.
///
/// Public start is checked first, so a collection configured with the
/// allowlist start after the public start never enters `Allowlist`.
pub fn current(e: &Env, config: &CollectionConfig) -> SalePhase {
    if TimeUtils::has_started(e, config.public_sale_start) {
        SalePhase::Public
    } else if TimeUtils::has_started(e, config.allowlist_sale_start) {
        SalePhase::Allowlist
    } else {
        SalePhase::NotStarted
    }
}
