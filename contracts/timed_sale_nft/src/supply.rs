use crate::error::Error;
use crate::events;
use crate::registry;
use crate::storage;
use crate::types::CollectionConfig;
use shared_utils::SafeMath;
use soroban_sdk::{Address, Env};

/// Per-transaction bounds of a public mint.
pub fn check_quantity(config: &CollectionConfig, quantity: u32) -> Result<(), Error> {
    if quantity == 0 {
        return Err(Error::ZeroQuantity);
    }
    if quantity > config.max_mint_per_tx {
        return Err(Error::ExceedsPerTxLimit);
    }
    Ok(())
}

/// Supply ceiling check; returns the first id the mint would issue.
pub fn check_supply(e: &Env, config: &CollectionConfig, quantity: u32) -> Result<u32, Error> {
    let minted = storage::total_minted(e);
    let after = SafeMath::add_u32(minted, quantity).ok_or(Error::ExceedsMaxSupply)?;
    if after > config.max_supply {
        return Err(Error::ExceedsMaxSupply);
    }
    Ok(minted + 1)
}

/// Issue `quantity` sequential ids to `to`.
///
/// The shared counter is read and advanced once per call, so allowlist,
/// public and admin mints draw from the same sequence.
pub fn issue(e: &Env, to: &Address, quantity: u32) -> u32 {
    let first_id = storage::total_minted(e) + 1;
    registry::assign_batch(e, to, first_id, quantity);
    storage::set_total_minted(e, first_id + quantity - 1);
    events::minted(e, to, first_id, quantity);
    first_id
}
