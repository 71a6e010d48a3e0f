use soroban_sdk::{contracttype, Address, String};

/// Collection configuration supplied once at `initialize`.
///
/// `base_uri`, `contract_uri`, `royalty_receiver` and `royalty_fee` can be
/// changed later by the owner; every other field is fixed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub contract_uri: String,
    pub max_supply: u32,
    pub max_mint_per_tx: u32,
    /// Per-account cap on allowlist-phase mints
    pub allowlist_mint_limit: u32,
    /// Price per token in `payment_token` units
    pub mint_price: i128,
    pub allowlist_sale_start: u64,
    pub public_sale_start: u64,
    pub payment_token: Address,
    pub royalty_receiver: Address,
    /// Basis points out of 10_000, at most 1000
    pub royalty_fee: u32,
}

/// Time-gated stage of the sale.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SalePhase {
    NotStarted = 0,
    Allowlist = 1,
    Public = 2,
}
