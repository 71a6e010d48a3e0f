use crate::error::Error;
use crate::types::CollectionConfig;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Collection configuration (singleton)
    Config,
    /// Monotonic counter of issued token ids
    TotalMinted,
    /// Number of burned tokens
    TotalBurned,
    /// Allowlist eligibility (account -> bool)
    Allowlist(Address),
    /// Allowlist-phase mints per account (account -> u32)
    AllowlistMinted(Address),
    /// Holder of a live token (token_id -> Address)
    TokenOwner(u32),
    /// Single approved delegate (token_id -> Address)
    Approved(u32),
    /// Operator approval (owner, operator) -> bool
    Operator(Address, Address),
    /// Live tokens held by an account (account -> u32)
    Balance(Address),
    /// Enumeration slot of an account's holdings ((account, index) -> token_id)
    OwnedToken(Address, u32),
    /// Slot of a live token within its holder's enumeration (token_id -> index)
    OwnedTokenIndex(u32),
}

pub fn read_config(e: &Env) -> Result<CollectionConfig, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(e: &Env, config: &CollectionConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn total_minted(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::TotalMinted)
        .unwrap_or(0)
}

pub fn set_total_minted(e: &Env, value: u32) {
    e.storage().instance().set(&DataKey::TotalMinted, &value);
}

pub fn total_burned(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::TotalBurned)
        .unwrap_or(0)
}

pub fn set_total_burned(e: &Env, value: u32) {
    e.storage().instance().set(&DataKey::TotalBurned, &value);
}
