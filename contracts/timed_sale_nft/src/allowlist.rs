use crate::error::Error;
use crate::events;
use crate::storage::DataKey;
use crate::types::CollectionConfig;
use soroban_sdk::{Address, Env, Vec};

/// Upper bound on accounts per `update_allowlist` call.
pub const MAX_ALLOWLIST_BATCH: u32 = 100;

pub fn is_allowlisted(e: &Env, account: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Allowlist(account.clone()))
        .unwrap_or(false)
}

pub fn minted(e: &Env, account: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::AllowlistMinted(account.clone()))
        .unwrap_or(0)
}

/// Validate a batch before any flag is written.
pub fn check_batch(accounts: &Vec<Address>, flags: &Vec<bool>) -> Result<(), Error> {
    if accounts.len() != flags.len() {
        return Err(Error::LengthMismatch);
    }
    if accounts.len() > MAX_ALLOWLIST_BATCH {
        return Err(Error::BatchTooLarge);
    }
    Ok(())
}

pub fn apply_batch(e: &Env, accounts: &Vec<Address>, flags: &Vec<bool>) {
    for (account, allowed) in accounts.iter().zip(flags.iter()) {
        e.storage()
            .persistent()
            .set(&DataKey::Allowlist(account.clone()), &allowed);
        events::allowlist(e, &account, allowed);
    }
}

/// Eligibility and per-account cap, in that order.
pub fn check_mint(
    e: &Env,
    config: &CollectionConfig,
    account: &Address,
    quantity: u32,
) -> Result<(), Error> {
    if !is_allowlisted(e, account) {
        return Err(Error::NotOnAllowlist);
    }
    let after = minted(e, account)
        .checked_add(quantity)
        .ok_or(Error::ExceedsAllowlistLimit)?;
    if after > config.allowlist_mint_limit {
        return Err(Error::ExceedsAllowlistLimit);
    }
    Ok(())
}

pub fn record_mint(e: &Env, account: &Address, quantity: u32) {
    let count = minted(e, account) + quantity;
    e.storage()
        .persistent()
        .set(&DataKey::AllowlistMinted(account.clone()), &count);
}
