//! Single-owner access control.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub struct AccessControl;

impl AccessControl {
    pub const OWNER_KEY: Symbol = symbol_short!("owner");

    pub fn owner(e: &Env) -> Option<Address> {
        e.storage().instance().get(&Self::OWNER_KEY)
    }

    /// `true` only when an owner exists and equals `caller`.
    pub fn is_owner(e: &Env, caller: &Address) -> bool {
        match Self::owner(e) {
            Some(owner) => owner == *caller,
            None => false,
        }
    }

    pub fn set_owner(e: &Env, new_owner: &Address) {
        e.storage().instance().set(&Self::OWNER_KEY, new_owner);
    }
}
