use soroban_sdk::{Address, Env, String};

/// Strkey of the all-zero ed25519 account, used as the "none" address.
pub const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub struct Validation;

impl Validation {
    pub fn zero_address(e: &Env) -> Address {
        Address::from_string(&String::from_str(e, ZERO_ADDRESS))
    }

    pub fn is_zero_address(e: &Env, address: &Address) -> bool {
        *address == Self::zero_address(e)
    }
}
