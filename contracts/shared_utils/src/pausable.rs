use soroban_sdk::{symbol_short, Env, Symbol};

/// Contract-wide pause flag kept in instance storage.
pub struct Pausable;

impl Pausable {
    pub const PAUSED_KEY: Symbol = symbol_short!("paused");

    pub fn is_paused(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&Self::PAUSED_KEY)
            .unwrap_or(false)
    }

    pub fn pause(e: &Env) {
        e.storage().instance().set(&Self::PAUSED_KEY, &true);
    }

    pub fn unpause(e: &Env) {
        e.storage().instance().set(&Self::PAUSED_KEY, &false);
    }
}
