use soroban_sdk::{symbol_short, Env, Symbol};

/// Storage-flag re-entrancy guard.
///
/// The flag lives in instance storage, so a failed invocation rolls it back
/// together with every other write of that invocation.
pub struct ReentrancyGuard;

impl ReentrancyGuard {
    pub const GUARD_KEY: Symbol = symbol_short!("reentry");

    /// Acquire the guard. Returns `false` when it is already held.
    pub fn enter(e: &Env) -> bool {
        let held = e
            .storage()
            .instance()
            .get::<_, bool>(&Self::GUARD_KEY)
            .unwrap_or(false);
        if held {
            return false;
        }
        e.storage().instance().set(&Self::GUARD_KEY, &true);
        true
    }

    pub fn exit(e: &Env) {
        e.storage().instance().set(&Self::GUARD_KEY, &false);
    }
}
