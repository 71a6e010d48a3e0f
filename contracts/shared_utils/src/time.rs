use soroban_sdk::Env;

pub struct TimeUtils;

impl TimeUtils {
    /// Current ledger timestamp in seconds.
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// `true` once `start` has been reached.
    pub fn has_started(e: &Env, start: u64) -> bool {
        Self::now(e) >= start
    }
}
