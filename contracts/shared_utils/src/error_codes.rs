//! Error categories and the error event consumed by indexers.

use soroban_sdk::{symbol_short, Env, String};

/// Numeric error categories shared by every contract in the workspace.
pub mod category {
    pub const AUTHORIZATION: u32 = 1;
    pub const PHASE: u32 = 2;
    pub const QUOTA: u32 = 3;
    pub const PAYMENT: u32 = 4;
    pub const STATE: u32 = 5;
    pub const CONFIGURATION: u32 = 6;
}

/// Publish an `("error", code)` event carrying the failing operation name.
///
/// Events of a failed invocation are discarded along with its storage
/// writes, so this is only observable for diagnostics in tests and
/// simulation.
pub fn emit_error_event(e: &Env, code: u32, context: &str) {
    e.events().publish(
        (symbol_short!("error"), code),
        String::from_str(e, context),
    );
}
