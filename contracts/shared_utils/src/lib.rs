#![no_std]

//! Shared utility library for Soroban collection contracts
//!
//! Common building blocks composed by the sale contracts:
//! - Access control (single owner account)
//! - Pause flag
//! - Re-entrancy guard
//! - Safe math (checked multiplication, basis-point fees)
//! - Time helpers
//! - Address validation
//! - Error codes and error events

pub mod access_control;
pub mod error_codes;
pub mod math;
pub mod pausable;
pub mod reentrancy;
pub mod time;
pub mod validation;


pub use access_control::AccessControl;
pub use error_codes::{category, emit_error_event};
pub use math::SafeMath;
pub use pausable::Pausable;
pub use reentrancy::ReentrancyGuard;
pub use time::TimeUtils;
pub use validation::Validation;
