use shared_utils::{category, emit_error_event};
use soroban_sdk::{contracterror, log, Env, String};

/// Contract errors. Codes are part of the public interface and never reused.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not the owner account
    NotOwner = 3,
    /// Caller neither holds the token nor is approved for it
    NotOwnerOrApproved = 4,
    NotAllowlistPhase = 5,
    NotPublicPhase = 6,
    NotOnAllowlist = 7,
    ExceedsAllowlistLimit = 8,
    ExceedsPerTxLimit = 9,
    ExceedsMaxSupply = 10,
    ZeroQuantity = 11,
    InsufficientPayment = 12,
    /// Token was never minted or has been burned
    TokenDoesNotExist = 13,
    ContractPaused = 14,
    /// Mint or transfer target is the zero address
    InvalidRecipient = 15,
    /// Royalty receiver is the zero address
    InvalidReceiver = 16,
    /// Royalty fee above 1000 basis points
    FeeTooHigh = 17,
    InvalidConfig = 18,
    LengthMismatch = 19,
    BatchTooLarge = 20,
    UriTooLong = 21,
    ReentrancyDetected = 22,
    /// Price or royalty arithmetic overflowed i128
    ArithmeticOverflow = 23,
    /// Index past the end of an account's holdings
    OwnerIndexOutOfBounds = 24,
}

/// Failure families, one per kind of rejected precondition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Authorization,
    Phase,
    Quota,
    Payment,
    State,
    Configuration,
}

impl ErrorCategory {
    pub fn code(&self) -> u32 {
        match self {
            ErrorCategory::Authorization => category::AUTHORIZATION,
            ErrorCategory::Phase => category::PHASE,
            ErrorCategory::Quota => category::QUOTA,
            ErrorCategory::Payment => category::PAYMENT,
            ErrorCategory::State => category::STATE,
            ErrorCategory::Configuration => category::CONFIGURATION,
        }
    }
}

impl Error {
    /// Human-readable message for debugging and error events.
    pub fn message(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Contract not initialized",
            Error::AlreadyInitialized => "Contract already initialized",
            Error::NotOwner => "Caller is not the owner",
            Error::NotOwnerOrApproved => "Caller is not token owner or approved",
            Error::NotAllowlistPhase => "Allowlist sale is not active",
            Error::NotPublicPhase => "Public sale is not active",
            Error::NotOnAllowlist => "Account is not on the allowlist",
            Error::ExceedsAllowlistLimit => "Allowlist mint limit exceeded",
            Error::ExceedsPerTxLimit => "Quantity exceeds per-transaction limit",
            Error::ExceedsMaxSupply => "Quantity exceeds remaining supply",
            Error::ZeroQuantity => "Quantity must be greater than zero",
            Error::InsufficientPayment => "Payment below mint price times quantity",
            Error::TokenDoesNotExist => "Token does not exist",
            Error::ContractPaused => "Minting is paused",
            Error::InvalidRecipient => "Recipient is the zero address",
            Error::InvalidReceiver => "Royalty receiver is the zero address",
            Error::FeeTooHigh => "Royalty fee exceeds 10%",
            Error::InvalidConfig => "Invalid collection configuration",
            Error::LengthMismatch => "Accounts and flags differ in length",
            Error::BatchTooLarge => "Allowlist batch too large",
            Error::UriTooLong => "URI exceeds maximum length",
            Error::ReentrancyDetected => "Reentrancy detected",
            Error::ArithmeticOverflow => "Arithmetic overflow",
            Error::OwnerIndexOutOfBounds => "Owner index out of bounds",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotOwner | Error::NotOwnerOrApproved | Error::NotOnAllowlist => {
                ErrorCategory::Authorization
            }
            Error::NotAllowlistPhase | Error::NotPublicPhase => ErrorCategory::Phase,
            Error::ExceedsAllowlistLimit
            | Error::ExceedsPerTxLimit
            | Error::ExceedsMaxSupply
            | Error::BatchTooLarge => ErrorCategory::Quota,
            Error::InsufficientPayment => ErrorCategory::Payment,
            Error::FeeTooHigh
            | Error::InvalidConfig
            | Error::UriTooLong
            | Error::ArithmeticOverflow => ErrorCategory::Configuration,
            Error::NotInitialized
            | Error::AlreadyInitialized
            | Error::TokenDoesNotExist
            | Error::ContractPaused
            | Error::ZeroQuantity
            | Error::InvalidRecipient
            | Error::InvalidReceiver
            | Error::LengthMismatch
            | Error::ReentrancyDetected
            | Error::OwnerIndexOutOfBounds => ErrorCategory::State,
        }
    }
}

/// Log a rejected operation and hand the error back for `Err(..)`.
pub(crate) fn reject(e: &Env, err: Error, context: &str) -> Error {
    log!(
        e,
        "rejected",
        String::from_str(e, context),
        err as u32,
        err.category().code()
    );
    emit_error_event(e, err as u32, context);
    err
}
