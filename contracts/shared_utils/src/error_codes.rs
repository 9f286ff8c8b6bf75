//! Standardized error codes and messages for the FundMe contracts.
//!
//! Contracts keep their own `contracterror` enums; these codes are the
//! stable numeric values those enums are pinned to, so that clients and
//! indexers can decode failures without linking the contract crate.

/// Standard error code constants
pub mod code {
    // Lifecycle
    pub const NOT_INITIALIZED: u32 = 1;
    pub const ALREADY_INITIALIZED: u32 = 2;

    // Authorization
    pub const NOT_OWNER: u32 = 3;

    // Business rules
    pub const INSUFFICIENT_CONTRIBUTION: u32 = 4;

    // External dependencies
    pub const ORACLE_UNAVAILABLE: u32 = 5;
    pub const TRANSFER_FAILED: u32 = 6;

    // Queries and arithmetic
    pub const INDEX_OUT_OF_RANGE: u32 = 7;
    pub const ARITHMETIC_OVERFLOW: u32 = 8;
    pub const INVALID_CONFIG: u32 = 9;
}

/// Returns a human-readable message for a given error code (for events/logging).
pub fn message_for_code(code: u32) -> &'static str {
    match code {
        code::NOT_INITIALIZED => "Contract not initialized",
        code::ALREADY_INITIALIZED => "Contract already initialized",
        code::NOT_OWNER => "Caller is not the owner",
        code::INSUFFICIENT_CONTRIBUTION => "Contribution below the minimum USD value",
        code::ORACLE_UNAVAILABLE => "Price feed unavailable or returned malformed data",
        code::TRANSFER_FAILED => "Token transfer failed",
        code::INDEX_OUT_OF_RANGE => "Funder index out of range",
        code::ARITHMETIC_OVERFLOW => "Arithmetic overflow",
        code::INVALID_CONFIG => "Invalid configuration value",
        _ => "Unknown error",
    }
}
