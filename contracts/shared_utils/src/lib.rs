#![no_std]

//! Shared utility library for the FundMe Soroban contracts
//!
//! This library provides the common pieces used by the FundMe contract and
//! its price feed:
//! - Storage helpers (initialization flag, owner, TTL management)
//! - Access control patterns
//! - Checked fixed-point math
//! - Event emission patterns
//! - Error codes and logging helpers
//! - The price feed data type shared by feeds and consumers

pub mod access_control;
pub mod error_codes;
pub mod errors;
pub mod events;
pub mod math;
pub mod price_feed;
pub mod storage;


// Re-export commonly used items
pub use access_control::*;
pub use error_codes::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use price_feed::*;
pub use storage::Storage;
