//! Price feed interface shared by feeds and their consumers
//!
//! A feed contract exposes the methods named in [`methods`] and answers
//! `latest_price` with a [`PriceData`]. Consumers call it through
//! `invoke_contract`, so both sides must agree on this layout.

use soroban_sdk::contracttype;

/// Names of the feed methods consumers invoke
pub mod methods {
    pub const LATEST_PRICE: &str = "latest_price";
    pub const VERSION: &str = "version";
}

/// A single price round reported by a feed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Monotonic round counter, starting at 1
    pub round_id: u64,
    /// USD price of one whole unit of the asset, scaled by `10^decimals`
    pub price: i128,
    /// Number of decimal places carried by `price`
    pub decimals: u32,
    /// Ledger timestamp at which the round was recorded
    pub updated_at: u64,
}
