//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Address, Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with topic and data
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic (Symbol)
    /// * `data` - The event data (tuple)
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit a contribution event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `funder` - The contributing address
    /// * `amount` - The amount contributed by this call
    /// * `total` - The funder's cumulative contribution after this call
    pub fn emit_funded(e: &Env, funder: &Address, amount: i128, total: i128) {
        Self::emit_with_topics(
            e,
            (symbol_short!("funded"), funder.clone()),
            (amount, total),
        );
    }

    /// Emit a withdrawal event
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `owner` - The address receiving the funds
    /// * `amount` - The amount transferred
    /// * `funders_cleared` - How many funder records were reset
    pub fn emit_withdrawn(e: &Env, owner: &Address, amount: i128, funders_cleared: u32) {
        Self::emit_with_topics(
            e,
            (symbol_short!("withdrawn"), owner.clone()),
            (amount, funders_cleared),
        );
    }
}
