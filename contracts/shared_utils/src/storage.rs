//! Storage helper utilities for common storage patterns

use soroban_sdk::{Address, Env, IntoVal, Val};

/// Storage key constants
pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const OWNER: Symbol = symbol_short!("OWNER");
    pub const INITIALIZED: Symbol = symbol_short!("INIT");
}

/// Ledger TTL constants (one ledger every ~5 seconds)
pub mod ttl {
    pub const DAY_IN_LEDGERS: u32 = 17_280;

    pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
    pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

    pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
    pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
}

/// Storage helper functions
pub struct Storage;

impl Storage {
    /// Check if a contract has been initialized
    pub fn is_initialized(e: &Env) -> bool {
        e.storage().instance().has(&keys::INITIALIZED)
    }

    /// Mark contract as initialized
    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&keys::INITIALIZED, &true);
    }

    /// Get the owner address, `None` before initialization
    pub fn get_owner(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::OWNER)
    }

    /// Set the owner address
    ///
    /// The owner is written once during initialization. Callers are expected
    /// to guard this with [`Storage::is_initialized`].
    pub fn set_owner(e: &Env, owner: &Address) {
        e.storage().instance().set(&keys::OWNER, owner);
    }

    /// Extend the TTL of the contract instance and everything stored in it
    pub fn bump_instance(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(ttl::INSTANCE_LIFETIME_THRESHOLD, ttl::INSTANCE_BUMP_AMOUNT);
    }

    /// Extend the TTL of a persistent entry
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `key` - The storage key, which must exist
    pub fn bump_persistent<K>(e: &Env, key: &K)
    where
        K: IntoVal<Env, Val>,
    {
        e.storage().persistent().extend_ttl(
            key,
            ttl::PERSISTENT_LIFETIME_THRESHOLD,
            ttl::PERSISTENT_BUMP_AMOUNT,
        );
    }
}
