//! Access control patterns and utilities

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Check if an address is the recorded owner
    ///
    /// # Returns
    /// `true` if address is the owner, `false` otherwise (including before
    /// initialization)
    pub fn is_owner(e: &Env, address: &Address) -> bool {
        match Storage::get_owner(e) {
            Some(owner) => *address == owner,
            None => false,
        }
    }

    /// Require the caller's signature and report whether it is the owner
    ///
    /// An unsigned call fails in the host before ownership is checked.
    pub fn authorize_owner(e: &Env, caller: &Address) -> bool {
        caller.require_auth();
        Self::is_owner(e, caller)
    }
}
