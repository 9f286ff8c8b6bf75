//! Error logging helpers

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error message
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `message` - The error message
    pub fn log_error(e: &Env, message: &str) {
        log!(e, "Error: {}", message);
    }

    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The operation that failed, e.g. `"fund"`
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }
}
