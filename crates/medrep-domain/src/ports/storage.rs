//! Session Storage Port
//!
//! Defines the contract for the key-value persistence that lets a session
//! survive restarts.

use crate::error::Result;

/// Key-value string storage for persisted session state
///
/// Operations are synchronous: implementations are expected to be local
/// (memory, a small file) and fast.
pub trait SessionStorage: Send + Sync {
    /// Load the value stored under `key`
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn delete(&self, key: &str) -> Result<()>;
}
