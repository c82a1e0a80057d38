//! Port for durable local key/value storage.
//!
//! Models browser-style local storage: string values under string keys,
//! synchronous access, and whole-value replacement on every write. Adapters
//! decide where the bytes live (memory, a directory on disk).

use super::define_port_error;

define_port_error! {
    /// Errors raised by key/value storage adapters.
    pub enum KeyValueStoreError {
        /// Key cannot be mapped onto the backing store.
        InvalidKey { key: String } => "invalid storage key: {key}",
        /// Reading or writing the backing store failed.
        Io { key: String, message: String } => "storage access for {key} failed: {message}",
    }
}

/// Synchronous string storage keyed by fixed names.
///
/// Each `set` fully replaces the previous value, so there is no partial-write
/// state for callers to recover from.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}
