//! Key/value storage adapters standing in for browser local storage.
//!
//! - [`InMemoryKeyValueStore`]: process-local map, used by tests and
//!   ephemeral sessions.
//! - [`DirKeyValueStore`]: one file per key inside a capability-scoped
//!   directory, written atomically.

mod dir;
mod memory;

pub use dir::{DirKeyValueStore, OpenStoreError};
pub use memory::InMemoryKeyValueStore;

use crate::domain::ports::KeyValueStoreError;

/// Keys map directly onto file names, so restrict them to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), KeyValueStoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(KeyValueStoreError::invalid_key(key))
    }
}
