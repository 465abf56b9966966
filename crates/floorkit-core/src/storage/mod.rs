//! Client-side key-value storage.
//!
//! The editor persists its state as whole string values stored under
//! fixed keys. Two backends are provided:
//! - [`FileStore`]: one file per key inside a storage directory
//! - [`MemoryStore`]: in-process map, used by tests and previews

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::error::{Result, StorageError};

/// A synchronous string key-value store.
///
/// Reads and writes replace whole values; there are no partial updates.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// Returns true if a value is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Checks that a key can be used as a file stem on every platform.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let reject = |reason: &str| -> Result<()> {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }
        .into())
    };

    if key.is_empty() {
        return reject("key is empty");
    }
    if key.starts_with('.') {
        return reject("key starts with '.'");
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return reject("only ASCII letters, digits, '-', '_' and '.' are allowed");
    }
    Ok(())
}
