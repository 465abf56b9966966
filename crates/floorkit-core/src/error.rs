//! Error handling for FloorKit
//!
//! Floor-plan mutations are total and never fail; errors only arise at the
//! edges of the application:
//! - Storage errors (client-side key-value store)
//! - I/O and JSON errors while reading or writing snapshots
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Storage error type
///
/// Represents errors raised by a [`crate::storage::KeyValueStore`] backend.
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    /// Key is empty or contains characters that cannot form a file name
    #[error("Invalid storage key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },

    /// No directory could be resolved or created for the store
    #[error("Storage directory unavailable: {reason}")]
    DirectoryUnavailable {
        /// The reason the directory is unavailable.
        reason: String,
    },

    /// Generic storage error
    #[error("Storage error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Main error type for FloorKit
///
/// A unified error type used in the public APIs of the library crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a storage error
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this error came from malformed JSON
    pub fn is_json_error(&self) -> bool {
        matches!(self, Error::Json(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
