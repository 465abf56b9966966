//! # FloorKit Core
//!
//! Core types, errors, and utilities shared by the FloorKit crates.
//! Provides the error hierarchy, single-threaded shared-state aliases,
//! and the client-side key-value store the floor plan is persisted to.

pub mod constants;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result, StorageError};

pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Re-export type aliases for convenience
pub use types::{shared, shared_none, Shared, SharedOption, UiCallback};
