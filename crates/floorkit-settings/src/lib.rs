//! FloorKit Settings Crate
//!
//! Handles application configuration: window and canvas preferences, and
//! where floor plans are stored.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, StorageSettings, Theme, UiSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
