//! # FloorKit UI
//!
//! GTK-based user interface for FloorKit.

pub mod gtk_app;
pub mod ui;

pub use floorkit_settings::{Config, SettingsManager, StorageSettings, Theme, UiSettings};
