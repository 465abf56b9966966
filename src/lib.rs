//! # FloorKit
//!
//! A desktop editor for restaurant floor plans: rooms hold tables that can be
//! placed, rotated, duplicated, and switched between online and offline for
//! bookings.
//!
//! ## Architecture
//!
//! FloorKit is organized as a workspace with multiple crates:
//!
//! 1. **floorkit-core** - Error types, shared UI aliases, key-value storage
//! 2. **floorkit-designer** - Room and table model, editor state, canvas interaction
//! 3. **floorkit-settings** - Configuration file handling
//! 4. **floorkit-ui** - GTK4 window, canvas widget, side panel, status bar
//! 5. **floorkit** - Main binary that integrates all crates

// Re-export modules for main.rs
pub use floorkit_designer as designer;
pub use floorkit_ui::ui;

pub use floorkit_core::{Error, FileStore, KeyValueStore, MemoryStore, Result};

pub use floorkit_designer::{
    FloorAction, FloorCanvas, FloorState, Point, Rect, Room, RoomPersistence, RoomSummary, Table,
    TableForm, TableUpdate,
};

pub use floorkit_settings::{Config, SettingsManager, StorageSettings, Theme, UiSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Console output with pretty formatting, filtered through `RUST_LOG`.
/// Release builds on Windows log to a file next to the executable.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // In Windows GUI mode (release builds), log to a file instead of stdout
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        let log_file = log_dir.join("floorkit.log");

        // Try to open log file, but if it fails, just disable logging rather than crash
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
        {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .pretty();

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .init();
            }
            Err(_) => {
                // If file creation fails, just use a no-op subscriber
                tracing_subscriber::registry()
                    .with(env_filter)
                    .init();
            }
        }
    }

    // In debug mode or non-Windows, log to stdout as before
    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }

    Ok(())
}
