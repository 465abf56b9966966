//! Application-wide constants.

/// Application identifier used for config and data directory names.
pub const APP_DIR_NAME: &str = "floorkit";

/// Sub-directory of the data directory holding the key-value store.
pub const STORAGE_DIR_NAME: &str = "storage";

/// File extension of stored values.
pub const STORAGE_FILE_EXTENSION: &str = "json";

/// GTK application id.
pub const APPLICATION_ID: &str = "com.github.floorkit.FloorKit";
