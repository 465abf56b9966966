//! Locates and loads the configuration file.

use std::path::{Path, PathBuf};

use floorkit_core::constants::APP_DIR_NAME;

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Resolves the platform config location for FloorKit.
pub struct SettingsManager;

impl SettingsManager {
    /// `<config dir>/floorkit`
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
            })
    }

    /// `<config dir>/floorkit/config.json`
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Creates the config directory if needed.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Loads the config at `path`, falling back to defaults.
    ///
    /// A missing file is normal on first start. A file that cannot be parsed
    /// or fails validation is logged and ignored.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Config::default();
        }
        match Config::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Loads the config from its platform location.
    pub fn load() -> Config {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                tracing::warn!("Config location unavailable: {}", e);
                Config::default()
            }
        }
    }
}
