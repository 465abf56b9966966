use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{validate_key, KeyValueStore};
use crate::constants::{APP_DIR_NAME, STORAGE_DIR_NAME, STORAGE_FILE_EXTENSION};
use crate::error::{Result, StorageError};

/// Directory-backed key-value store.
///
/// Each key maps to `<dir>/<key>.json`. Writes go to a sibling temporary
/// file which is synced and then renamed over the target, so readers never
/// observe a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform data directory (`<data dir>/floorkit/storage`).
    pub fn in_data_dir() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| StorageError::DirectoryUnavailable {
            reason: "no platform data directory".to_string(),
        })?;
        Ok(Self::new(base.join(APP_DIR_NAME).join(STORAGE_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self
            .dir
            .join(format!("{}.{}", key, STORAGE_FILE_EXTENSION)))
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::DirectoryUnavailable {
            reason: format!("{}: {}", self.dir.display(), e),
        })?;
        Ok(())
    }
}

fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.ensure_dir()?;

        let tmp = path.with_extension(format!("{}.tmp", STORAGE_FILE_EXTENSION));
        if let Err(e) = write_synced(&tmp, value).and_then(|()| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!("Stored {} bytes under '{}' at {}", value.len(), key, path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}
