//! JSON file backed key-value store

use std::path::PathBuf;

use serde_json::Value;

use super::file_io::{read_json, write_json_atomic};
use super::KeyValueStore;
use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the data directory
    pub fn from_paths(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.data_dir()))
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LedgerError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Value>> {
        let path = self.path_for(key)?;
        tracing::debug!(path = %path.display(), "Loading");
        read_json(&path)
    }

    fn save(&self, key: &str, value: &Value) -> LedgerResult<()> {
        let path = self.path_for(key)?;
        tracing::debug!(path = %path.display(), "Saving");
        write_json_atomic(&path, value)
    }
}
