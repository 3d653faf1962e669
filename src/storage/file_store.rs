//! JSON-file backend for the storage port
//!
//! Each key is kept at `<data_dir>/<key>.json` and rewritten atomically on
//! every `set`.

use std::path::PathBuf;

use super::file_io::{read_json, write_json_atomic};
use super::{KeyValueStore, StorageKey};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Key-value store backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store in the data directory, creating it if needed
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(paths.data_dir()))
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: StorageKey) -> TrackerResult<Option<serde_json::Value>> {
        read_json(self.path_for(key))
    }

    fn set(&mut self, key: StorageKey, value: serde_json::Value) -> TrackerResult<()> {
        write_json_atomic(self.path_for(key), &value)
    }
}
