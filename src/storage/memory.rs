//! In-memory backend for the storage port

use std::collections::HashMap;

use super::{KeyValueStore, StorageKey};
use crate::error::TrackerResult;

/// Key-value store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<StorageKey, serde_json::Value>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> TrackerResult<Option<serde_json::Value>> {
        Ok(self.values.get(&key).cloned())
    }

    fn set(&mut self, key: StorageKey, value: serde_json::Value) -> TrackerResult<()> {
        self.values.insert(key, value);
        self.writes += 1;
        Ok(())
    }
}
