//! Key-value backends
//!
//! Each persisted collection is a single text blob under a fixed key. The
//! file backend keeps one JSON file per key; the memory backend is used by
//! tests and can be told to reject writes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_if_exists, write_atomic};

/// A durable store of named text records
pub trait KeyValueStore: Send + Sync {
    /// Read the record under `key`, or `None` if it was never written
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Replace the record under `key`
    fn put(&self, key: &str, value: &str) -> BudgetResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> BudgetResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BudgetError::Persistence(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        read_if_exists(self.path_for(key)?)
    }

    fn put(&self, key: &str, value: &str) -> BudgetResult<()> {
        write_atomic(self.path_for(key)?, value)
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    reject_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `put` fail (or succeed again)
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Raw record under `key`, bypassing any repository
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> BudgetResult<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(BudgetError::Persistence(format!(
                "Store rejected write to '{}'",
                key
            )));
        }

        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Persistence(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));

        assert!(store.get("transactions").unwrap().is_none());

        store.put("transactions", "{}").unwrap();
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("{}"));
        assert!(temp_dir.path().join("data").join("transactions.json").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.put("../escape", "x").unwrap_err().is_persistence());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.put("goals", "[]").unwrap();
        assert_eq!(store.get("goals").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.raw("goals").as_deref(), Some("[]"));
        assert!(store.get("theme").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_rejecting_writes_keeps_old_value() {
        let store = MemoryStore::new();
        store.put("theme", "\"light\"").unwrap();

        store.set_reject_writes(true);
        let err = store.put("theme", "\"dark\"").unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.raw("theme").as_deref(), Some("\"light\""));

        store.set_reject_writes(false);
        store.put("theme", "\"dark\"").unwrap();
        assert_eq!(store.raw("theme").as_deref(), Some("\"dark\""));
    }
}
