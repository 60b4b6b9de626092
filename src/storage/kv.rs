//! Key-value backends
//!
//! The entry store persists its whole collection into a single named slot.
//! [`FileStore`] keeps each slot in its own JSON file; [`MemoryStore`] keeps
//! slots in memory for tests and embedding.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ReadlogError, ReadlogResult};

use super::file_io::{read_text_if_exists, write_text_atomic};

/// A string-valued key-value slot store
pub trait KeyValueStore {
    /// Read a slot; `None` if it was never written
    fn get(&self, key: &str) -> ReadlogResult<Option<String>>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> ReadlogResult<()>;
}

/// Slots stored as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ReadlogResult<Option<String>> {
        read_text_if_exists(self.slot_path(key))
    }

    fn set(&self, key: &str, value: &str) -> ReadlogResult<()> {
        write_text_atomic(self.slot_path(key), value)
    }
}

/// In-memory slots
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ReadlogResult<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| ReadlogError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ReadlogResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| ReadlogError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("slot").unwrap(), None);

        store.set("slot", "[]").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get("slot").unwrap(), None);

        store.set("slot", r#"[{"id":"a"}]"#).unwrap();
        assert!(temp_dir.path().join("data").join("slot.json").exists());
        assert_eq!(
            store.get("slot").unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
    }
}
