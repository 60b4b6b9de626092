//! Storage layer for readlog
//!
//! Provides the entry store, its key-value backends, atomic file writes and
//! the audit trail written alongside every mutation.

pub mod entries;
pub mod file_io;
pub mod kv;

pub use entries::{EntryStore, ENTRIES_KEY};
pub use file_io::{read_text_if_exists, write_text_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use serde::Serialize;

use crate::audit::{AuditLogger, AuditRecord, Subject};
use crate::clock::{Clock, SystemClock};
use crate::config::paths::ReadlogPaths;
use crate::config::settings::Settings;
use crate::error::ReadlogError;

/// Main storage coordinator: the entry store plus the audit log
pub struct Storage {
    paths: ReadlogPaths,
    pub entries: EntryStore,
    audit: AuditLogger,
}

impl Storage {
    /// Open file-backed storage under `paths` using the system clock
    pub fn new(paths: ReadlogPaths, settings: &Settings) -> Result<Self, ReadlogError> {
        paths.ensure_directories()?;
        let backend = Arc::new(FileStore::new(paths.data_dir()));
        Self::with_backend(paths, settings, backend, Arc::new(SystemClock))
    }

    /// Open storage over an arbitrary backend and clock
    pub fn with_backend(
        paths: ReadlogPaths,
        settings: &Settings,
        backend: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ReadlogError> {
        let entries = EntryStore::open(backend, clock, settings.entry_defaults())?;
        let audit = AuditLogger::new(paths.audit_log());
        Ok(Self {
            paths,
            entries,
            audit,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ReadlogPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Log a create operation
    pub fn log_create<T: Serialize>(
        &self,
        subject: Subject,
        subject_id: impl Into<String>,
        label: Option<String>,
        value: &T,
    ) -> Result<(), ReadlogError> {
        let now = self.entries.clock().now();
        self.audit
            .log(&AuditRecord::created(now, subject, subject_id, label, value))
    }

    /// Log an update operation
    pub fn log_update<T: Serialize>(
        &self,
        subject: Subject,
        subject_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), ReadlogError> {
        let now = self.entries.clock().now();
        self.audit.log(&AuditRecord::updated(
            now, subject, subject_id, label, before, after,
        ))
    }

    /// Log a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        subject: Subject,
        subject_id: impl Into<String>,
        label: Option<String>,
        value: &T,
    ) -> Result<(), ReadlogError> {
        let now = self.entries.clock().now();
        self.audit
            .log(&AuditRecord::deleted(now, subject, subject_id, label, value))
    }

    /// Log a bulk import
    pub fn log_import(&self, source: impl Into<String>, count: usize) -> Result<(), ReadlogError> {
        let now = self.entries.clock().now();
        self.audit.log(&AuditRecord::imported(now, source, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReadlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.entries.count().unwrap(), 0);
    }

    #[test]
    fn test_entries_persist_to_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReadlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone(), &Settings::default()).unwrap();

        let entry = storage.entries.create().unwrap();
        assert!(paths
            .data_dir()
            .join(format!("{}.json", ENTRIES_KEY))
            .exists());

        let reopened = Storage::new(paths, &Settings::default()).unwrap();
        assert!(reopened.entries.get(&entry.id).unwrap().is_some());
    }

    #[test]
    fn test_audit_helpers_append() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReadlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        let entry = storage.entries.create().unwrap();
        storage
            .log_create(Subject::Entry, entry.id.as_str(), None, &entry)
            .unwrap();
        storage
            .log_delete(Subject::Entry, entry.id.as_str(), None, &entry)
            .unwrap();

        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }
}
