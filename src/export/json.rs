//! JSON Export functionality
//!
//! Exports every entry to JSON inside a schema-versioned wrapper, and reads
//! such files back for import. A bare JSON array of entries (the raw content
//! of the persistence slot) is accepted on import as well.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReadlogError, ReadlogResult};
use crate::models::Entry;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All entries, in storage order
    pub entries: Vec<Entry>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of entries
    pub entry_count: usize,

    /// Sum of per-entry vocabulary sizes
    pub vocab_count: usize,

    /// Smallest entry date
    pub earliest_date: Option<String>,

    /// Largest entry date
    pub latest_date: Option<String>,
}

impl FullExport {
    /// Wrap `entries` as an export taken at `exported_at`
    pub fn new(entries: Vec<Entry>, exported_at: DateTime<Utc>) -> Self {
        let dates = entries.iter().map(|e| e.date.as_str()).filter(|d| !d.is_empty());
        let metadata = ExportMetadata {
            entry_count: entries.len(),
            vocab_count: entries.iter().map(|e| e.vocab.len()).sum(),
            earliest_date: dates.clone().min().map(str::to_string),
            latest_date: dates.max().map(str::to_string),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entries,
            metadata,
        }
    }

    /// Create a full export from storage
    pub fn from_storage(storage: &Storage) -> ReadlogResult<Self> {
        let entries = storage.entries.all()?;
        Ok(Self::new(entries, storage.entries.clock().now()))
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        check_unique_ids(&self.entries)
    }
}

fn check_unique_ids(entries: &[Entry]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.id.as_str().is_empty() {
            return Err("Entry with an empty id".into());
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(format!("Duplicate entry id {}", entry.id));
        }
    }
    Ok(())
}

/// Export all entries to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ReadlogResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ReadlogError::Export(e.to_string()))?;

    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonImport {
    Full(FullExport),
    Bare(Vec<Entry>),
}

/// Read entries from a JSON export or a bare array of entries
pub fn import_from_json(json_str: &str) -> ReadlogResult<Vec<Entry>> {
    let parsed: JsonImport =
        serde_json::from_str(json_str).map_err(|e| ReadlogError::Import(e.to_string()))?;

    match parsed {
        JsonImport::Full(export) => {
            export.validate().map_err(ReadlogError::Import)?;
            Ok(export.entries)
        }
        JsonImport::Bare(entries) => {
            check_unique_ids(&entries).map_err(ReadlogError::Import)?;
            Ok(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ReadlogPaths;
    use crate::config::settings::Settings;
    use crate::models::EntryPatch;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReadlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, title: &str, date: &str, vocab: &[&str]) {
        let entry = storage.entries.create().unwrap();
        storage
            .entries
            .update(
                &entry.id,
                EntryPatch {
                    title: Some(title.into()),
                    date: Some(date.into()),
                    vocab: Some(vocab.iter().map(|s| s.to_string()).collect()),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "First", "2025-10-01", &["a", "b"]);
        add(&storage, "Second", "2025-10-05", &["c"]);

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.entries.len(), 2);
        assert_eq!(export.metadata.entry_count, 2);
        assert_eq!(export.metadata.vocab_count, 3);
        assert_eq!(export.metadata.earliest_date.as_deref(), Some("2025-10-01"));
        assert_eq!(export.metadata.latest_date.as_deref(), Some("2025-10-05"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, "Heatwave", "2025-10-01", &["scorching"]);

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();
        let json_string = String::from_utf8(json_output).unwrap();
        assert!(json_string.contains("\"schema_version\""));

        let imported = import_from_json(&json_string).unwrap();
        assert_eq!(imported, storage.entries.all().unwrap());
    }

    #[test]
    fn test_import_bare_array() {
        let json = r#"[
            {"id": "abc_1", "date": "2025-10-01", "title": "Legacy", "createdAt": 1759300000000, "updatedAt": 1759300000000},
            {"id": "abc_2", "title": "Sparse"}
        ]"#;
        let entries = import_from_json(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Legacy");
        assert!(entries[1].vocab.is_empty());
    }

    #[test]
    fn test_import_rejects_duplicates_and_bad_version() {
        let dup = r#"[{"id": "x"}, {"id": "x"}]"#;
        assert!(matches!(import_from_json(dup), Err(ReadlogError::Import(_))));

        let mut export = FullExport::new(Vec::new(), Utc::now());
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();
        assert!(import_from_json(&json).is_err());

        assert!(import_from_json("not json").is_err());
    }
}
