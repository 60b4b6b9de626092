//! YAML Export functionality
//!
//! Exports every entry to YAML for human-readable backup.

use std::io::Write;

use crate::error::{ReadlogError, ReadlogResult};
use crate::export::json::FullExport;
use crate::models::Entry;
use crate::storage::Storage;

/// Export all entries to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ReadlogResult<()> {
    let export = FullExport::from_storage(storage)?;
    let io_err = |e: std::io::Error| ReadlogError::Export(e.to_string());

    writeln!(writer, "# readlog export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ReadlogError::Export(e.to_string()))?;

    Ok(())
}

/// Read entries from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ReadlogResult<Vec<Entry>> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ReadlogError::Import(e.to_string()))?;

    export.validate().map_err(ReadlogError::Import)?;

    Ok(export.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ReadlogPaths;
    use crate::config::settings::Settings;
    use crate::models::{EntryPatch, LooseNumber};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReadlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_yaml_export() {
        let (_temp_dir, storage) = create_test_storage();
        let entry = storage.entries.create().unwrap();
        storage
            .entries
            .update(
                &entry.id,
                EntryPatch {
                    title: Some("Central bank holds rates".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# readlog export"));
        assert!(yaml.contains("schema_version"));
        assert!(yaml.contains("Central bank holds rates"));
        assert!(yaml.contains("myTranslation"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        let entry = storage.entries.create().unwrap();
        storage
            .entries
            .update(
                &entry.id,
                EntryPatch {
                    minutes: Some(LooseNumber::Text("abc".into())),
                    vocab: Some(vec!["tariff".into()]),
                    ..Default::default()
                },
            )
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        let imported = import_from_yaml(&yaml).unwrap();
        assert_eq!(imported, storage.entries.all().unwrap());
    }
}
