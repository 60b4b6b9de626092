//! CLI commands for data export and import

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{ReadlogError, ReadlogResult};
use crate::export::{csv, json, yaml};
use crate::services::EntryService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON (full export, can be imported)
    Json,
    /// YAML (full export, human-readable, can be imported)
    Yaml,
    /// CSV (one row per entry)
    Csv,
}

/// Write every entry to `output` in `format`
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: &Path,
    pretty: bool,
) -> ReadlogResult<()> {
    let file = File::create(output).map_err(|e| {
        ReadlogError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => json::export_full_json(storage, &mut writer, pretty)?,
        ExportFormat::Yaml => yaml::export_full_yaml(storage, &mut writer)?,
        ExportFormat::Csv => csv::export_entries_csv(storage, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ReadlogError::Export(e.to_string()))?;

    println!(
        "Exported {} entries to: {}",
        storage.entries.count()?,
        output.display()
    );
    Ok(())
}

/// Append entries from a JSON or YAML export
pub fn handle_import_command(storage: &Storage, file: &Path) -> ReadlogResult<()> {
    let contents = fs::read_to_string(file)
        .map_err(|e| ReadlogError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let entries = if is_yaml(file) {
        yaml::import_from_yaml(&contents)?
    } else {
        json::import_from_json(&contents)?
    };

    let offered = entries.len();
    let source = file.display().to_string();
    let added = EntryService::new(storage).import(entries, &source)?;

    println!("Imported {} of {} entries from: {}", added, offered, source);
    if added < offered {
        println!("{} entries were already present and skipped", offered - added);
    }
    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
