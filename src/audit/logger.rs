//! Append-only audit log
//!
//! Each record is written as one JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{ReadlogError, ReadlogResult};

use super::record::AuditRecord;

/// Writes audit records to a JSONL file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a logger appending to `log_path`
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one record
    pub fn log(&self, record: &AuditRecord) -> ReadlogResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ReadlogError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(record)
            .map_err(|e| ReadlogError::Json(format!("Failed to serialize audit record: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ReadlogError::Io(format!("Failed to write audit record: {}", e)))?;

        file.flush()
            .map_err(|e| ReadlogError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read every record, oldest first. Blank lines are skipped.
    pub fn read_all(&self) -> ReadlogResult<Vec<AuditRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ReadlogError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut records = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                ReadlogError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let record: AuditRecord = serde_json::from_str(&line).map_err(|e| {
                ReadlogError::Json(format!(
                    "Failed to parse audit record at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// The most recent `count` records, oldest first
    pub fn read_recent(&self, count: usize) -> ReadlogResult<Vec<AuditRecord>> {
        let mut all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all.split_off(start))
    }

    /// Path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
