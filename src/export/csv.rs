//! CSV Export functionality
//!
//! One row per entry, for spreadsheets. Multi-line text fields are quoted by
//! the writer; vocabulary terms are joined with "; ".

use std::io::Write;

use crate::error::{ReadlogError, ReadlogResult};
use crate::models::Entry;
use crate::storage::Storage;

const HEADER: [&str; 16] = [
    "ID",
    "Date",
    "Title",
    "URL",
    "Topic",
    "Minutes",
    "Difficulty",
    "Excerpt Words",
    "Vocabulary",
    "Excerpt",
    "My Translation",
    "Assistant Result",
    "Summary (source)",
    "Summary (native)",
    "Notes",
    "Updated At",
];

/// Export all entries to CSV
pub fn export_entries_csv<W: Write>(storage: &Storage, writer: W) -> ReadlogResult<()> {
    write_entries_csv(&storage.entries.all()?, writer)
}

/// Write `entries` as CSV rows under a header
pub fn write_entries_csv<W: Write>(entries: &[Entry], writer: W) -> ReadlogResult<()> {
    let export_err = |e: ::csv::Error| ReadlogError::Export(e.to_string());
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for entry in entries {
        let minutes = entry.minutes.to_string();
        let difficulty = entry.difficulty.to_string();
        let words = entry.excerpt_words().to_string();
        let vocab = entry.vocab.join("; ");
        let updated_at = entry.updated_at.to_rfc3339();

        csv_writer
            .write_record([
                entry.id.as_str(),
                entry.date.as_str(),
                entry.title.as_str(),
                entry.url.as_str(),
                entry.topic.as_str(),
                minutes.as_str(),
                difficulty.as_str(),
                words.as_str(),
                vocab.as_str(),
                entry.excerpt.as_str(),
                entry.my_translation.as_str(),
                entry.gpt_result.as_str(),
                entry.summary_en.as_str(),
                entry.summary_ko.as_str(),
                entry.notes.as_str(),
                updated_at.as_str(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ReadlogError::Export(e.to_string()))?;

    Ok(())
}
