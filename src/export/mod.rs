//! Export module for readlog
//!
//! Provides data export in several formats:
//! - JSON: machine-readable full export, also accepted by `import`
//! - YAML: human-readable full export, also accepted by `import`
//! - CSV: one row per entry, for spreadsheets
//! - Vocabulary: tab-terminated term list for flashcard tools

pub mod csv;
pub mod json;
pub mod vocab;
pub mod yaml;

pub use self::csv::{export_entries_csv, write_entries_csv};
pub use json::{export_full_json, import_from_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use vocab::build_vocab_export;
pub use yaml::{export_full_yaml, import_from_yaml};
