//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod config;
pub mod entry;
pub mod export;
pub mod prompt;
pub mod vocab;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, ConfigCommands};
pub use entry::{handle_entry_command, print_dashboard, EntryCommands, EntryFields};
pub use export::{handle_export_command, handle_import_command, ExportFormat};
pub use prompt::handle_prompt_command;
pub use vocab::{handle_vocab_command, VocabCommands};
