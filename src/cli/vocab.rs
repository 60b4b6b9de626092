//! Vocabulary CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::clipboard::{copy_text, SystemClipboard};
use crate::display::format_vocabulary;
use crate::error::{ReadlogError, ReadlogResult};
use crate::export::build_vocab_export;
use crate::reports::global_vocabulary;
use crate::services::EntryService;
use crate::storage::{write_text_atomic, Storage};

/// Vocabulary subcommands
#[derive(Subcommand, Debug)]
pub enum VocabCommands {
    /// Add terms to an entry
    Add {
        /// Entry ID or unique prefix
        id: String,
        /// Terms to add
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Remove a term from an entry (exact spelling)
    Remove {
        /// Entry ID or unique prefix
        id: String,
        /// Term to remove
        term: String,
    },
    /// List terms of one entry, or of all entries when no ID is given
    List {
        /// Entry ID or unique prefix
        id: Option<String>,
    },
    /// Export all terms as tab-terminated lines
    Export {
        /// Copy to the clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
        /// Write to a file instead of printing
        #[arg(short, long, conflicts_with = "copy")]
        output: Option<PathBuf>,
    },
}

/// Handle a vocabulary command
pub fn handle_vocab_command(storage: &Storage, cmd: VocabCommands) -> ReadlogResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        VocabCommands::Add { id, terms } => {
            for term in &terms {
                let (entry, added) = service.add_vocab(&id, term)?;
                if added {
                    println!("Added '{}' to {}", term.trim(), entry.display_title());
                } else {
                    println!("Skipped '{}' (blank or already present)", term.trim());
                }
            }
        }

        VocabCommands::Remove { id, term } => {
            let (entry, removed) = service.remove_vocab(&id, &term)?;
            if !removed {
                return Err(ReadlogError::NotFound {
                    entity_type: "Term",
                    identifier: term,
                });
            }
            println!("Removed '{}' from {}", term, entry.display_title());
        }

        VocabCommands::List { id } => match id {
            Some(id) => {
                let entry = service.require(&id)?;
                println!("{}", format_vocabulary(&entry.vocab));
            }
            None => {
                let terms = global_vocabulary(&service.list()?);
                println!("{}", format_vocabulary(&terms));
            }
        },

        VocabCommands::Export { copy, output } => {
            let terms = global_vocabulary(&service.list()?);
            let text = build_vocab_export(&terms);

            if let Some(path) = output {
                write_text_atomic(&path, &text)?;
                println!("Exported {} terms to: {}", terms.len(), path.display());
            } else if copy {
                if copy_text(&mut SystemClipboard::new(), &text) {
                    println!("Copied {} terms to the clipboard", terms.len());
                } else {
                    println!("{}", text);
                }
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
