//! Entry CLI commands
//!
//! Implements the commands that create, list, show, edit and delete entries.

use std::fs;
use std::io::Read;

use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::display::{format_dashboard, format_entry_details, format_entry_list};
use crate::error::{ReadlogError, ReadlogResult};
use crate::models::{EntryPatch, LooseNumber};
use crate::reports::{filter_entries, recent, ReadingStats, TopicFilter, DASHBOARD_RECENT};
use crate::services::EntryService;
use crate::storage::Storage;

// `--excerpt` and `--result` values starting with `@` are read from a file
// (`@-` reads stdin, `@@` escapes a literal `@`). Other fields are literal.
#[derive(Args, Debug, Default)]
pub struct EntryFields {
    /// Article title
    #[arg(long)]
    pub title: Option<String>,

    /// Article link
    #[arg(long)]
    pub url: Option<String>,

    /// Topic (Politics, Science, Health, Business, Culture, Opinion, World, Tech, Climate, Other)
    #[arg(long)]
    pub topic: Option<String>,

    /// Reading date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Pasted article excerpt (@FILE reads a file, @- reads stdin, @@ for a literal @)
    #[arg(long)]
    pub excerpt: Option<String>,

    /// Your own translation
    #[arg(long)]
    pub translation: Option<String>,

    /// Corrected output from the assistant (@FILE or @- as for --excerpt)
    #[arg(long)]
    pub result: Option<String>,

    /// Summary in the source language
    #[arg(long)]
    pub summary_en: Option<String>,

    /// Summary in your native language
    #[arg(long)]
    pub summary_native: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Minutes spent
    #[arg(long)]
    pub minutes: Option<String>,

    /// Perceived difficulty
    #[arg(long)]
    pub difficulty: Option<String>,
}

impl EntryFields {
    /// Build a patch, resolving `@file` arguments for the long text fields
    pub fn into_patch(self) -> ReadlogResult<EntryPatch> {
        Ok(EntryPatch {
            date: self.date,
            title: self.title,
            url: self.url,
            topic: self.topic,
            excerpt: self.excerpt.map(|v| resolve_text(&v)).transpose()?,
            my_translation: self.translation,
            gpt_result: self.result.map(|v| resolve_text(&v)).transpose()?,
            summary_en: self.summary_en,
            summary_ko: self.summary_native,
            notes: self.notes,
            vocab: None,
            minutes: self.minutes.as_deref().map(LooseNumber::from_input),
            difficulty: self.difficulty.as_deref().map(LooseNumber::from_input),
        })
    }
}

/// Read `@path` / `@-` arguments; anything else is taken literally
fn resolve_text(value: &str) -> ReadlogResult<String> {
    if let Some(literal) = value.strip_prefix("@@") {
        return Ok(format!("@{}", literal));
    }
    match value.strip_prefix('@') {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path)
            .map_err(|e| ReadlogError::Io(format!("Failed to read {}: {}", path, e))),
        None => Ok(value.to_string()),
    }
}

/// Entry commands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Record a new reading session
    New {
        #[command(flatten)]
        fields: EntryFields,
    },

    /// List entries, newest date first
    #[command(alias = "ls")]
    List {
        /// Only entries with this topic ("All" for every topic)
        #[arg(short, long)]
        topic: Option<String>,

        /// Search title, link, excerpt and summaries
        #[arg(short, long)]
        query: Option<String>,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one entry in full
    Show {
        /// Entry ID or unique prefix
        id: String,
    },

    /// Change fields of an entry
    Edit {
        /// Entry ID or unique prefix
        id: String,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Permanently delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID or unique prefix
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show statistics and the most recent entries
    Stats,
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> ReadlogResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::New { fields } => {
            let entry = service.create(fields.into_patch()?)?;
            println!("Created entry: {}", entry.id);
            println!("  Date:  {}", entry.date);
            println!("  Topic: {}", entry.topic);
            if !entry.title.is_empty() {
                println!("  Title: {}", entry.title);
            }
        }

        EntryCommands::List {
            topic,
            query,
            limit,
            json,
        } => {
            let filter = topic.as_deref().map(TopicFilter::parse).unwrap_or_default();
            let mut entries = filter_entries(
                &service.list()?,
                &filter,
                query.as_deref().unwrap_or(""),
            );
            if let Some(limit) = limit {
                entries.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", format_entry_list(&entries));
                if entries.is_empty() {
                    println!();
                }
            }
        }

        EntryCommands::Show { id } => {
            let entry = service.require(&id)?;
            print!("{}", format_entry_details(&entry));
        }

        EntryCommands::Edit { id, fields } => {
            let entry = service.update(&id, fields.into_patch()?)?;
            println!("Updated entry: {} ({})", entry.display_title(), entry.id.short());
        }

        EntryCommands::Delete { id, force } => {
            let entry = service.require(&id)?;

            if !force {
                println!(
                    "About to delete entry: {} ({}, {})",
                    entry.display_title(),
                    entry.date,
                    entry.id.short()
                );
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(entry.id.as_str())?;
            println!("Deleted entry: {}", deleted.display_title());
        }

        EntryCommands::Stats => print_dashboard(storage, settings)?,
    }

    Ok(())
}

/// Print statistics and the most recent entries
pub fn print_dashboard(storage: &Storage, settings: &Settings) -> ReadlogResult<()> {
    let entries = storage.entries.all()?;
    let now = storage.entries.clock().now();
    let stats = ReadingStats::compute(&entries, now, settings.recent_window_days);
    print!(
        "{}",
        format_dashboard(&stats, &recent(&entries, DASHBOARD_RECENT))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fields_into_patch() {
        let patch = EntryFields {
            title: Some("Heatwave".into()),
            minutes: Some("abc".into()),
            difficulty: Some("4".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("Heatwave"));
        assert_eq!(patch.minutes, Some(LooseNumber::Text("abc".into())));
        assert_eq!(patch.difficulty, Some(LooseNumber::Number(4.0)));
        assert!(patch.vocab.is_none());
        assert!(EntryFields::default().into_patch().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_text_reads_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("excerpt.txt");
        fs::write(&path, "Line one.\nLine two.\n").unwrap();

        let text = resolve_text(&format!("@{}", path.display())).unwrap();
        assert_eq!(text, "Line one.\nLine two.\n");
        assert_eq!(resolve_text("plain").unwrap(), "plain");
        assert!(resolve_text("@/definitely/not/here.txt").is_err());
        assert_eq!(resolve_text("@@BBC said so").unwrap(), "@BBC said so");
    }

    #[test]
    fn test_short_fields_keep_leading_at() {
        let patch = EntryFields {
            notes: Some("@BBC said rates stay high".into()),
            translation: Some("@출처 없음".into()),
            summary_en: Some("@home".into()),
            summary_native: Some("@집".into()),
            ..Default::default()
        }
        .into_patch()
        .unwrap();

        assert_eq!(patch.notes.as_deref(), Some("@BBC said rates stay high"));
        assert_eq!(patch.my_translation.as_deref(), Some("@출처 없음"));
        assert_eq!(patch.summary_en.as_deref(), Some("@home"));
        assert_eq!(patch.summary_ko.as_deref(), Some("@집"));
    }
}
