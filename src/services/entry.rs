//! Entry service
//!
//! Business logic on top of the entry store: user-typed id resolution, input
//! checks that only warn, and an audit record for every change.

use chrono::NaiveDate;
use log::{info, warn};

use crate::audit::Subject;
use crate::error::{ReadlogError, ReadlogResult};
use crate::models::{Entry, EntryPatch, Topic};
use crate::storage::Storage;

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a blank entry, then apply `initial` if it sets anything
    pub fn create(&self, initial: EntryPatch) -> ReadlogResult<Entry> {
        check_patch(&initial);

        let mut entry = self.storage.entries.create()?;
        if !initial.is_empty() {
            entry = self
                .storage
                .entries
                .update(&entry.id, initial)?
                .ok_or_else(|| ReadlogError::entry_not_found(entry.id.as_str()))?;
        }

        self.storage.log_create(
            Subject::Entry,
            entry.id.as_str(),
            label(&entry),
            &entry,
        )?;
        info!("Created entry {}", entry.id);

        Ok(entry)
    }

    /// Get an entry by exact id or unique prefix
    pub fn find(&self, identifier: &str) -> ReadlogResult<Option<Entry>> {
        self.storage.entries.find(identifier)
    }

    /// Like [`find`](Self::find), but a missing entry is an error
    pub fn require(&self, identifier: &str) -> ReadlogResult<Entry> {
        self.find(identifier)?
            .ok_or_else(|| ReadlogError::entry_not_found(identifier))
    }

    /// All entries in storage order
    pub fn list(&self) -> ReadlogResult<Vec<Entry>> {
        self.storage.entries.all()
    }

    /// Merge `patch` into the entry named by `identifier`
    pub fn update(&self, identifier: &str, patch: EntryPatch) -> ReadlogResult<Entry> {
        if patch.is_empty() {
            return Err(ReadlogError::Validation("Nothing to update".into()));
        }
        check_patch(&patch);

        let before = self.require(identifier)?;
        let after = self
            .storage
            .entries
            .update(&before.id, patch)?
            .ok_or_else(|| ReadlogError::entry_not_found(identifier))?;

        self.storage.log_update(
            Subject::Entry,
            after.id.as_str(),
            label(&after),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Permanently remove the entry named by `identifier`
    pub fn delete(&self, identifier: &str) -> ReadlogResult<Entry> {
        let entry = self.require(identifier)?;
        let removed = self
            .storage
            .entries
            .delete(&entry.id)?
            .ok_or_else(|| ReadlogError::entry_not_found(identifier))?;

        self.storage.log_delete(
            Subject::Entry,
            removed.id.as_str(),
            label(&removed),
            &removed,
        )?;
        info!("Deleted entry {}", removed.id);

        Ok(removed)
    }

    /// Add a vocabulary term. Returns the entry and whether it changed.
    pub fn add_vocab(&self, identifier: &str, term: &str) -> ReadlogResult<(Entry, bool)> {
        let before = self.require(identifier)?;
        let changed = self.storage.entries.add_vocab(&before.id, term)?;
        self.finish_vocab_change(before, changed)
    }

    /// Remove a vocabulary term. Returns the entry and whether it changed.
    pub fn remove_vocab(&self, identifier: &str, term: &str) -> ReadlogResult<(Entry, bool)> {
        let before = self.require(identifier)?;
        let changed = self.storage.entries.remove_vocab(&before.id, term)?;
        self.finish_vocab_change(before, changed)
    }

    /// Append previously exported entries whose ids are new
    pub fn import(&self, entries: Vec<Entry>, source: &str) -> ReadlogResult<usize> {
        let offered = entries.len();
        let added = self.storage.entries.import(entries)?;
        if added < offered {
            warn!(
                "Skipped {} entries from {} with ids already present",
                offered - added,
                source
            );
        }
        if added > 0 {
            self.storage.log_import(source, added)?;
        }
        Ok(added)
    }

    fn finish_vocab_change(&self, before: Entry, changed: bool) -> ReadlogResult<(Entry, bool)> {
        if !changed {
            return Ok((before, false));
        }
        let after = self
            .storage
            .entries
            .get(&before.id)?
            .ok_or_else(|| ReadlogError::entry_not_found(before.id.as_str()))?;

        self.storage.log_update(
            Subject::Entry,
            after.id.as_str(),
            label(&after),
            &before,
            &after,
        )?;

        Ok((after, true))
    }
}

fn label(entry: &Entry) -> Option<String> {
    let title = entry.title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Free-form fields are accepted as typed; unusual values are only reported
fn check_patch(patch: &EntryPatch) {
    if let Some(topic) = &patch.topic {
        if !topic.is_empty() && !Topic::is_known(topic) {
            match Topic::parse(topic) {
                Some(standard) => warn!(
                    "Topic '{}' differs from '{}' only by case; topic filters match exactly",
                    topic, standard
                ),
                None => warn!("'{}' is not one of the standard topics", topic),
            }
        }
    }
    if let Some(date) = &patch.date {
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            warn!(
                "Date '{}' is not YYYY-MM-DD; it will sort and count unpredictably",
                date
            );
        }
    }
}
