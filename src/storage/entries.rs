//! Entry store
//!
//! Owns the ordered collection of entries and writes the whole collection to
//! its key-value slot after every mutation. Newest entries come first.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::clock::{iso_date, Clock};
use crate::error::{ReadlogError, ReadlogResult};
use crate::models::{dedup_terms, Entry, EntryDefaults, EntryId, EntryPatch};

use super::kv::KeyValueStore;

/// Slot holding the serialized entry collection
pub const ENTRIES_KEY: &str = "reading_tracker_v1";

/// Repository for entry persistence
pub struct EntryStore {
    backend: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    defaults: EntryDefaults,
    entries: RwLock<Vec<Entry>>,
}

impl EntryStore {
    /// Open the store, loading whatever the slot holds.
    ///
    /// A missing slot or malformed content yields an empty collection. Only a
    /// failure to read the backend at all is an error.
    pub fn open(
        backend: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        defaults: EntryDefaults,
    ) -> ReadlogResult<Self> {
        let entries = match backend.get(ENTRIES_KEY)? {
            Some(raw) => parse_entries(&raw),
            None => Vec::new(),
        };
        debug!("Loaded {} entries from slot '{}'", entries.len(), ENTRIES_KEY);

        Ok(Self {
            backend,
            clock,
            defaults,
            entries: RwLock::new(entries),
        })
    }

    /// Create a blank entry dated today, insert it at the front and persist
    pub fn create(&self) -> ReadlogResult<Entry> {
        let mut entries = self.write()?;
        let entry = Entry::new(iso_date(self.clock.today()), &self.defaults, self.clock.now());
        let mut next = entries.clone();
        next.insert(0, entry.clone());
        self.commit(&mut entries, next)?;
        Ok(entry)
    }

    /// Merge `patch` into the entry with `id`.
    ///
    /// Returns the updated entry, or `None` (and changes nothing) if no entry
    /// has that id.
    pub fn update(&self, id: &EntryId, patch: EntryPatch) -> ReadlogResult<Option<Entry>> {
        let mut entries = self.write()?;
        let mut next = entries.clone();
        let Some(entry) = next.iter_mut().find(|e| &e.id == id) else {
            return Ok(None);
        };
        entry.apply(patch, self.clock.now());
        let updated = entry.clone();
        self.commit(&mut entries, next)?;
        Ok(Some(updated))
    }

    /// Remove the entry with `id`. Deleting an absent id is a no-op.
    pub fn delete(&self, id: &EntryId) -> ReadlogResult<Option<Entry>> {
        let mut entries = self.write()?;
        let Some(pos) = entries.iter().position(|e| &e.id == id) else {
            return Ok(None);
        };
        let mut next = entries.clone();
        let removed = next.remove(pos);
        self.commit(&mut entries, next)?;
        Ok(Some(removed))
    }

    /// Add a vocabulary term to an entry. Returns false when the entry is
    /// missing or the term was blank or already present.
    pub fn add_vocab(&self, id: &EntryId, term: &str) -> ReadlogResult<bool> {
        self.modify(id, |entry, now| entry.add_vocab(term, now))
    }

    /// Remove a vocabulary term from an entry. Returns false when nothing
    /// was removed.
    pub fn remove_vocab(&self, id: &EntryId, term: &str) -> ReadlogResult<bool> {
        self.modify(id, |entry, now| entry.remove_vocab(term, now))
    }

    /// Append entries whose ids are not present yet, keeping their order.
    /// Vocabulary is normalised the same way edits normalise it. Returns how
    /// many were added.
    pub fn import(&self, incoming: Vec<Entry>) -> ReadlogResult<usize> {
        let mut entries = self.write()?;
        let mut next = entries.clone();
        for mut entry in incoming {
            if !next.iter().any(|e| e.id == entry.id) {
                normalize_vocab(&mut entry);
                next.push(entry);
            }
        }
        let added = next.len() - entries.len();
        if added > 0 {
            self.commit(&mut entries, next)?;
        }
        Ok(added)
    }

    /// Snapshot of all entries in storage order
    pub fn all(&self) -> ReadlogResult<Vec<Entry>> {
        Ok(self.read()?.clone())
    }

    /// Get an entry by exact id
    pub fn get(&self, id: &EntryId) -> ReadlogResult<Option<Entry>> {
        Ok(self.read()?.iter().find(|e| &e.id == id).cloned())
    }

    /// Find an entry by exact id or unique id prefix
    pub fn find(&self, identifier: &str) -> ReadlogResult<Option<Entry>> {
        let entries = self.read()?;
        let identifier = identifier.trim();

        if let Some(entry) = entries.iter().find(|e| e.id.as_str() == identifier) {
            return Ok(Some(entry.clone()));
        }

        let matches: Vec<_> = entries
            .iter()
            .filter(|e| e.id.matches_prefix(identifier))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [entry] => Ok(Some((*entry).clone())),
            _ => Err(ReadlogError::AmbiguousId {
                prefix: identifier.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Count entries
    pub fn count(&self) -> ReadlogResult<usize> {
        Ok(self.read()?.len())
    }

    /// The clock this store stamps entries with
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn modify<F>(&self, id: &EntryId, f: F) -> ReadlogResult<bool>
    where
        F: FnOnce(&mut Entry, chrono::DateTime<chrono::Utc>) -> bool,
    {
        let mut entries = self.write()?;
        let mut next = entries.clone();
        let Some(entry) = next.iter_mut().find(|e| &e.id == id) else {
            return Ok(false);
        };
        if !f(entry, self.clock.now()) {
            return Ok(false);
        }
        self.commit(&mut entries, next)?;
        Ok(true)
    }

    /// Write `next` to the slot, then make it the in-memory collection.
    /// A failed write leaves both unchanged.
    fn commit(&self, entries: &mut Vec<Entry>, next: Vec<Entry>) -> ReadlogResult<()> {
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &[Entry]) -> ReadlogResult<()> {
        let json = serde_json::to_string(entries)
            .map_err(|e| ReadlogError::Storage(format!("Failed to serialize entries: {}", e)))?;
        self.backend.set(ENTRIES_KEY, &json)?;
        debug!("Persisted {} entries", entries.len());
        Ok(())
    }

    fn read(&self) -> ReadlogResult<RwLockReadGuard<'_, Vec<Entry>>> {
        self.entries
            .read()
            .map_err(|e| ReadlogError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> ReadlogResult<RwLockWriteGuard<'_, Vec<Entry>>> {
        self.entries
            .write()
            .map_err(|e| ReadlogError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// Deserialize a persisted collection, falling back to empty on bad content
fn parse_entries(raw: &str) -> Vec<Entry> {
    if raw.trim().is_empty() || raw.trim() == "null" {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Entry>>(raw) {
        Ok(mut entries) => {
            entries.iter_mut().for_each(normalize_vocab);
            entries
        }
        Err(e) => {
            warn!("Ignoring malformed entry data in '{}': {}", ENTRIES_KEY, e);
            Vec::new()
        }
    }
}

/// Trim terms and drop blanks and case-insensitive repeats, keeping the
/// first spelling seen
fn normalize_vocab(entry: &mut Entry) {
    entry.vocab = dedup_terms(std::mem::take(&mut entry.vocab));
}
