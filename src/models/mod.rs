//! Core data models for readlog
//!
//! This module contains the data structures that represent a reading log:
//! entries, their identifiers, topics and loosely-typed numeric fields.

pub mod entry;
pub mod ids;
pub mod number;
pub mod topic;

pub use entry::{dedup_terms, line_count, word_count, Entry, EntryDefaults, EntryPatch};
pub use ids::EntryId;
pub use number::LooseNumber;
pub use topic::{Topic, FALLBACK_TOPIC};
