//! Reports module for readlog
//!
//! Derived views recomputed from a snapshot of the entry store: dashboard
//! statistics, the filtered list and the global vocabulary.

pub mod listing;
pub mod stats;
pub mod vocabulary;

pub use listing::{filter_entries, recent, topic_counts, TopicFilter, DASHBOARD_RECENT};
pub use stats::{parse_entry_date, ReadingStats};
pub use vocabulary::global_vocabulary;
