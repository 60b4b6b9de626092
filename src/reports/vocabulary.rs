//! Global vocabulary
//!
//! Union of every entry's terms. Unlike the per-entry list, this view is
//! deduplicated exactly: "Tariff" and "tariff" from different entries both
//! appear.

use std::collections::BTreeSet;

use crate::models::Entry;

/// All distinct terms across `entries`, trimmed, blanks dropped, sorted
pub fn global_vocabulary(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.vocab.iter())
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
