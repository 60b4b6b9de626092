//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries, the dashboard and the
//! vocabulary for terminal display.

pub mod entry;

pub use entry::{format_dashboard, format_entry_details, format_entry_list, format_vocabulary};
