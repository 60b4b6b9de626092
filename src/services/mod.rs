//! Service layer for readlog
//!
//! The service layer sits between the CLI and the storage layer, resolving
//! user-typed ids and writing the audit trail.

pub mod entry;

pub use entry::EntryService;
