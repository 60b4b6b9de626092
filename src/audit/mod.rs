//! Audit logging for readlog
//!
//! Every create, update and delete of an entry, and every settings change,
//! is appended to `audit.log` as one JSON line with before/after snapshots.

mod diff;
mod logger;
mod record;

pub use diff::generate_diff;
pub use logger::AuditLogger;
pub use record::{AuditRecord, Operation, Subject};
