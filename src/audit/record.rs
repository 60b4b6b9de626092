//! Audit record data structures
//!
//! One line of the audit log: what happened, to which entry (or to the
//! settings), and the state before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::generate_diff;

/// Fields left out of update diffs
const DIFF_IGNORED: &[&str] = &["updatedAt"];

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// What the change applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Entry,
    Settings,
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Entry => write!(f, "Entry"),
            Subject::Settings => write!(f, "Settings"),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub subject: Subject,

    /// Entry id, or "settings"
    pub subject_id: String,

    /// Human-readable label (entry title)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Summary of changed fields, for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditRecord {
    fn new(
        timestamp: DateTime<Utc>,
        operation: Operation,
        subject: Subject,
        subject_id: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            operation,
            subject,
            subject_id: subject_id.into(),
            label,
            before: None,
            after: None,
            changes: None,
        }
    }

    /// Record the creation of `value`
    pub fn created<T: Serialize>(
        timestamp: DateTime<Utc>,
        subject: Subject,
        subject_id: impl Into<String>,
        label: Option<String>,
        value: &T,
    ) -> Self {
        let mut record = Self::new(timestamp, Operation::Create, subject, subject_id, label);
        record.after = serde_json::to_value(value).ok();
        record
    }

    /// Record a change from `before` to `after`, with a field diff
    pub fn updated<T: Serialize>(
        timestamp: DateTime<Utc>,
        subject: Subject,
        subject_id: impl Into<String>,
        label: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut record = Self::new(timestamp, Operation::Update, subject, subject_id, label);
        record.before = serde_json::to_value(before).ok();
        record.after = serde_json::to_value(after).ok();
        if let (Some(b), Some(a)) = (&record.before, &record.after) {
            record.changes = generate_diff(b, a, DIFF_IGNORED);
        }
        record
    }

    /// Record the removal of `value`
    pub fn deleted<T: Serialize>(
        timestamp: DateTime<Utc>,
        subject: Subject,
        subject_id: impl Into<String>,
        label: Option<String>,
        value: &T,
    ) -> Self {
        let mut record = Self::new(timestamp, Operation::Delete, subject, subject_id, label);
        record.before = serde_json::to_value(value).ok();
        record
    }

    /// Record a bulk import of `count` entries from `source`
    pub fn imported(timestamp: DateTime<Utc>, source: impl Into<String>, count: usize) -> Self {
        let mut record = Self::new(timestamp, Operation::Import, Subject::Entry, source, None);
        record.changes = Some(format!("{} entries added", count));
        record
    }

    /// One-line summary, plus the change list on a second line if present
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.subject,
            self.subject_id
        );

        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            output.push_str(&format!(" ({})", label));
        }

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 9, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_created_record() {
        let record = AuditRecord::created(
            ts(),
            Subject::Entry,
            "abc",
            Some("Heatwave".into()),
            &json!({"title": "Heatwave"}),
        );
        assert_eq!(record.operation, Operation::Create);
        assert!(record.before.is_none());
        assert!(record.after.is_some());
    }

    #[test]
    fn test_updated_record_skips_updated_at() {
        let before = json!({"title": "A", "updatedAt": "2025-10-09T08:00:00Z"});
        let after = json!({"title": "B", "updatedAt": "2025-10-09T08:05:00Z"});
        let record = AuditRecord::updated(ts(), Subject::Entry, "abc", None, &before, &after);

        let changes = record.changes.unwrap();
        assert!(changes.contains("title: \"A\" -> \"B\""));
        assert!(!changes.contains("updatedAt"));
    }

    #[test]
    fn test_deleted_record() {
        let record =
            AuditRecord::deleted(ts(), Subject::Entry, "abc", None, &json!({"title": "x"}));
        assert_eq!(record.operation, Operation::Delete);
        assert!(record.before.is_some());
        assert!(record.after.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let record = AuditRecord::imported(ts(), "backup.json", 4);
        let formatted = record.format_human_readable();
        assert!(formatted.starts_with("[2025-10-09 08:00:00 UTC] IMPORT Entry backup.json"));
        assert!(formatted.contains("4 entries added"));
    }

    #[test]
    fn test_serialization() {
        let record = AuditRecord::created(ts(), Subject::Settings, "settings", None, &json!({}));
        let line = serde_json::to_string(&record).unwrap();
        assert!(line.contains("\"subject\":\"settings\""));
        assert!(!line.contains("label"));

        let back: AuditRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back.operation, Operation::Create);
        assert_eq!(back.subject, Subject::Settings);
    }
}
