//! Reading statistics
//!
//! Aggregate figures shown on the dashboard: how many entries exist, how
//! many fall inside the recency window, the average time spent and the size
//! of the collected vocabulary.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::Entry;

/// Dashboard statistics over a snapshot of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingStats {
    /// Number of entries
    pub total: usize,
    /// Entries dated within the recency window ending now
    pub recent_count: usize,
    /// Rounded mean of the positive numeric `minutes` values, 0 if none
    pub average_minutes: u64,
    /// Sum of per-entry vocabulary sizes
    pub vocab_count: usize,
    /// Window length used for `recent_count`, in days
    pub window_days: u32,
}

impl ReadingStats {
    /// Compute statistics for `entries` as of `now`
    pub fn compute(entries: &[Entry], now: DateTime<Utc>, window_days: u32) -> Self {
        let window = Duration::days(i64::from(window_days));

        let recent_count = entries
            .iter()
            .filter_map(|e| parse_entry_date(&e.date))
            .filter(|d| now - *d <= window)
            .count();

        let minutes: Vec<f64> = entries.iter().filter_map(|e| e.minutes.positive()).collect();
        let average_minutes = if minutes.is_empty() {
            0
        } else {
            let mean = minutes.iter().sum::<f64>() / minutes.len() as f64;
            mean.round() as u64
        };

        let vocab_count = entries.iter().map(|e| e.vocab.len()).sum();

        Self {
            total: entries.len(),
            recent_count,
            average_minutes,
            vocab_count,
            window_days,
        }
    }

    /// Format the statistics for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Reading Statistics\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<28} {:>10}\n", "Entries:", self.total));
        output.push_str(&format!(
            "{:<28} {:>10}\n",
            format!("Last {} days:", self.window_days),
            self.recent_count
        ));
        output.push_str(&format!(
            "{:<28} {:>10}\n",
            "Average minutes:", self.average_minutes
        ));
        output.push_str(&format!(
            "{:<28} {:>10}\n",
            "Vocabulary collected:", self.vocab_count
        ));

        output
    }
}

/// Interpret an entry date as an instant.
///
/// `YYYY-MM-DD` is taken as midnight UTC; full RFC 3339 timestamps are also
/// understood. Anything else is not a date.
pub fn parse_entry_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
