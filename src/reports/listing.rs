//! Filtered entry listing
//!
//! The list view narrows entries by topic and a free-text query, newest date
//! first. The dashboard shows the head of the unfiltered list.

use std::fmt;

use crate::models::Entry;

/// Number of entries shown on the dashboard
pub const DASHBOARD_RECENT: usize = 4;

/// Topic selection for the list view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopicFilter {
    /// Every entry
    #[default]
    All,
    /// Entries whose topic (blank counting as "Other") equals this exactly
    Topic(String),
}

impl TopicFilter {
    /// `"All"` (any case) or an empty string selects everything; anything
    /// else is an exact topic
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Topic(s.to_string())
        }
    }

    /// Check if an entry passes this filter
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::All => true,
            Self::Topic(topic) => entry.topic_or_other() == topic,
        }
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Topic(topic) => write!(f, "{}", topic),
        }
    }
}

/// Text searched by the free-text query
fn haystack(entry: &Entry) -> String {
    format!(
        "{} {} {} {} {}",
        entry.title, entry.url, entry.excerpt, entry.summary_ko, entry.summary_en
    )
    .to_lowercase()
}

/// Entries matching `filter` and `query`, sorted by date descending.
///
/// The query is trimmed and matched case-insensitively as a substring of the
/// title, link, excerpt and both summaries. Dates compare as plain strings;
/// entries with equal dates keep their storage order.
pub fn filter_entries(entries: &[Entry], filter: &TopicFilter, query: &str) -> Vec<Entry> {
    let query = query.trim().to_lowercase();

    let mut matched: Vec<Entry> = entries
        .iter()
        .filter(|e| filter.matches(e))
        .filter(|e| query.is_empty() || haystack(e).contains(&query))
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

/// The first `n` entries of the unfiltered list
pub fn recent(entries: &[Entry], n: usize) -> Vec<Entry> {
    let mut all = filter_entries(entries, &TopicFilter::All, "");
    all.truncate(n);
    all
}

/// Per-topic entry counts, blank topics counted as "Other", most common first
pub fn topic_counts(entries: &[Entry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        let topic = entry.topic_or_other();
        match counts.iter_mut().find(|(t, _)| t == topic) {
            Some((_, n)) => *n += 1,
            None => counts.push((topic.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, date: &str, topic: &str) -> Entry {
        Entry {
            title: title.into(),
            date: date.into(),
            topic: topic.into(),
            ..Default::default()
        }
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let entries = vec![
            entry("a", "2025-10-01", "Health"),
            entry("b", "2025-10-03", "Health"),
            entry("c", "2025-10-02", "Health"),
        ];
        let listed = filter_entries(&entries, &TopicFilter::All, "");
        assert_eq!(titles(&listed), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_equal_dates_keep_storage_order() {
        let entries = vec![
            entry("first", "2025-10-01", ""),
            entry("second", "2025-10-01", ""),
            entry("third", "2025-10-01", ""),
        ];
        let listed = filter_entries(&entries, &TopicFilter::All, "");
        assert_eq!(titles(&listed), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_topic_filter_treats_blank_as_other() {
        let entries = vec![
            entry("a", "2025-10-01", ""),
            entry("b", "2025-10-02", "Other"),
            entry("c", "2025-10-03", "Science"),
        ];
        let other = filter_entries(&entries, &TopicFilter::parse("Other"), "");
        assert_eq!(titles(&other), vec!["b", "a"]);

        let science = filter_entries(&entries, &TopicFilter::Topic("Science".into()), "");
        assert_eq!(titles(&science), vec!["c"]);

        // exact match only
        assert!(filter_entries(&entries, &TopicFilter::parse("science"), "").is_empty());
    }

    #[test]
    fn test_query_searches_text_fields() {
        let mut summarized = entry("Markets", "2025-10-01", "Business");
        summarized.summary_ko = "금리 인상".into();
        let mut linked = entry("Other story", "2025-10-02", "World");
        linked.url = "https://example.com/RATES".into();
        let mut noted = entry("Notes only", "2025-10-03", "World");
        noted.notes = "rates".into();

        let entries = vec![summarized, linked, noted];

        let hits = filter_entries(&entries, &TopicFilter::All, "  Rates ");
        assert_eq!(titles(&hits), vec!["Other story"]);

        let hits = filter_entries(&entries, &TopicFilter::All, "금리");
        assert_eq!(titles(&hits), vec!["Markets"]);
    }

    #[test]
    fn test_filter_and_query_combine() {
        let entries = vec![
            entry("Rates up", "2025-10-01", "Business"),
            entry("Rates down", "2025-10-02", "World"),
        ];
        let hits = filter_entries(&entries, &TopicFilter::parse("World"), "rates");
        assert_eq!(titles(&hits), vec!["Rates down"]);
    }

    #[test]
    fn test_recent_takes_head_of_sorted_list() {
        let entries: Vec<Entry> = (1..=6)
            .map(|d| entry(&format!("day {}", d), &format!("2025-10-0{}", d), ""))
            .collect();
        let head = recent(&entries, DASHBOARD_RECENT);
        assert_eq!(titles(&head), vec!["day 6", "day 5", "day 4", "day 3"]);
    }

    #[test]
    fn test_topic_counts() {
        let entries = vec![
            entry("a", "", "Tech"),
            entry("b", "", ""),
            entry("c", "", "Tech"),
            entry("d", "", "Other"),
            entry("e", "", "Climate"),
        ];
        assert_eq!(
            topic_counts(&entries),
            vec![
                ("Other".to_string(), 2),
                ("Tech".to_string(), 2),
                ("Climate".to_string(), 1),
            ]
        );
    }
}
