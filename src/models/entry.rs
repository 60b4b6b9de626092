//! Entry model
//!
//! One reading session: article metadata, the pasted excerpt, the user's own
//! translation, the assistant's corrected output, summaries and the
//! vocabulary collected from the article.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ids::EntryId;
use super::number::LooseNumber;
use super::topic::FALLBACK_TOPIC;

/// Defaults applied to freshly created entries
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDefaults {
    pub topic: String,
    pub minutes: LooseNumber,
    pub difficulty: LooseNumber,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            topic: super::Topic::default().to_string(),
            minutes: LooseNumber::from(30),
            difficulty: LooseNumber::from(3),
        }
    }
}

/// A recorded reading session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Reading date, conventionally `YYYY-MM-DD`
    pub date: String,

    /// Article title
    pub title: String,

    /// Article link
    pub url: String,

    /// Article topic (free text)
    pub topic: String,

    /// Pasted portion of the article
    pub excerpt: String,

    /// The user's own translation draft
    pub my_translation: String,

    /// Corrected output pasted back from the assistant
    pub gpt_result: String,

    /// Summary in the source language
    pub summary_en: String,

    /// Summary in the native language
    pub summary_ko: String,

    /// Terms kept from this article, unique ignoring case
    pub vocab: Vec<String>,

    /// Estimated minutes spent
    pub minutes: LooseNumber,

    /// Perceived difficulty
    pub difficulty: LooseNumber,

    /// Free-form notes
    pub notes: String,

    /// When the entry was created
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    /// When the entry was last modified
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a blank entry dated `date`
    pub fn new(date: impl Into<String>, defaults: &EntryDefaults, now: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::new(),
            date: date.into(),
            title: String::new(),
            url: String::new(),
            topic: defaults.topic.clone(),
            excerpt: String::new(),
            my_translation: String::new(),
            gpt_result: String::new(),
            summary_en: String::new(),
            summary_ko: String::new(),
            vocab: Vec::new(),
            minutes: defaults.minutes.clone(),
            difficulty: defaults.difficulty.clone(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Topic used for filtering; blank topics count as "Other"
    pub fn topic_or_other(&self) -> &str {
        if self.topic.is_empty() {
            FALLBACK_TOPIC
        } else {
            &self.topic
        }
    }

    /// Title for display, with a marker for untitled entries
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(untitled)"
        } else {
            &self.title
        }
    }

    /// Merge the set fields of `patch` and refresh `updated_at`
    pub fn apply(&mut self, patch: EntryPatch, now: DateTime<Utc>) {
        let EntryPatch {
            date,
            title,
            url,
            topic,
            excerpt,
            my_translation,
            gpt_result,
            summary_en,
            summary_ko,
            notes,
            vocab,
            minutes,
            difficulty,
        } = patch;

        set_if_some(&mut self.date, date);
        set_if_some(&mut self.title, title);
        set_if_some(&mut self.url, url);
        set_if_some(&mut self.topic, topic);
        set_if_some(&mut self.excerpt, excerpt);
        set_if_some(&mut self.my_translation, my_translation);
        set_if_some(&mut self.gpt_result, gpt_result);
        set_if_some(&mut self.summary_en, summary_en);
        set_if_some(&mut self.summary_ko, summary_ko);
        set_if_some(&mut self.notes, notes);
        set_if_some(&mut self.minutes, minutes);
        set_if_some(&mut self.difficulty, difficulty);
        if let Some(terms) = vocab {
            self.vocab = dedup_terms(terms);
        }

        self.touch(now);
    }

    /// Add a vocabulary term. Returns false if the term was blank or already
    /// present ignoring case.
    pub fn add_vocab(&mut self, term: &str, now: DateTime<Utc>) -> bool {
        let term = term.trim();
        if term.is_empty() || self.has_vocab(term) {
            return false;
        }
        self.vocab.push(term.to_string());
        self.touch(now);
        true
    }

    /// Remove a vocabulary term (exact match). Returns false if absent.
    pub fn remove_vocab(&mut self, term: &str, now: DateTime<Utc>) -> bool {
        let before = self.vocab.len();
        self.vocab.retain(|v| v != term);
        if self.vocab.len() == before {
            return false;
        }
        self.touch(now);
        true
    }

    /// Check for a term ignoring case
    pub fn has_vocab(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.vocab.iter().any(|v| v.to_lowercase() == needle)
    }

    /// Words in the excerpt
    pub fn excerpt_words(&self) -> usize {
        word_count(&self.excerpt)
    }

    /// Lines in the excerpt
    pub fn excerpt_lines(&self) -> usize {
        line_count(&self.excerpt)
    }

    /// Record a modification at `now`. `updated_at` never moves backwards or
    /// stays put, even when the clock does not advance between calls.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

fn set_if_some<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Partial update of an entry; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub date: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub topic: Option<String>,
    pub excerpt: Option<String>,
    pub my_translation: Option<String>,
    pub gpt_result: Option<String>,
    pub summary_en: Option<String>,
    pub summary_ko: Option<String>,
    pub notes: Option<String>,
    pub vocab: Option<Vec<String>>,
    pub minutes: Option<LooseNumber>,
    pub difficulty: Option<LooseNumber>,
}

impl EntryPatch {
    /// Check if the patch sets no field at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Trim terms, drop blanks and keep the first of any case-insensitive
/// duplicates
pub fn dedup_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
        .collect()
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of lines; empty text has none
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

/// Timestamps are written as RFC 3339. Integer epoch milliseconds are
/// accepted on read.
mod timestamp {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Millis(ms) => Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", ms))),
            Raw::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(de::Error::custom),
        }
    }
}
