//! Article topics
//!
//! Entries store their topic as free text. [`Topic`] lists the conventional
//! choices offered by the CLI and used for the default of new entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic assumed for entries whose topic is blank
pub const FALLBACK_TOPIC: &str = "Other";

/// Conventional article topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Topic {
    Politics,
    Science,
    #[default]
    Health,
    Business,
    Culture,
    Opinion,
    World,
    Tech,
    Climate,
    Other,
}

impl Topic {
    /// All topics in display order
    pub const ALL: [Topic; 10] = [
        Topic::Politics,
        Topic::Science,
        Topic::Health,
        Topic::Business,
        Topic::Culture,
        Topic::Opinion,
        Topic::World,
        Topic::Tech,
        Topic::Climate,
        Topic::Other,
    ];

    /// Topic label as stored on entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Politics => "Politics",
            Self::Science => "Science",
            Self::Health => "Health",
            Self::Business => "Business",
            Self::Culture => "Culture",
            Self::Opinion => "Opinion",
            Self::World => "World",
            Self::Tech => "Tech",
            Self::Climate => "Climate",
            Self::Other => "Other",
        }
    }

    /// Parse a topic label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Check whether a free-text topic is one of the conventional ones
    pub fn is_known(s: &str) -> bool {
        Self::ALL.iter().any(|t| t.as_str() == s)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Topic::parse("science"), Some(Topic::Science));
        assert_eq!(Topic::parse(" TECH "), Some(Topic::Tech));
        assert_eq!(Topic::parse("Sports"), None);
    }

    #[test]
    fn test_is_known_is_exact() {
        assert!(Topic::is_known("Climate"));
        assert!(!Topic::is_known("climate"));
        assert!(!Topic::is_known("Sports"));
    }

    #[test]
    fn test_default_topic() {
        assert_eq!(Topic::default(), Topic::Health);
        assert_eq!(Topic::ALL.len(), 10);
        assert_eq!(Topic::Other.as_str(), FALLBACK_TOPIC);
    }
}
