//! Prompt generation
//!
//! Turns one entry into the instruction block the user pastes into an
//! external assistant. The output depends only on the entry and the two
//! language names, so the same entry always yields the same text.

use crate::config::settings::Settings;
use crate::models::Entry;

/// Shown for missing article metadata
pub const MISSING_FIELD: &str = "(not provided)";

/// Shown when no excerpt has been pasted yet
pub const MISSING_EXCERPT: &str =
    "(Paste the article text here. If it is long, excerpt about 10-20 sentences.)";

/// Shown when the user has not written a translation yet
pub const MISSING_TRANSLATION: &str = "(none yet)";

/// Builds assistant prompts for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    source_language: String,
    native_language: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new("English", "Korean")
    }
}

impl PromptBuilder {
    /// Create a builder for reading `source_language` articles and
    /// translating into `native_language`
    pub fn new(source_language: impl Into<String>, native_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            native_language: native_language.into(),
        }
    }

    /// Use the language names from the user's settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.source_language, &settings.native_language)
    }

    /// Render the prompt for `entry`
    pub fn build_prompt(&self, entry: &Entry) -> String {
        let src = &self.source_language;
        let native = &self.native_language;

        let mut out = String::new();
        out.push_str(&format!(
            "I am practicing {src} reading comprehension with one news article a day.\n\n"
        ));

        out.push_str("[Article]\n");
        out.push_str(&format!("- Title: {}\n", or_placeholder(&entry.title, MISSING_FIELD)));
        out.push_str(&format!("- Link: {}\n", or_placeholder(&entry.url, MISSING_FIELD)));
        out.push_str(&format!("- Topic: {}\n", or_placeholder(&entry.topic, MISSING_FIELD)));
        out.push_str(&format!("- Date: {}\n\n", or_placeholder(&entry.date, MISSING_FIELD)));

        out.push_str("[Excerpt]\n");
        out.push_str(or_placeholder(&entry.excerpt, MISSING_EXCERPT));
        out.push_str("\n\n");

        out.push_str("[My translation (if any)]\n");
        out.push_str(or_placeholder(&entry.my_translation, MISSING_TRANSLATION));
        out.push_str("\n\n");

        out.push_str("Requests:\n");
        out.push_str(&format!(
            "1) Translate the excerpt into natural {native}.\n"
        ));
        out.push_str(
            "2) If I wrote a translation, correct the awkward parts (comment sentence by sentence).\n",
        );
        out.push_str("3) 5 key expressions, each with 1 short example sentence.\n");
        out.push_str(&format!(
            "4) Core summary: 2 sentences in {src} + 2 sentences in {native}.\n"
        ));
        out.push_str(
            "5) 10 words/expressions grouped by difficulty (basic / intermediate / advanced).\n\n",
        );

        out.push_str("Note: keep the translation natural, not overly literary.");
        out
    }
}

/// Render with the default languages
pub fn build_prompt(entry: &Entry) -> String {
    PromptBuilder::default().build_prompt(entry)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}
