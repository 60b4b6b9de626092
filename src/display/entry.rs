//! Entry display formatting
//!
//! Formats entries for terminal output in table and detail views.

use crate::models::{line_count, word_count, Entry};
use crate::reports::ReadingStats;

/// Longest title shown in the list table
const TITLE_WIDTH: usize = 40;

/// Format a list of entries as a table
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }

    let topic_width = entries
        .iter()
        .map(|e| e.topic_or_other().chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<10}  {:<topic_width$}  {:<title_width$}  {:>5}  {:>5}  {:>5}\n",
        "ID",
        "Date",
        "Topic",
        "Title",
        "Min",
        "Words",
        "Vocab",
        topic_width = topic_width,
        title_width = TITLE_WIDTH,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<10}  {:-<topic_width$}  {:-<title_width$}  {:->5}  {:->5}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        topic_width = topic_width,
        title_width = TITLE_WIDTH,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<8}  {:<10}  {:<topic_width$}  {:<title_width$}  {:>5}  {:>5}  {:>5}\n",
            entry.id.short(),
            entry.date,
            entry.topic_or_other(),
            truncate(entry.display_title(), TITLE_WIDTH),
            entry.minutes.to_string(),
            entry.excerpt_words(),
            entry.vocab.len(),
            topic_width = topic_width,
            title_width = TITLE_WIDTH,
        ));
    }

    output.push_str(&format!("\n{} entries\n", entries.len()));
    output
}

/// Format a single entry's details
pub fn format_entry_details(entry: &Entry) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry: {}\n", entry.display_title()));
    output.push_str(&format!("  ID:          {}\n", entry.id));
    output.push_str(&format!("  Date:        {}\n", entry.date));
    output.push_str(&format!("  Topic:       {}\n", entry.topic));
    if !entry.url.is_empty() {
        output.push_str(&format!("  Link:        {}\n", entry.url));
    }
    output.push_str(&format!("  Minutes:     {}\n", entry.minutes));
    output.push_str(&format!("  Difficulty:  {}\n", entry.difficulty));
    output.push_str(&format!(
        "  Created:     {}\n",
        entry.created_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!(
        "  Updated:     {}\n",
        entry.updated_at.format("%Y-%m-%d %H:%M")
    ));

    push_text_section(&mut output, "Excerpt", &entry.excerpt, true);
    push_text_section(&mut output, "My translation", &entry.my_translation, true);
    push_text_section(&mut output, "Assistant result", &entry.gpt_result, false);
    push_text_section(&mut output, "Summary (source)", &entry.summary_en, false);
    push_text_section(&mut output, "Summary (native)", &entry.summary_ko, false);
    push_text_section(&mut output, "Notes", &entry.notes, false);

    output.push_str(&format!("\nVocabulary ({}):\n", entry.vocab.len()));
    if entry.vocab.is_empty() {
        output.push_str("  (none)\n");
    }
    for term in &entry.vocab {
        output.push_str(&format!("  - {}\n", term));
    }

    output
}

fn push_text_section(output: &mut String, heading: &str, text: &str, with_counts: bool) {
    if text.trim().is_empty() {
        return;
    }
    output.push('\n');
    if with_counts {
        output.push_str(&format!(
            "{} ({} words, {} lines):\n",
            heading,
            word_count(text),
            line_count(text)
        ));
    } else {
        output.push_str(&format!("{}:\n", heading));
    }
    for line in text.lines() {
        output.push_str(&format!("  {}\n", line));
    }
}

/// Format the dashboard: statistics followed by the most recent entries
pub fn format_dashboard(stats: &ReadingStats, recent: &[Entry]) -> String {
    let mut output = stats.format_terminal();

    output.push_str("\nRecent entries\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');

    if recent.is_empty() {
        output.push_str("No entries yet. Start with `readlog new`.\n");
        return output;
    }

    for entry in recent {
        output.push_str(&format!(
            "{}  {}  [{}]  {}\n",
            entry.id.short(),
            entry.date,
            entry.topic_or_other(),
            truncate(entry.display_title(), TITLE_WIDTH)
        ));
    }

    output
}

/// Format the global vocabulary, one term per line
pub fn format_vocabulary(terms: &[String]) -> String {
    if terms.is_empty() {
        return "No vocabulary collected yet.".to_string();
    }
    let mut output = String::new();
    for term in terms {
        output.push_str(term);
        output.push('\n');
    }
    output.push_str(&format!("\n{} terms\n", terms.len()));
    output
}

/// Cut `s` to at most `max` characters, marking the cut with "..."
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", head)
}
