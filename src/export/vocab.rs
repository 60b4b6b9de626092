//! Vocabulary export
//!
//! Plain text meant for pasting into flashcard tools: one term per line,
//! each followed by a tab so the back of the card can be filled in later.

/// One term per line, each followed by a tab. Lines are joined with `\n`
/// and there is no trailing newline.
pub fn build_vocab_export<S: AsRef<str>>(terms: &[S]) -> String {
    terms
        .iter()
        .map(|t| format!("{}\t", t.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_export_format() {
        let terms = ["headwind", "more than doubled"];
        assert_eq!(build_vocab_export(&terms), "headwind\t\nmore than doubled\t");
    }

    #[test]
    fn test_empty_vocab_export() {
        let terms: [&str; 0] = [];
        assert_eq!(build_vocab_export(&terms), "");
    }
}
