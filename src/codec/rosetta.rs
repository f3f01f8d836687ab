//! Rosetta decoder header generation.
//!
//! # Wire format
//!
//! ```text
//! [DECODE]
//! <replacement>=<original>
//! P<n>="<phrase>"
//! [/DECODE]
//!
//! <compressed body>
//! ```

use serde::{Deserialize, Serialize};

use super::tables::is_universal;
use crate::error::Result;
use crate::tokenizer::{count_tokens_with, count_words, Tokenizer};

/// Opening header marker
pub const DECODE_OPEN: &str = "[DECODE]";

/// Closing header marker
pub const DECODE_CLOSE: &str = "[/DECODE]";

/// One dictionary substitution applied during a compression pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Dictionary key that matched
    pub original: String,
    /// Text written in its place (empty for deleted filler)
    pub replacement: String,
    /// Number of matches replaced
    pub occurrences: usize,
}

impl Replacement {
    /// Create a replacement record
    pub fn new(original: impl Into<String>, replacement: impl Into<String>, occurrences: usize) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            occurrences,
        }
    }

    /// Decoder line for this entry
    pub fn header_line(&self) -> String {
        format!("{}={}", self.replacement, self.original)
    }
}

/// One pattern code assigned during a compression pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternReplacement {
    /// `P1`, `P2`, ...
    pub code: String,
    /// Lowercased phrase the code stands for
    pub phrase: String,
    /// Occurrences replaced
    pub count: usize,
}

impl PatternReplacement {
    /// Decoder line for this code
    pub fn header_line(&self) -> String {
        format!("{}=\"{}\"", self.code, self.phrase)
    }
}

/// Whether a replacement earns its decoder line.
///
/// Universal abbreviations and deletions never do. Otherwise the savings over
/// all occurrences must strictly exceed the cost of the line itself.
pub fn is_net_positive(entry: &Replacement, tokenizer: Option<&Tokenizer>) -> Result<bool> {
    if entry.replacement.is_empty() || is_universal(&entry.replacement) {
        return Ok(false);
    }
    let line_cost = count_tokens_with(&entry.header_line(), tokenizer)? as i64;
    let saved = count_tokens_with(&entry.original, tokenizer)? as i64
        - count_tokens_with(&entry.replacement, tokenizer)? as i64;
    Ok(saved * entry.occurrences as i64 > line_cost)
}

/// Render the decoder header for the substitutions actually applied.
///
/// Returns an empty string when no entry survives filtering and no pattern
/// codes were assigned.
pub fn generate_rosetta(
    replacements: &[Replacement],
    patterns: &[PatternReplacement],
    tokenizer: Option<&Tokenizer>,
) -> Result<String> {
    let mut lines = Vec::with_capacity(replacements.len() + patterns.len() + 2);
    lines.push(DECODE_OPEN.to_string());

    for entry in replacements {
        if is_net_positive(entry, tokenizer)? {
            lines.push(entry.header_line());
        }
    }
    for pattern in patterns {
        lines.push(pattern.header_line());
    }

    if lines.len() == 1 {
        return Ok(String::new());
    }
    lines.push(DECODE_CLOSE.to_string());
    Ok(lines.join("\n"))
}

/// Whitespace-separated words in a header (0 for no header)
pub fn count_rosetta_words(rosetta: &str) -> usize {
    count_words(rosetta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_entries_kept() {
        let replacements = vec![
            Replacement::new("in order to", "to", 3),
            Replacement::new("due to the fact that", "because", 3),
        ];
        let rosetta = generate_rosetta(&replacements, &[], None).unwrap();
        assert_eq!(
            rosetta,
            "[DECODE]\nto=in order to\nbecause=due to the fact that\n[/DECODE]"
        );
    }

    #[test]
    fn test_universal_abbreviations_skipped() {
        let replacements = vec![
            Replacement::new("function", "fn", 5),
            Replacement::new("database", "db", 5),
            Replacement::new("configuration", "cfg", 5),
        ];
        assert_eq!(generate_rosetta(&replacements, &[], None).unwrap(), "");
    }

    #[test]
    fn test_single_occurrence_below_line_cost_dropped() {
        // saves 1 token once, line "full=comprehensive" costs 4
        let once = Replacement::new("comprehensive", "full", 1);
        assert!(!is_net_positive(&once, None).unwrap());
        assert_eq!(generate_rosetta(&[once], &[], None).unwrap(), "");

        let often = Replacement::new("comprehensive", "full", 5);
        assert!(is_net_positive(&often, None).unwrap());
    }

    #[test]
    fn test_deletions_never_listed() {
        let deleted = Replacement::new("it is important to", "", 10);
        assert!(!is_net_positive(&deleted, None).unwrap());
    }

    #[test]
    fn test_patterns_follow_entries() {
        let replacements = vec![Replacement::new("in order to", "to", 3)];
        let patterns = vec![PatternReplacement {
            code: "P1".to_string(),
            phrase: "test this carefully".to_string(),
            count: 4,
        }];
        let rosetta = generate_rosetta(&replacements, &patterns, None).unwrap();
        let lines: Vec<&str> = rosetta.lines().collect();
        assert_eq!(
            lines,
            vec!["[DECODE]", "to=in order to", "P1=\"test this carefully\"", "[/DECODE]"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(generate_rosetta(&[], &[], None).unwrap(), "");
        assert_eq!(count_rosetta_words(""), 0);
        assert_eq!(count_rosetta_words("[DECODE]\nto=in order to\n[/DECODE]"), 5);
    }

    #[test]
    fn test_custom_tokenizer_decides() {
        // Every string costs one token: saved is 0, never net-positive
        let flat = Tokenizer::custom(|_: &str| Ok(1));
        let entry = Replacement::new("in order to", "to", 50);
        assert!(!is_net_positive(&entry, Some(&flat)).unwrap());
    }
}
