//! Best-effort expansion of compressed text.
//!
//! Only the first `[DECODE]` block is honored. Later blocks stay in the body
//! untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::matcher::boundary_pattern;

/// Note attached when the input carries no decoder header
pub const NO_HEADER_NOTE: &str = "No Rosetta Stone decoder found — text returned as-is";

lazy_static! {
    /// First header block, non-greedy
    static ref HEADER_REGEX: Regex = Regex::new(r"\[DECODE\]([\s\S]*?)\[/DECODE\]\s*").unwrap();

    /// `P3="phrase"`
    static ref PATTERN_LINE: Regex = Regex::new(r#"^(P\d+)="(.+)"$"#).unwrap();

    /// `code=original`
    static ref ABBREV_LINE: Regex = Regex::new(r"^(.+?)=(.+)$").unwrap();
}

/// Output of [`decompress`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decompressed {
    /// Expanded text (or the input when no header was found)
    pub decompressed: String,
    /// Set when the input had no decoder header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One parsed decoder line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeEntry {
    /// Code as written in the body
    pub code: String,
    /// Text it expands to
    pub original: String,
    /// Pattern codes match case-sensitively, abbreviations do not
    pub is_pattern: bool,
}

/// Parse the inside of a header block. Unparseable lines are skipped; a
/// repeated code keeps its last definition.
pub fn parse_header(block: &str) -> Vec<DecodeEntry> {
    let mut entries: Vec<DecodeEntry> = Vec::new();
    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let entry = if let Some(caps) = PATTERN_LINE.captures(line) {
            DecodeEntry {
                code: caps[1].to_string(),
                original: caps[2].to_string(),
                is_pattern: true,
            }
        } else if let Some(caps) = ABBREV_LINE.captures(line) {
            DecodeEntry {
                code: caps[1].to_string(),
                original: caps[2].to_string(),
                is_pattern: false,
            }
        } else {
            continue;
        };

        match entries.iter_mut().find(|e| e.code == entry.code) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }
    entries
}

/// Expand a compressed text using its first decoder header.
///
/// # Example
/// ```
/// use tokenshrink::codec::decompress;
///
/// let out = decompress("[DECODE]\nfull=comprehensive\n[/DECODE]\n\nThis is the full plan.");
/// assert_eq!(out.decompressed, "This is the comprehensive plan.");
/// assert!(out.note.is_none());
/// ```
pub fn decompress(text: &str) -> Decompressed {
    let Some(caps) = HEADER_REGEX.captures(text) else {
        return Decompressed {
            decompressed: text.to_string(),
            note: Some(NO_HEADER_NOTE.to_string()),
        };
    };

    let mut entries = parse_header(caps[1].trim());
    let body = HEADER_REGEX.replace(text, "").trim().to_string();

    // Longer codes first so P1 never matches inside P10
    entries.sort_by(|a, b| b.code.len().cmp(&a.code.len()));

    let decompressed = expand(&body, &entries).unwrap_or(body);

    tracing::debug!(entries = entries.len(), "decompressed");
    Decompressed {
        decompressed,
        note: None,
    }
}

/// Expand every code in one scan so expanded text is never matched again.
///
/// Each code gets its own group; pattern groups stay case-sensitive.
fn expand(body: &str, entries: &[DecodeEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let alternation = entries
        .iter()
        .map(|e| format!("({})", boundary_pattern(&e.code, "", !e.is_pattern)))
        .collect::<Vec<_>>()
        .join("|");
    let regex = match Regex::new(&alternation) {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!(error = %e, "decoder header did not compile");
            return None;
        }
    };

    let expanded = regex.replace_all(body, |caps: &Captures| {
        (1..=entries.len())
            .find(|&i| caps.get(i).is_some())
            .map(|i| entries[i - 1].original.clone())
            .unwrap_or_else(|| caps[0].to_string())
    });
    Some(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_abbreviation() {
        let out = decompress("[DECODE]\nfull=comprehensive\n[/DECODE]\n\nThis is the full plan.");
        assert_eq!(out.decompressed, "This is the comprehensive plan.");
        assert_eq!(out.note, None);
    }

    #[test]
    fn test_no_header_returns_input() {
        let out = decompress("plain text");
        assert_eq!(out.decompressed, "plain text");
        assert_eq!(out.note.as_deref(), Some(NO_HEADER_NOTE));
    }

    #[test]
    fn test_pattern_codes_case_sensitive() {
        let text = "[DECODE]\nP1=\"test this carefully\"\n[/DECODE]\n\nP1. Then p1 again. P1.";
        let out = decompress(text);
        assert_eq!(
            out.decompressed,
            "test this carefully. Then p1 again. test this carefully."
        );
    }

    #[test]
    fn test_abbreviations_case_insensitive() {
        let out = decompress("[DECODE]\nSH=stakeholder\n[/DECODE]\n\nsh and SH agree.");
        assert_eq!(out.decompressed, "stakeholder and stakeholder agree.");
    }

    #[test]
    fn test_longer_codes_first() {
        let mut header = String::from("[DECODE]\n");
        for n in 1..=10 {
            header.push_str(&format!("P{n}=\"phrase {n}\"\n"));
        }
        header.push_str("[/DECODE]\n\nP10 then P1");
        let out = decompress(&header);
        assert_eq!(out.decompressed, "phrase 10 then phrase 1");
    }

    #[test]
    fn test_only_first_header_honored() {
        let text = "[DECODE]\nfull=comprehensive\n[/DECODE]\n\nfull plan\n[DECODE]\nplan=roadmap\n[/DECODE]";
        let out = decompress(text);
        assert!(out.decompressed.starts_with("comprehensive plan"));
        assert!(out.decompressed.contains("[DECODE]\nplan=roadmap\n[/DECODE]"));
    }

    #[test]
    fn test_parse_header_lines() {
        let entries = parse_header("to=in order to\n\nP2=\"a b c\"\ngarbage\nnote:=please note that");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].code, "to");
        assert_eq!(entries[0].original, "in order to");
        assert!(entries[1].is_pattern);
        assert_eq!(entries[2].code, "note:");
    }

    #[test]
    fn test_replacement_text_is_literal() {
        let out = decompress("[DECODE]\namt=$100 fee\n[/DECODE]\n\nPay the amt.");
        assert_eq!(out.decompressed, "Pay the $100 fee.");
    }

    #[test]
    fn test_expanded_text_not_rescanned() {
        let text = "[DECODE]\nbecause=due to the fact that\nto=in order to\n[/DECODE]\n\n\
            We stop because it rains. Go there to win.";
        assert_eq!(
            decompress(text).decompressed,
            "We stop due to the fact that it rains. Go there in order to win."
        );

        // A code expanding to another code is left as written
        let chained = decompress("[DECODE]\nP1=\"see P2\"\nP2=\"the end\"\n[/DECODE]\n\nP1 and P2");
        assert_eq!(chained.decompressed, "see P2 and the end");
    }

    #[test]
    fn test_mixed_case_groups() {
        let text = "[DECODE]\nfull=comprehensive\nP1=\"run the suite\"\n[/DECODE]\n\nFULL check, P1, p1.";
        assert_eq!(
            decompress(text).decompressed,
            "comprehensive check, run the suite, p1."
        );
    }
}
