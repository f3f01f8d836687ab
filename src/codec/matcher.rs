//! Whole-word literal matching.
//!
//! Dictionary keys, pattern phrases and decoder codes are matched as literal
//! text. A `\b` anchor is only added on an edge whose character is a word
//! character, so keys such as `e.g.` or `=>` still match next to spaces and
//! punctuation. `\b` in the regex crate is Unicode-aware.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use super::tables::{
    BUSINESS_DOMAIN, CODE_DOMAIN, COMMON_PHRASES, COMMON_WORDS, LEGAL_DOMAIN, MEDICAL_DOMAIN,
};

lazy_static! {
    /// Compiled case-insensitive matchers for every dictionary key
    static ref KEY_REGEX: HashMap<&'static str, Regex> = {
        [
            &COMMON_WORDS,
            &COMMON_PHRASES,
            &CODE_DOMAIN,
            &MEDICAL_DOMAIN,
            &LEGAL_DOMAIN,
            &BUSINESS_DOMAIN,
        ]
        .iter()
        .flat_map(|table| table.keys())
        .filter_map(|key| word_regex(key, true).map(|r| (*key, r)))
        .collect()
    };
}

/// Word character as understood by `\b`
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Build the pattern source for a literal with boundary anchors on word edges.
///
/// `suffix` is inserted after the literal and before the trailing anchor.
pub(crate) fn boundary_pattern(literal: &str, suffix: &str, case_insensitive: bool) -> String {
    let mut pattern = String::with_capacity(literal.len() + suffix.len() + 12);
    if case_insensitive {
        pattern.push_str("(?i)");
    }
    if literal.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(literal));
    pattern.push_str(suffix);
    if literal.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Compile a whole-word matcher for a literal. Empty literals never match.
pub fn word_regex(literal: &str, case_insensitive: bool) -> Option<Regex> {
    if literal.is_empty() {
        return None;
    }
    Regex::new(&boundary_pattern(literal, "", case_insensitive)).ok()
}

/// Case-insensitive matcher for a whitespace-normalized phrase.
///
/// Words may be separated by any run of whitespace, so a phrase found by the
/// n-gram scan still matches text that has not been cleaned up yet.
pub fn phrase_regex(phrase: &str) -> Option<Regex> {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }
    let mut pattern = String::from("(?i)");
    if phrase.trim_start().chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&words.join(r"\s+"));
    if phrase.trim_end().chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    Regex::new(&pattern).ok()
}

/// Cached matcher for a dictionary key, compiled on demand otherwise
pub(crate) fn key_regex(key: &str) -> Option<Regex> {
    match KEY_REGEX.get(key) {
        Some(regex) => Some(regex.clone()),
        None => word_regex(key, true),
    }
}

/// Replace every match with a literal, returning the new text and match count.
///
/// Returns `None` when nothing matched.
pub fn replace_counted(regex: &Regex, text: &str, replacement: &str) -> Option<(String, usize)> {
    let count = regex.find_iter(text).count();
    if count == 0 {
        return None;
    }
    Some((regex.replace_all(text, NoExpand(replacement)).into_owned(), count))
}
