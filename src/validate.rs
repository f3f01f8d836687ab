//! Input validation ahead of the engine.
//!
//! The engine accepts any text. Callers that serve untrusted input run
//! [`validate_input`] first and surface its message as a rejection.

use crate::error::{Result, ShrinkError};
use crate::tokenizer::count_words;

/// Longest accepted input, in characters
pub const MAX_INPUT_CHARS: usize = 500_000;

/// Fewest accepted words
pub const MIN_INPUT_WORDS: usize = 10;

/// Input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    /// Trimmed text
    pub text: String,
    /// Whitespace-separated words
    pub words: usize,
}

/// Check text against size limits and the caller's per-submission ceiling.
///
/// # Example
/// ```
/// use tokenshrink::validate::validate_input;
///
/// let err = validate_input("   ", 1000).unwrap_err();
/// assert_eq!(err.to_string(), "Text cannot be empty");
/// ```
pub fn validate_input(text: &str, max_words: usize) -> Result<ValidatedInput> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ShrinkError::InvalidInput("Text cannot be empty".to_string()));
    }

    if trimmed.chars().count() > MAX_INPUT_CHARS {
        return Err(ShrinkError::InvalidInput(
            "Text exceeds maximum length (500KB)".to_string(),
        ));
    }

    let words = count_words(trimmed);
    if words < MIN_INPUT_WORDS {
        return Err(ShrinkError::InvalidInput(format!(
            "Text must be at least {MIN_INPUT_WORDS} words"
        )));
    }

    if words > max_words {
        return Err(ShrinkError::InvalidInput(format!(
            "Text exceeds your plan limit of {} words per submission (got {})",
            group_thousands(max_words),
            group_thousands(words)
        )));
    }

    Ok(ValidatedInput {
        text: trimmed.to_string(),
        words,
    })
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_rejected() {
        for text in ["", "   ", "\n\t"] {
            let err = validate_input(text, 100).unwrap_err();
            assert_eq!(err.to_string(), "Text cannot be empty");
        }
    }

    #[test]
    fn test_too_long_rejected() {
        let text = "a".repeat(MAX_INPUT_CHARS + 1);
        let err = validate_input(&text, usize::MAX).unwrap_err();
        assert_eq!(err.to_string(), "Text exceeds maximum length (500KB)");
    }

    #[test]
    fn test_too_few_words() {
        let err = validate_input(&words(9), 100).unwrap_err();
        assert_eq!(err.to_string(), "Text must be at least 10 words");
        assert!(validate_input(&words(10), 100).is_ok());
    }

    #[test]
    fn test_plan_limit() {
        let err = validate_input(&words(1500), 1000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Text exceeds your plan limit of 1,000 words per submission (got 1,500)"
        );
        assert!(matches!(err, ShrinkError::InvalidInput(_)));
    }

    #[test]
    fn test_valid_input_trimmed() {
        let input = format!("  {}  ", words(12));
        let valid = validate_input(&input, 100).unwrap();
        assert_eq!(valid.words, 12);
        assert_eq!(valid.text, words(12));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
