//! Compression results and statistics.

use serde::{Deserialize, Serialize};

use super::dictionary::Domain;
use super::rosetta::{PatternReplacement, Replacement};
use super::strategy::Strategy;
use crate::tokenizer::TokenizerTier;

/// How a compression call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// Header and body emitted
    Compressed,
    /// Input under the word floor, returned unchanged
    TooShort,
    /// Savings under the configured gain, returned unchanged
    BelowThreshold,
}

/// Per-call accounting, shaped for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionStats {
    /// Words in the trimmed input
    pub original_words: usize,
    /// Words in the compressed body
    pub compressed_words: usize,
    /// Words in the decoder header
    pub rosetta_words: usize,
    /// Body plus header words
    pub total_compressed_words: usize,
    /// Tokens in the trimmed input
    pub original_tokens: usize,
    /// Tokens in the compressed body
    pub compressed_tokens: usize,
    /// Tokens in the decoder header
    pub rosetta_tokens: usize,
    /// Body plus header tokens
    pub total_compressed_tokens: usize,
    /// Original words over total compressed words, one decimal
    pub ratio: f64,
    /// Tokens saved including header overhead
    pub tokens_saved: usize,
    /// Estimated USD saved, rounded to cents
    pub dollars_saved: f64,
    /// Strategy applied
    pub strategy: Strategy,
    /// Domain whose dictionary was used
    pub domain: Domain,
    /// Detection confidence (1.0 when forced)
    pub confidence: f64,
    /// Distinct dictionary substitutions applied
    pub replacement_count: usize,
    /// Pattern codes assigned
    pub pattern_count: usize,
    /// Counting tier behind the token numbers
    pub tokenizer: TokenizerTier,
    /// Input was under the word floor
    pub too_short: bool,
    /// Savings were under the configured gain
    pub below_threshold: bool,
}

impl CompressionStats {
    /// Stats for an input returned unchanged
    pub(crate) fn unchanged(words: usize, tokens: usize, tokenizer: TokenizerTier) -> Self {
        Self {
            original_words: words,
            compressed_words: words,
            rosetta_words: 0,
            total_compressed_words: words,
            original_tokens: tokens,
            compressed_tokens: tokens,
            rosetta_tokens: 0,
            total_compressed_tokens: tokens,
            ratio: 1.0,
            tokens_saved: 0,
            dollars_saved: 0.0,
            strategy: Strategy::None,
            domain: Domain::Common,
            confidence: 0.0,
            replacement_count: 0,
            pattern_count: 0,
            tokenizer,
            too_short: false,
            below_threshold: false,
        }
    }
}

/// Output of one compression call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    /// Header, blank line, body (or just the body without a header)
    pub compressed: String,
    /// Decoder header alone (empty when none)
    pub rosetta: String,
    /// Body alone
    pub compressed_body: String,
    /// Trimmed input
    pub original: String,
    /// Accounting
    pub stats: CompressionStats,
    /// Dictionary substitutions applied, in application order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replacements: Vec<Replacement>,
    /// Pattern codes assigned
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<PatternReplacement>,
}

impl CompressionResult {
    /// Result that echoes the input back
    pub(crate) fn unchanged(original: &str, stats: CompressionStats) -> Self {
        Self {
            compressed: original.to_string(),
            rosetta: String::new(),
            compressed_body: original.to_string(),
            original: original.to_string(),
            stats,
            replacements: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Tagged outcome of the call
    pub fn outcome(&self) -> Outcome {
        if self.stats.too_short {
            Outcome::TooShort
        } else if self.stats.below_threshold {
            Outcome::BelowThreshold
        } else {
            Outcome::Compressed
        }
    }

    /// Whether the output differs from the input
    pub fn is_compressed(&self) -> bool {
        self.outcome() == Outcome::Compressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_result() {
        let mut stats = CompressionStats::unchanged(6, 8, TokenizerTier::BuiltIn);
        stats.too_short = true;
        let result = CompressionResult::unchanged("Hello world", stats);
        assert_eq!(result.compressed, "Hello world");
        assert_eq!(result.compressed_body, "Hello world");
        assert!(result.rosetta.is_empty());
        assert_eq!(result.outcome(), Outcome::TooShort);
        assert!(!result.is_compressed());
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let mut stats = CompressionStats::unchanged(40, 52, TokenizerTier::Custom);
        stats.below_threshold = true;
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["originalWords"], 40);
        assert_eq!(json["totalCompressedTokens"], 52);
        assert_eq!(json["belowThreshold"], true);
        assert_eq!(json["tooShort"], false);
        assert_eq!(json["strategy"], "none");
        assert_eq!(json["tokenizer"], "custom");
    }

    #[test]
    fn test_result_omits_empty_records() {
        let result = CompressionResult::unchanged(
            "text",
            CompressionStats::unchanged(1, 1, TokenizerTier::BuiltIn),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("replacements").is_none());
        assert_eq!(json["compressedBody"], "text");
        assert_eq!(result.outcome(), Outcome::Compressed);
    }
}
