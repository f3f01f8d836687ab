//! Compression engine.
//!
//! Single pass, no backtracking:
//!
//! 1. word-floor gate
//! 2. strategy resolution (forced or detected)
//! 3. phrase substitution, longest key first
//! 4. word substitution on what phrases left behind
//! 5. pattern codes for repeated n-grams
//! 6. whitespace and punctuation cleanup
//! 7. decoder header from the substitutions actually applied
//! 8. savings gate: marginal or negative results are discarded
//! 9. assembly
//!
//! The engine never fails on text content. The only error path is a
//! caller-supplied tokenizer failing, which propagates unchanged.

use lazy_static::lazy_static;
use regex::Regex;

use super::dictionary::{Dictionary, Domain};
use super::matcher::{key_regex, phrase_regex, replace_counted};
use super::patterns::{PatternFinder, MAX_PATTERN_CODES};
use super::result::{CompressionResult, CompressionStats};
use super::rosetta::{count_rosetta_words, generate_rosetta, PatternReplacement, Replacement};
use super::strategy::{detect_strategy, Detection, Strategy};
use crate::config::CompressionConfig;
use crate::error::Result;
use crate::tokenizer::{
    count_tokens_with, count_words, tokens_to_dollars, Tokenizer, TokenizerTier,
};

lazy_static! {
    static ref BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref HORIZONTAL_RUNS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref DOUBLED_PERIOD: Regex = Regex::new(r"\. +\.").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r" +([.,;:!?])").unwrap();
}

/// Per-call options
#[derive(Debug, Clone, Default)]
pub struct CompressOptions {
    /// Domain name; `None`, `"auto"` and `""` run detection. Unknown names
    /// fall back to the common dictionary.
    pub domain: Option<String>,
    /// Skip detection and report this strategy with confidence 1
    pub force_strategy: Option<Strategy>,
    /// Token counter for stats and header decisions (built-in when `None`)
    pub tokenizer: Option<Tokenizer>,
}

impl CompressOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Force a strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.force_strategy = Some(strategy);
        self
    }

    /// Use a custom tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Explicit domain request, if any
    fn requested_domain(&self) -> Option<Domain> {
        match self.domain.as_deref().map(str::trim) {
            None | Some("" | "auto") => None,
            Some(name) => Some(Domain::from_name(name)),
        }
    }

    /// Forced detection result, if the caller pinned domain or strategy
    fn forced_detection(&self) -> Option<Detection> {
        let domain = self.requested_domain();
        match (self.force_strategy, domain) {
            (None, None) => None,
            (Some(strategy), domain) => Some(Detection {
                strategy,
                domain: domain.unwrap_or_default(),
                confidence: 1.0,
            }),
            (None, Some(domain)) => Some(Detection {
                strategy: match domain {
                    Domain::Common => Strategy::Abbreviation,
                    Domain::Structural => Strategy::Structural,
                    _ => Strategy::Domain,
                },
                domain,
                confidence: 1.0,
            }),
        }
    }
}

/// Deterministic prompt compressor
#[derive(Debug, Clone, Default)]
pub struct ShrinkEngine {
    config: CompressionConfig,
}

impl ShrinkEngine {
    /// Create engine with default tuning
    pub fn new() -> Self {
        Self::default()
    }

    /// Create engine with explicit tuning
    pub fn with_config(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// Engine tuning
    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Compress text.
    ///
    /// Short or low-redundancy input comes back unchanged with
    /// `too_short` / `below_threshold` set; that is an expected outcome, not
    /// an error.
    ///
    /// # Example
    /// ```
    /// use tokenshrink::codec::{CompressOptions, Outcome, ShrinkEngine};
    ///
    /// let engine = ShrinkEngine::new();
    /// let result = engine.compress("Hello world, this is a test.", &CompressOptions::default()).unwrap();
    /// assert_eq!(result.outcome(), Outcome::TooShort);
    /// assert_eq!(result.compressed, "Hello world, this is a test.");
    /// ```
    pub fn compress(&self, text: &str, options: &CompressOptions) -> Result<CompressionResult> {
        let tokenizer = options.tokenizer.as_ref();
        let tier = tokenizer.map_or(TokenizerTier::BuiltIn, Tokenizer::tier);

        let original = text.trim();
        let original_words = count_words(original);
        let original_tokens = count_tokens_with(original, tokenizer)?;

        if original_words < self.config.min_words {
            tracing::debug!(
                words = original_words,
                min_words = self.config.min_words,
                "input below word floor"
            );
            let mut stats = CompressionStats::unchanged(original_words, original_tokens, tier);
            stats.too_short = true;
            return Ok(CompressionResult::unchanged(original, stats));
        }

        let detection = options
            .forced_detection()
            .unwrap_or_else(|| detect_strategy(original));
        tracing::debug!(
            strategy = %detection.strategy,
            domain = %detection.domain,
            confidence = detection.confidence,
            "strategy resolved"
        );

        let dictionary = Dictionary::for_domain(detection.domain);
        let mut body = original.to_string();
        let mut replacements: Vec<Replacement> = Vec::new();

        for (original_key, replacement) in dictionary.phrases() {
            apply_entry(&mut body, &mut replacements, original_key, replacement);
        }
        let phrase_hits = replacements.len();

        for (original_key, replacement) in dictionary.words() {
            apply_entry(&mut body, &mut replacements, original_key, replacement);
        }
        tracing::debug!(
            phrases = phrase_hits,
            words = replacements.len() - phrase_hits,
            "dictionary substitution"
        );

        let patterns = self.apply_patterns(&mut body);
        tracing::debug!(patterns = patterns.len(), "pattern substitution");

        let body = cleanup(&body);

        let rosetta = generate_rosetta(&replacements, &patterns, tokenizer)?;
        let rosetta_words = count_rosetta_words(&rosetta);
        let rosetta_tokens = count_tokens_with(&rosetta, tokenizer)?;
        let compressed_words = count_words(&body);
        let compressed_tokens = count_tokens_with(&body, tokenizer)?;
        let total_compressed_words = compressed_words + rosetta_words;
        let total_compressed_tokens = compressed_tokens + rosetta_tokens;

        let ratio = if total_compressed_words == 0 {
            original_words as f64
        } else {
            original_words as f64 / total_compressed_words as f64
        };

        if ratio < 1.0 + self.config.min_savings_ratio || total_compressed_tokens > original_tokens
        {
            tracing::debug!(
                ratio,
                original_tokens,
                total_compressed_tokens,
                "savings below threshold"
            );
            let mut stats = CompressionStats::unchanged(original_words, original_tokens, tier);
            stats.domain = detection.domain;
            stats.confidence = detection.confidence;
            stats.below_threshold = true;
            return Ok(CompressionResult::unchanged(original, stats));
        }

        let tokens_saved = original_tokens - total_compressed_tokens;
        let compressed = if rosetta.is_empty() {
            body.clone()
        } else {
            format!("{rosetta}\n\n{body}")
        };

        let stats = CompressionStats {
            original_words,
            compressed_words,
            rosetta_words,
            total_compressed_words,
            original_tokens,
            compressed_tokens,
            rosetta_tokens,
            total_compressed_tokens,
            ratio: round_to(ratio, 1),
            tokens_saved,
            dollars_saved: round_to(tokens_to_dollars(tokens_saved), 2),
            strategy: detection.strategy,
            domain: detection.domain,
            confidence: detection.confidence,
            replacement_count: replacements.len(),
            pattern_count: patterns.len(),
            tokenizer: tier,
            too_short: false,
            below_threshold: false,
        };

        tracing::debug!(ratio = stats.ratio, tokens_saved, "compressed");

        Ok(CompressionResult {
            compressed,
            rosetta,
            compressed_body: body,
            original: original.to_string(),
            stats,
            replacements,
            patterns,
        })
    }

    /// Replace top-ranked repeated phrases with `P1`, `P2`, ...
    fn apply_patterns(&self, body: &mut String) -> Vec<PatternReplacement> {
        let candidates = PatternFinder::new()
            .with_min_words(self.config.pattern_min_words)
            .with_max_words(self.config.pattern_max_words)
            .with_min_occurrences(self.config.pattern_min_occurrences)
            .find(body);

        let mut patterns = Vec::new();
        let cap = self.config.max_patterns.min(MAX_PATTERN_CODES);
        for candidate in candidates.into_iter().take(cap) {
            let Some(regex) = phrase_regex(&candidate.phrase) else {
                continue;
            };
            // Earlier codes may have consumed some occurrences
            if regex.find_iter(body).count() < self.config.pattern_min_occurrences {
                continue;
            }
            let code = format!("P{}", patterns.len() + 1);
            if let Some((next, count)) = replace_counted(&regex, body, &code) {
                *body = next;
                patterns.push(PatternReplacement {
                    code,
                    phrase: candidate.phrase,
                    count,
                });
            }
        }
        patterns
    }
}

/// Apply one dictionary entry and record it when it matched
fn apply_entry(
    body: &mut String,
    replacements: &mut Vec<Replacement>,
    original: &str,
    replacement: &str,
) {
    let Some(regex) = key_regex(original) else {
        return;
    };
    let Some((next, count)) = replace_counted(&regex, body, replacement) else {
        return;
    };
    *body = next;

    match replacements
        .iter_mut()
        .find(|r| r.original == original && r.replacement == replacement)
    {
        Some(existing) => existing.occurrences += count,
        None => replacements.push(Replacement::new(original, replacement, count)),
    }
}

/// Collapse blank lines and runs of spaces, then repair deletion artifacts
pub(crate) fn cleanup(text: &str) -> String {
    let text = BLANK_LINES.replace_all(text, "\n\n");
    let text = HORIZONTAL_RUNS.replace_all(&text, " ");
    let text = DOUBLED_PERIOD.replace_all(&text, ".");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    text.trim().to_string()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Outcome;

    fn filler(words: usize) -> String {
        (0..words)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_too_short() {
        let engine = ShrinkEngine::new();
        let result = engine
            .compress("  Hello world, this is a test.  ", &CompressOptions::default())
            .unwrap();
        assert!(result.stats.too_short);
        assert_eq!(result.compressed, "Hello world, this is a test.");
        assert_eq!(result.stats.strategy, Strategy::None);
        assert_eq!(result.stats.tokens_saved, 0);
        assert_eq!(result.outcome(), Outcome::TooShort);
    }

    #[test]
    fn test_word_floor_boundary() {
        let engine = ShrinkEngine::new();
        let at_floor = engine.compress(&filler(30), &CompressOptions::default()).unwrap();
        assert!(!at_floor.stats.too_short);
        // unique words: nothing to compress
        assert!(at_floor.stats.below_threshold);

        let below = engine.compress(&filler(29), &CompressOptions::default()).unwrap();
        assert!(below.stats.too_short);
    }

    #[test]
    fn test_cleanup_repairs_deletions() {
        assert_eq!(cleanup("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(cleanup("a \t  b"), "a b");
        assert_eq!(cleanup("done .  . next"), "done. next");
        assert_eq!(cleanup(" x , y ! "), "x, y!");
    }

    #[test]
    fn test_phrase_beats_substring() {
        let mut body = "We do this in order to win.".to_string();
        let mut records = Vec::new();
        let dict = Dictionary::for_domain(Domain::Common);
        for (k, v) in dict.phrases() {
            apply_entry(&mut body, &mut records, k, v);
        }
        assert_eq!(body, "We do this to win.");
        assert_eq!(records, vec![Replacement::new("in order to", "to", 1)]);
    }

    #[test]
    fn test_forced_detection() {
        let forced = CompressOptions::new().with_domain("legal").forced_detection().unwrap();
        assert_eq!(forced.domain, Domain::Legal);
        assert_eq!(forced.strategy, Strategy::Domain);
        assert!((forced.confidence - 1.0).abs() < f64::EPSILON);

        assert!(CompressOptions::new().with_domain("auto").forced_detection().is_none());
        assert!(CompressOptions::new().forced_detection().is_none());

        let strategy_only = CompressOptions::new()
            .with_strategy(Strategy::Abbreviation)
            .forced_detection()
            .unwrap();
        assert_eq!(strategy_only.domain, Domain::Common);
    }

    #[test]
    fn test_pattern_cap() {
        let engine = ShrinkEngine::with_config(CompressionConfig::default().with_max_patterns(2));
        let mut body = String::new();
        for i in 0..6 {
            body.push_str(&format!("alpha{i} beta{i} gamma{i} delta{i}. "));
            body.push_str(&format!("alpha{i} beta{i} gamma{i} delta{i}. "));
        }
        let patterns = engine.apply_patterns(&mut body);
        assert!(patterns.len() <= 2);
        assert!(!patterns.is_empty());
        assert_eq!(patterns[0].code, "P1");
    }

    #[test]
    fn test_pattern_codes_capped_without_validation() {
        let config = CompressionConfig {
            max_patterns: 20,
            ..CompressionConfig::default()
        };
        let engine = ShrinkEngine::with_config(config);
        let mut body = String::new();
        for i in 0..15 {
            for j in 0..3 {
                body.push_str(&format!("alpha{i} bravo{i} charlie{i} delta{i} sep{i}x{j} "));
            }
        }
        let patterns = engine.apply_patterns(&mut body);
        assert_eq!(patterns.len(), MAX_PATTERN_CODES);
        assert_eq!(patterns[9].code, "P10");
        assert_eq!(patterns[0].phrase, "alpha0 bravo0 charlie0 delta0");
        assert!(body.contains("alpha10 bravo10"));
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(1.26, 1) - 1.3).abs() < 1e-9);
        assert!((round_to(0.004, 2) - 0.0).abs() < 1e-9);
    }
}
