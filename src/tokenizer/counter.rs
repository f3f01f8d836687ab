//! Token counting implementation.
//!
//! The built-in tier prices text from the static cost table with a
//! character-length heuristic for unknown words. Callers that need exact
//! counts plug in their own function, or use the cl100k_base encoder from
//! tiktoken-rs through [`Tokenizer::cl100k`].

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tiktoken_rs::{cl100k_base, CoreBPE};

use super::costs::TOKEN_COSTS;
use crate::error::{Result, ShrinkError};

/// Average input cost per 1K tokens across major providers (USD)
pub const AVG_COST_PER_1K_TOKENS: f64 = 0.005;

// Lazy-loaded reference tokenizer (thread-safe singleton)
static CL100K: OnceLock<CoreBPE> = OnceLock::new();

/// Get the cl100k_base tokenizer (lazy-loaded)
fn get_cl100k() -> Result<&'static CoreBPE> {
    if let Some(bpe) = CL100K.get() {
        return Ok(bpe);
    }
    let bpe = cl100k_base()
        .map_err(|e| ShrinkError::Tokenizer(format!("Failed to load cl100k_base tokenizer: {e}")))?;
    Ok(CL100K.get_or_init(|| bpe))
}

/// Count tokens with the reference tokenizer (cl100k_base)
pub fn cl100k_count(text: &str) -> Result<usize> {
    Ok(get_cl100k()?.encode_with_special_tokens(text).len())
}

/// Count tokens with the built-in cost table.
///
/// # Example
/// ```
/// use tokenshrink::tokenizer::count_tokens;
///
/// assert_eq!(count_tokens("consequently") - count_tokens("so"), 2);
/// assert_eq!(count_tokens("   "), 0);
/// ```
pub fn count_tokens(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    if let Some(&cost) = TOKEN_COSTS.get(trimmed.to_lowercase().as_str()) {
        return cost;
    }

    trimmed.split_whitespace().map(chunk_cost).sum()
}

/// Count tokens with an optional caller-supplied tokenizer
pub fn count_tokens_with(text: &str, tokenizer: Option<&Tokenizer>) -> Result<usize> {
    match tokenizer {
        Some(tokenizer) => tokenizer.count(text),
        None => Ok(count_tokens(text)),
    }
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate dollars saved for a token count
pub fn tokens_to_dollars(tokens: usize) -> f64 {
    (tokens as f64 / 1000.0) * AVG_COST_PER_1K_TOKENS
}

/// Token savings of one replacement under the built-in counter.
///
/// Positive means the replacement is cheaper than the original.
pub fn replacement_token_savings(original: &str, replacement: &str) -> i64 {
    count_tokens(original) as i64 - count_tokens(replacement) as i64
}

/// Price one whitespace-delimited chunk
fn chunk_cost(chunk: &str) -> usize {
    if let Some(&cost) = TOKEN_COSTS.get(chunk.to_lowercase().as_str()) {
        return cost;
    }

    let mut total = 0;
    let mut word = String::new();
    for c in chunk.chars() {
        if c.is_alphanumeric() || c == '\'' {
            word.push(c);
        } else {
            if !word.is_empty() {
                total += word_cost(&word);
                word.clear();
            }
            // Punctuation and symbols are priced one token each
            total += 1;
        }
    }
    if !word.is_empty() {
        total += word_cost(&word);
    }
    total
}

/// Table cost, or ~4 characters per token for unknown words
fn word_cost(word: &str) -> usize {
    TOKEN_COSTS
        .get(word.to_lowercase().as_str())
        .copied()
        .unwrap_or_else(|| word.chars().count().div_ceil(4).max(1))
}

/// Which counting tier produced the token numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenizerTier {
    /// Caller-supplied counting function
    #[serde(rename = "custom")]
    Custom,
    /// Static cost table plus heuristic
    #[serde(rename = "built-in")]
    BuiltIn,
}

impl TokenizerTier {
    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerTier::Custom => "custom",
            TokenizerTier::BuiltIn => "built-in",
        }
    }
}

impl fmt::Display for TokenizerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature of a caller-supplied token counter
pub type TokenizerFn = dyn Fn(&str) -> Result<usize> + Send + Sync;

/// Pluggable token counter.
///
/// # Example
/// ```
/// use tokenshrink::tokenizer::{Tokenizer, TokenizerTier};
///
/// let chars = Tokenizer::custom(|text: &str| Ok(text.chars().count()));
/// assert_eq!(chars.count("abc").unwrap(), 3);
/// assert_eq!(chars.tier(), TokenizerTier::Custom);
/// assert_eq!(Tokenizer::default().tier(), TokenizerTier::BuiltIn);
/// ```
#[derive(Clone, Default)]
pub enum Tokenizer {
    /// Static cost table plus heuristic
    #[default]
    BuiltIn,
    /// Caller-supplied counting function; its errors propagate unchanged
    Custom(Arc<TokenizerFn>),
}

impl Tokenizer {
    /// Wrap a counting function
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<usize> + Send + Sync + 'static,
    {
        Tokenizer::Custom(Arc::new(f))
    }

    /// Exact counts with the cl100k_base reference encoding
    pub fn cl100k() -> Result<Self> {
        let bpe = get_cl100k()?;
        Ok(Self::custom(move |text| {
            Ok(bpe.encode_with_special_tokens(text).len())
        }))
    }

    /// Count tokens in text
    pub fn count(&self, text: &str) -> Result<usize> {
        match self {
            Tokenizer::BuiltIn => Ok(count_tokens(text)),
            Tokenizer::Custom(f) => f(text),
        }
    }

    /// Tier label reported in compression stats
    pub fn tier(&self) -> TokenizerTier {
        match self {
            Tokenizer::BuiltIn => TokenizerTier::BuiltIn,
            Tokenizer::Custom(_) => TokenizerTier::Custom,
        }
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tokenizer::BuiltIn => f.write_str("Tokenizer::BuiltIn"),
            Tokenizer::Custom(_) => f.write_str("Tokenizer::Custom(..)"),
        }
    }
}
