//! # TokenShrink - Deterministic Prompt Compression
//!
//! Rewrites natural-language prompts into a shorter form that a large
//! language model can still read. Verbose phrases become short equivalents,
//! domain vocabulary becomes standard abbreviations, and repeated multi-word
//! phrases become short codes. A self-describing decoder header (the
//! "Rosetta Stone") is prepended so the receiving model, or
//! [`decompress`], can expand the text again.
//!
//! ## Features
//!
//! - **Strategy detection**: keyword scoring picks a domain dictionary
//!   (code, medical, legal, business) or the common one
//! - **Token-aware dictionaries**: every entry saves at least one cl100k_base
//!   token; unprofitable entries never reach the output
//! - **Pattern codes**: repeated 3-8 word phrases become `P1`..`P10`
//! - **Savings gate**: marginal or negative results come back unchanged
//! - **Pluggable tokenizer**: built-in cost table or any counting function
//!
//! ## Wire Format
//!
//! ```text
//! [DECODE]
//! to=in order to
//! full=comprehensive
//! P1="run the full suite"
//! [/DECODE]
//!
//! <compressed body>
//! ```
//!
//! Header lines are `abbreviation=original` or `Pn="phrase"`. Universal
//! abbreviations an LLM already knows (`e.g.`, `fn`, `db`) and pure deletions
//! are never listed. Text without a header decompresses to itself.
//!
//! ## Quick Start
//!
//! ```
//! use tokenshrink::{compress, decompress, CompressOptions};
//!
//! let text = "It is important to test this carefully. ".repeat(8);
//! let result = compress(&text, &CompressOptions::default()).unwrap();
//! assert!(result.is_compressed());
//! println!("{} -> {} tokens", result.stats.original_tokens, result.stats.total_compressed_tokens);
//!
//! let restored = decompress(&result.compressed);
//! assert!(restored.note.is_none());
//! ```
//!
//! ### Forcing a Domain
//!
//! ```
//! use tokenshrink::{compress, CompressOptions};
//!
//! let options = CompressOptions::new().with_domain("medical");
//! let result = compress("The patient reports no symptoms.", &options).unwrap();
//! // under the word floor: echoed back
//! assert!(result.stats.too_short);
//! ```
//!
//! ### Exact Token Counts
//!
//! ```rust,ignore
//! use tokenshrink::{compress, CompressOptions, Tokenizer};
//!
//! let options = CompressOptions::new().with_tokenizer(Tokenizer::cl100k()?);
//! let result = compress(prompt, &options)?;
//! assert_eq!(result.stats.tokenizer.as_str(), "custom");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: Detection, dictionaries, patterns, header, engine, decompressor
//! - [`tokenizer`]: Token cost table and tokenizer abstraction
//! - [`validate`]: Input limits applied ahead of the engine
//! - [`server`]: HTTP API server (Axum-based)
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod codec;
pub mod config;
pub mod error;
pub mod server;
pub mod tokenizer;
pub mod validate;

// Re-exports for convenience
pub use codec::{
    decompress, detect_strategy, get_dictionary, CompressOptions, CompressionResult,
    CompressionStats, Decompressed, Detection, Domain, Outcome, ShrinkEngine, Strategy,
};
pub use config::{CompressionConfig, Config};
pub use error::{Result, ShrinkError};
pub use server::{AppState, Server, ServerConfig};
pub use tokenizer::{count_tokens, count_words, Tokenizer, TokenizerTier};
pub use validate::{validate_input, ValidatedInput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compress text with default engine tuning
pub fn compress(text: &str, options: &CompressOptions) -> Result<CompressionResult> {
    ShrinkEngine::new().compress(text, options)
}

/// Check if text carries a decoder header
pub fn has_header(text: &str) -> bool {
    codec::has_header(text)
}
