//! Token counting.
//!
//! Two tiers:
//!
//! - **built-in**: static cl100k_base cost table ([`TOKEN_COSTS`]) with a
//!   ~4 characters per token fallback for unknown words
//! - **custom**: any caller-supplied counting function, including the exact
//!   cl100k_base encoder from tiktoken-rs ([`Tokenizer::cl100k`])
//!
//! # Example
//!
//! ```
//! use tokenshrink::tokenizer::{count_tokens, Tokenizer};
//!
//! let tokens = count_tokens("in order to");
//! assert_eq!(tokens, 3);
//!
//! let words = Tokenizer::custom(|text: &str| Ok(text.split_whitespace().count()));
//! assert_eq!(words.count("in order to").unwrap(), 3);
//! ```

mod costs;
mod counter;

pub use costs::{
    is_unprofitable, lookup_cost, HISTORICAL_ENTRIES, NEGATIVE_SAVINGS, TOKEN_COSTS, ZERO_SAVINGS,
};
pub use counter::{
    cl100k_count, count_tokens, count_tokens_with, count_words, replacement_token_savings,
    tokens_to_dollars, Tokenizer, TokenizerFn, TokenizerTier, AVG_COST_PER_1K_TOKENS,
};
