//! Prompt compression codec.
//!
//! Deterministic, reversible text rewriting with a self-describing decoder
//! header.
//!
//! # Pipeline
//!
//! | Phase      | Module          | What happens                                   |
//! |------------|-----------------|------------------------------------------------|
//! | detect     | [`strategy`]    | keyword scoring picks a domain overlay         |
//! | dictionary | [`dictionary`]  | common tables plus overlay, unprofitable dropped |
//! | substitute | `engine`        | phrases then words, longest key first          |
//! | patterns   | [`patterns`]    | repeated n-grams become `P1`..`P10`            |
//! | header     | [`rosetta`]     | net-positive entries rendered as `[DECODE]`    |
//! | expand     | [`decompress`]  | first header applied back onto the body        |
//!
//! # Wire Format
//!
//! ```text
//! [DECODE]
//! to=in order to
//! P1="test this carefully"
//! [/DECODE]
//!
//! P1 before release. Read the docs to learn more.
//! ```
//!
//! # Usage
//!
//! ```
//! use tokenshrink::codec::{decompress, CompressOptions, ShrinkEngine};
//!
//! let text = "It is important to test this carefully. ".repeat(8);
//! let result = ShrinkEngine::new().compress(&text, &CompressOptions::default()).unwrap();
//! assert!(result.stats.pattern_count >= 1);
//!
//! let restored = decompress(&result.compressed);
//! assert!(restored.decompressed.contains("test this carefully"));
//! ```

pub mod decompress;
pub mod dictionary;
mod engine;
mod matcher;
pub mod patterns;
mod result;
pub mod rosetta;
pub mod strategy;
mod tables;

pub use decompress::{decompress, parse_header, DecodeEntry, Decompressed, NO_HEADER_NOTE};
pub use dictionary::{get_dictionary, Dictionary, Domain};
pub use engine::{CompressOptions, ShrinkEngine};
pub use matcher::{phrase_regex, replace_counted, word_regex};
pub use patterns::{find_repeated_phrases, PatternFinder, RepeatedPhrase, MAX_PATTERN_CODES};
pub use result::{CompressionResult, CompressionStats, Outcome};
pub use rosetta::{
    count_rosetta_words, generate_rosetta, is_net_positive, PatternReplacement, Replacement,
    DECODE_CLOSE, DECODE_OPEN,
};
pub use strategy::{detect_strategy, Detection, Strategy};
pub use tables::{
    is_universal, BUSINESS_DOMAIN, CODE_DOMAIN, COMMON_PHRASES, COMMON_WORDS, LEGAL_DOMAIN,
    MEDICAL_DOMAIN, UNIVERSAL_ABBREVIATIONS,
};

/// Whether text starts with a decoder header
pub fn has_header(text: &str) -> bool {
    text.trim_start().starts_with(DECODE_OPEN)
}
