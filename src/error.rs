//! TokenShrink error types.
//!
//! # Error Classification
//!
//! The compression core treats every input as opaque text and never fails on
//! content: short or low-redundancy input degrades to an uncompressed
//! outcome instead of an error. Errors only come from the edges:
//!
//! - a caller-supplied tokenizer failing (propagated verbatim)
//! - input rejected by the validation step before the engine runs
//! - configuration, I/O and transport problems in the CLI and server

use thiserror::Error;

/// TokenShrink errors.
#[derive(Error, Debug)]
pub enum ShrinkError {
    /// A custom tokenizer failed while counting tokens.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Input rejected by validation.
    #[error("{0}")]
    InvalidInput(String),

    /// Unknown strategy label supplied by a caller.
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Server-side error.
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for TokenShrink operations
pub type Result<T> = std::result::Result<T, ShrinkError>;

impl From<toml::de::Error> for ShrinkError {
    fn from(err: toml::de::Error) -> Self {
        ShrinkError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_message_only() {
        let err = ShrinkError::InvalidInput("Text cannot be empty".to_string());
        assert_eq!(err.to_string(), "Text cannot be empty");
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: ShrinkError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, ShrinkError::Config(_)));
    }
}
