//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables (`TOKENSHRINK_*`)
//! - CLI arguments (for the server)
//!
//! [`Config::load`] reads `<config dir>/tokenshrink/config.toml` when it
//! exists and then applies environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::patterns::{DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, MAX_PATTERN_CODES};
use crate::error::{Result, ShrinkError};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Compression engine tuning
    #[serde(default)]
    pub compression: CompressionConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSection,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShrinkError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ShrinkError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Default file location, if a config directory exists on this platform
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tokenshrink").join("config.toml"))
    }

    /// Config file (when present) with environment overrides applied
    pub fn load() -> Result<Self> {
        let base = match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::from_file(path)?
            },
            _ => Self::default(),
        };
        let config = base.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `TOKENSHRINK_*` environment variables. Unparseable values are
    /// ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(val) = env_parse("TOKENSHRINK_MIN_WORDS") {
            self.compression.min_words = val;
        }
        if let Some(val) = env_parse("TOKENSHRINK_MIN_SAVINGS_RATIO") {
            self.compression.min_savings_ratio = val;
        }
        if let Some(val) = env_parse("TOKENSHRINK_MAX_PATTERNS") {
            self.compression.max_patterns = val;
        }
        if let Ok(host) = std::env::var("TOKENSHRINK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parse("TOKENSHRINK_PORT") {
            self.server.port = port;
        }
        if let Some(val) = env_parse("TOKENSHRINK_MAX_WORDS") {
            self.server.max_words_per_request = val;
        }
        self
    }

    /// Reject settings the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        self.compression.validate()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.trim().parse().ok())
}

/// Compression engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Inputs with fewer words are returned unchanged
    pub min_words: usize,

    /// Required fractional gain (0.05 = output at least 5% smaller)
    pub min_savings_ratio: f64,

    /// Ranked pattern candidates tried per document (at most 10)
    pub max_patterns: usize,

    /// Shortest phrase eligible for a pattern code
    pub pattern_min_words: usize,

    /// Occurrences needed for a pattern code
    pub pattern_min_occurrences: usize,

    /// Longest n-gram scanned
    pub pattern_max_words: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            min_words: 30,
            min_savings_ratio: 0.05,
            max_patterns: 10,
            pattern_min_words: 3,
            pattern_min_occurrences: 2,
            pattern_max_words: 8,
        }
    }
}

impl CompressionConfig {
    /// Set the word floor
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set the required gain
    pub fn with_min_savings_ratio(mut self, ratio: f64) -> Self {
        self.min_savings_ratio = ratio;
        self
    }

    /// Set the pattern candidate cap
    pub fn with_max_patterns(mut self, max_patterns: usize) -> Self {
        self.max_patterns = max_patterns;
        self
    }

    /// Reject settings the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        if !self.min_savings_ratio.is_finite() || self.min_savings_ratio < 0.0 {
            return Err(ShrinkError::Config(format!(
                "min_savings_ratio must be a non-negative number (got {})",
                self.min_savings_ratio
            )));
        }
        if self.max_patterns > MAX_PATTERN_CODES {
            return Err(ShrinkError::Config(format!(
                "max_patterns must be at most {MAX_PATTERN_CODES} (got {})",
                self.max_patterns
            )));
        }
        if self.pattern_min_words < DEFAULT_MIN_WORDS
            || self.pattern_max_words > DEFAULT_MAX_WORDS
            || self.pattern_min_words > self.pattern_max_words
        {
            return Err(ShrinkError::Config(format!(
                "pattern word bounds must satisfy {DEFAULT_MIN_WORDS} <= min <= max <= {DEFAULT_MAX_WORDS} (got {}..{})",
                self.pattern_min_words, self.pattern_max_words
            )));
        }
        if self.pattern_min_occurrences < 2 {
            return Err(ShrinkError::Config(
                "pattern_min_occurrences must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP server section of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Per-submission word ceiling (anonymous plan limit)
    pub max_words_per_request: usize,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// Allow cross-origin requests
    pub cors: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_words_per_request: 100_000,
            max_body_size: 1024 * 1024, // 1 MiB
            cors: true,
        }
    }
}

impl ServerSection {
    /// Get the full listen address
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.compression.min_words, 30);
        assert!((config.compression.min_savings_ratio - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.compression.max_patterns, 10);
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listen_addr() {
        assert_eq!(ServerSection::default().listen_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_config_from_toml_partial() {
        let toml = r#"
            [compression]
            min_words = 50
            min_savings_ratio = 0.2

            [server]
            port = 9090
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.compression.min_words, 50);
        assert!((config.compression.min_savings_ratio - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.compression.max_patterns, 10);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nhost = \"0.0.0.0\"\nmax_words_per_request = 1000").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.max_words_per_request, 1000);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = Config::from_file("/nonexistent/tokenshrink.toml");
        assert!(matches!(missing, Err(ShrinkError::Config(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[compression]\npattern_min_words = 0").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ShrinkError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let config = CompressionConfig::default().with_min_savings_ratio(-0.1);
        assert!(config.validate().is_err());
        let config = CompressionConfig::default().with_min_savings_ratio(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_pattern_bounds() {
        let too_many = CompressionConfig::default().with_max_patterns(20);
        assert!(matches!(too_many.validate(), Err(ShrinkError::Config(_))));
        assert!(CompressionConfig::default().with_max_patterns(10).validate().is_ok());

        let mut short = CompressionConfig::default();
        short.pattern_min_words = 2;
        assert!(short.validate().is_err());

        let mut long = CompressionConfig::default();
        long.pattern_max_words = 9;
        assert!(long.validate().is_err());

        let mut inverted = CompressionConfig::default();
        inverted.pattern_min_words = 6;
        inverted.pattern_max_words = 5;
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = CompressionConfig::default()
            .with_min_words(10)
            .with_max_patterns(3);
        assert_eq!(config.min_words, 10);
        assert_eq!(config.max_patterns, 3);
    }
}
