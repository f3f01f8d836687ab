//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::config::{CompressionConfig, Config};
use crate::error::{Result, ShrinkError};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub addr: SocketAddr,
    /// Per-submission word ceiling enforced by validation
    pub max_words_per_request: usize,
    /// Maximum request body size (bytes)
    pub max_body_size: usize,
    /// Enable request tracing
    pub logging: bool,
    /// CORS enabled
    pub cors_enabled: bool,
    /// Engine tuning
    pub compression: CompressionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
            max_words_per_request: 100_000,
            max_body_size: 1024 * 1024, // 1 MiB
            logging: true,
            cors_enabled: true,
            compression: CompressionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let addr: SocketAddr = config
            .server
            .listen_addr()
            .parse()
            .map_err(|e| ShrinkError::Config(format!("Invalid listen address: {e}")))?;
        Ok(Self {
            addr,
            max_words_per_request: config.server.max_words_per_request,
            max_body_size: config.server.max_body_size,
            logging: true,
            cors_enabled: config.server.cors,
            compression: config.compression.clone(),
        })
    }

    /// Create with custom port
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Bind to all interfaces
    pub fn bind_all(mut self) -> Self {
        self.addr.set_ip(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        self
    }

    /// Set address directly
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set per-submission word ceiling
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words_per_request = max_words;
        self
    }

    /// Set max body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Set engine tuning
    pub fn with_compression(mut self, compression: CompressionConfig) -> Self {
        self.compression = compression;
        self
    }

    /// Disable logging
    pub fn without_logging(mut self) -> Self {
        self.logging = false;
        self
    }

    /// Disable CORS
    pub fn without_cors(mut self) -> Self {
        self.cors_enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_builders() {
        let config = ServerConfig::default().with_port(8080).bind_all();
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.max_words_per_request, 100_000);

        let config = ServerConfig::default().without_cors().with_max_words(1000);
        assert!(!config.cors_enabled);
        assert_eq!(config.max_words_per_request, 1000);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.server.port = 4000;
        config.server.cors = false;
        config.compression.min_words = 50;

        let server = ServerConfig::from_config(&config).unwrap();
        assert_eq!(server.addr.to_string(), "127.0.0.1:4000");
        assert!(!server.cors_enabled);
        assert_eq!(server.compression.min_words, 50);

        config.server.host = "not an ip".to_string();
        assert!(matches!(
            ServerConfig::from_config(&config),
            Err(ShrinkError::Config(_))
        ));
    }
}
