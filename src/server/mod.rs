//! TokenShrink HTTP server.
//!
//! Thin JSON wrapper around the engine:
//! - `POST /compress` `{text, domain?, strategy?}` → `{compressed, rosetta, stats}`
//! - `POST /decompress` `{text}` → `{decompressed, note?}`
//! - `GET /health`, `GET /status` (uptime and usage counters)
//!
//! Rejections come back as `400 {"error": "..."}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use tokenshrink::server::{Server, ServerConfig};
//!
//! let config = ServerConfig::default().with_port(8080);
//! let server = Server::new(config);
//! server.run().await?;
//! ```

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use handlers::{create_router, health_check};
pub use state::{AppState, UsageSnapshot, UsageStats};

use crate::error::{Result, ShrinkError};

/// TokenShrink server
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a new server
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: Arc::new(AppState::new(config)),
        }
    }

    /// Shared state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Get the router
    pub fn router(&self) -> Router {
        create_router(self.state())
    }

    /// Bind and serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let addr = self.state.config.addr;
        tracing::info!("TokenShrink server v{}", env!("CARGO_PKG_VERSION"));
        tracing::info!(
            "Limits: {} words per request, {} byte bodies",
            self.state.config.max_words_per_request,
            self.state.config.max_body_size
        );

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ShrinkError::Server(format!("Failed to bind to {addr}: {e}")))?;
        tracing::info!("Listening on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ShrinkError::Server(format!("Server error: {e}")))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
