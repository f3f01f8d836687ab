//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::state::{AppState, UsageSnapshot};
use crate::codec::{decompress as expand, CompressOptions, Strategy};
use crate::error::ShrinkError;
use crate::validate::validate_input;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Health and status
        .route("/health", get(health_check))
        .route("/status", get(status))
        // Compression operations
        .route("/compress", post(compress))
        .route("/decompress", post(decompress))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .with_state(state);

    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }
    if config.logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub usage: UsageSnapshot,
}

/// Status endpoint
async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime().as_secs(),
        usage: state.usage.snapshot(),
    })
}

/// Compress request
#[derive(Deserialize)]
pub struct CompressRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Domain name or `auto`
    #[serde(default)]
    pub domain: Option<String>,
    /// Forced strategy label
    #[serde(default)]
    pub strategy: Option<String>,
}

/// Compress text
async fn compress(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompressRequest>,
) -> impl IntoResponse {
    let Some(text) = req.text else {
        return reject(&state, "Text is required".to_string());
    };

    let input = match validate_input(&text, state.config.max_words_per_request) {
        Ok(input) => input,
        Err(e) => return reject(&state, e.to_string()),
    };

    let mut options = CompressOptions::new();
    if let Some(domain) = req.domain {
        options = options.with_domain(domain);
    }
    if let Some(label) = req.strategy {
        match label.parse::<Strategy>() {
            Ok(strategy) => options = options.with_strategy(strategy),
            Err(e) => return reject(&state, e.to_string()),
        }
    }

    // Regex passes over large inputs stay off the async workers
    let worker = Arc::clone(&state);
    let outcome =
        tokio::task::spawn_blocking(move || worker.engine.compress(&input.text, &options)).await;

    match outcome {
        Ok(Ok(result)) => {
            state.usage.record_compression(&result.stats);
            tracing::info!(
                words = result.stats.original_words,
                tokens_saved = result.stats.tokens_saved,
                ratio = result.stats.ratio,
                "compress"
            );
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "compressed": result.compressed,
                    "rosetta": result.rosetta,
                    "stats": result.stats,
                })),
            )
        },
        Ok(Err(e)) => server_error(&e),
        Err(e) => server_error(&ShrinkError::Server(e.to_string())),
    }
}

/// Decompress request
#[derive(Deserialize)]
pub struct DecompressRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Decompress text
async fn decompress(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DecompressRequest>,
) -> impl IntoResponse {
    let text = match req.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return reject(&state, "Text is required".to_string()),
    };

    let result = expand(&text);
    state.usage.record_decompression();
    (StatusCode::OK, Json(serde_json::json!(result)))
}

fn reject(state: &AppState, message: String) -> (StatusCode, Json<serde_json::Value>) {
    state.usage.record_rejection();
    tracing::warn!(reason = %message, "request rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message})),
    )
}

fn server_error(err: &ShrinkError) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!(error = %err, "compression failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": err.to_string()})),
    )
}
