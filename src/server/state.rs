//! Server state and usage accounting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

use super::config::ServerConfig;
use crate::codec::{CompressionStats, ShrinkEngine};

/// Application state shared across handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Compression engine
    pub engine: ShrinkEngine,
    /// In-memory usage counters
    pub usage: UsageStats,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Self {
        let engine = ShrinkEngine::with_config(config.compression.clone());
        Self {
            config,
            engine,
            usage: UsageStats::new(),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Thread-safe usage counters.
///
/// Shaped like a monthly usage meter so an external store can persist a
/// [`UsageSnapshot`] as-is.
#[derive(Debug, Default)]
pub struct UsageStats {
    /// Compress requests served
    compressions: AtomicU64,
    /// Requests whose output differs from the input
    compressed: AtomicU64,
    /// Words submitted
    words_processed: AtomicU64,
    /// Tokens saved including header overhead
    tokens_saved: AtomicU64,
    /// Decompress requests served
    decompressions: AtomicU64,
    /// Requests rejected by validation
    rejected: AtomicU64,
}

impl UsageStats {
    /// Create new counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a compression
    pub fn record_compression(&self, stats: &CompressionStats) {
        self.compressions.fetch_add(1, Ordering::Relaxed);
        self.words_processed
            .fetch_add(stats.original_words as u64, Ordering::Relaxed);
        if !stats.too_short && !stats.below_threshold {
            self.compressed.fetch_add(1, Ordering::Relaxed);
            self.tokens_saved
                .fetch_add(stats.tokens_saved as u64, Ordering::Relaxed);
        }
    }

    /// Record a decompression
    pub fn record_decompression(&self) {
        self.decompressions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected request
    pub fn record_rejection(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> UsageSnapshot {
        let tokens_saved = self.tokens_saved.load(Ordering::Relaxed);
        UsageSnapshot {
            compressions: self.compressions.load(Ordering::Relaxed),
            compressed: self.compressed.load(Ordering::Relaxed),
            words_processed: self.words_processed.load(Ordering::Relaxed),
            tokens_saved,
            dollars_saved: crate::tokenizer::tokens_to_dollars(tokens_saved as usize),
            decompressions: self.decompressions.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

/// Serializable usage counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    /// Compress requests served
    pub compressions: u64,
    /// Requests whose output differs from the input
    pub compressed: u64,
    /// Words submitted
    pub words_processed: u64,
    /// Tokens saved
    pub tokens_saved: u64,
    /// Estimated USD saved
    pub dollars_saved: f64,
    /// Decompress requests served
    pub decompressions: u64,
    /// Requests rejected by validation
    pub rejected: u64,
}
