// Error types for gpsearch.
// Covers cache misses and write failures, upstream fetch/decode errors, and configuration errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Cache entry not found: {0}")]
    CacheMiss(String),

    #[error("Failed to write cache entry {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Search request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Search endpoint returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Whether this error must terminate the current invocation.
    ///
    /// Cache-layer failures are recovered from inside the orchestrator.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SearchError::CacheMiss(_) | SearchError::CacheWrite { .. })
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
