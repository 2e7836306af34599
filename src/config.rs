// Startup configuration.
// Reads cache location, cache timeout, and search endpoint from the environment.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::cache::{CacheConfig, DEFAULT_TIMEOUT};
use crate::godoc::DEFAULT_ENDPOINT;

/// Cache directory override. Must name an existing directory.
pub const ENV_CACHE_DIR: &str = "GPSEARCH_CACHEDIR";
/// Cache timeout in whole hours.
pub const ENV_CACHE_TIMEOUT: &str = "GPSEARCH_CACHETIMEOUT";
/// Search endpoint override.
pub const ENV_ENDPOINT: &str = "GPSEARCH_ENDPOINT";

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cache: CacheConfig,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// The directory override is only recorded here; it is validated when
    /// the cache is constructed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dir = lookup(ENV_CACHE_DIR)
            .filter(|d| !d.is_empty())
            .map(PathBuf::from);

        let timeout = match lookup(ENV_CACHE_TIMEOUT) {
            Some(raw) => parse_timeout_hours(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "invalid {}, using default", ENV_CACHE_TIMEOUT);
                DEFAULT_TIMEOUT
            }),
            None => DEFAULT_TIMEOUT,
        };

        let endpoint = lookup(ENV_ENDPOINT)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            cache: CacheConfig { dir, timeout },
            endpoint,
        }
    }
}

/// Parse a positive whole number of hours.
fn parse_timeout_hours(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(hours) if hours > 0 => Some(Duration::from_secs(hours.checked_mul(3600)?)),
        _ => None,
    }
}
