// Cache store for search results.
// Handles JSON serialization, staleness checks, and atomic entry replacement.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Result, SearchError};
use crate::record::Record;

use super::paths::{entry_path, resolve_cache_dir};

/// Default entry lifetime: 2 hours.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// Settings a cache instance is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Directory override. Must already exist when set.
    pub dir: Option<PathBuf>,
    /// Age at which an entry stops being served.
    pub timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Metadata about a stored entry.
#[derive(Debug, Clone)]
pub struct CacheEntryInfo {
    pub path: PathBuf,
    /// Last write time of the entry file.
    pub written_at: DateTime<Utc>,
    pub age: Duration,
}

/// Content-addressed, time-bounded cache of query results.
///
/// Each query maps to one file named by its hash. An entry's timestamp is
/// the file's modification time; stale entries are left in place and simply
/// treated as absent.
#[derive(Debug, Clone)]
pub struct FingerprintCache {
    dir: PathBuf,
    timeout: Duration,
}

impl FingerprintCache {
    /// Create a cache, resolving (and if needed creating) its directory.
    pub fn new(config: CacheConfig) -> Result<Self> {
        let dir = resolve_cache_dir(config.dir.as_deref())?;
        debug!(dir = %dir.display(), timeout_secs = config.timeout.as_secs(), "cache ready");
        Ok(Self {
            dir,
            timeout: config.timeout,
        })
    }

    /// Path of the entry for a query.
    pub fn entry_path(&self, query: &str) -> PathBuf {
        entry_path(&self.dir, query)
    }

    /// Whether the entry for `query` is missing or too old to serve.
    pub fn is_stale(&self, query: &str) -> bool {
        self.is_stale_at(query, SystemTime::now())
    }

    /// Staleness as observed at `now`.
    ///
    /// An entry written at T is stale for any `now >= T + timeout`.
    pub fn is_stale_at(&self, query: &str, now: SystemTime) -> bool {
        match modified_at(&self.entry_path(query)) {
            Ok(written) => age_at(written, now) >= self.timeout,
            Err(_) => true,
        }
    }

    /// Stored entry metadata, or None if there is no entry.
    pub fn entry_info(&self, query: &str) -> Option<CacheEntryInfo> {
        let path = self.entry_path(query);
        let written = modified_at(&path).ok()?;
        Some(CacheEntryInfo {
            age: age_at(written, SystemTime::now()),
            written_at: DateTime::<Utc>::from(written),
            path,
        })
    }

    /// Load the entry for `query`.
    ///
    /// Missing and unreadable entries both fail with `CacheMiss`.
    pub fn load(&self, query: &str) -> Result<Vec<Record>> {
        let path = self.entry_path(query);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SearchError::CacheMiss(path.display().to_string()));
            }
            Err(e) => {
                return Err(SearchError::CacheMiss(format!("{}: {}", path.display(), e)));
            }
        };

        serde_json::from_slice(&contents)
            .map_err(|e| SearchError::CacheMiss(format!("{}: {}", path.display(), e)))
    }

    /// Replace the entry for `query` with `records`.
    pub fn save(&self, query: &str, records: &[Record]) -> Result<()> {
        let path = self.entry_path(query);
        write_atomic(&path, records).map_err(|source| SearchError::CacheWrite {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), records = records.len(), "cache entry written");
        Ok(())
    }
}

/// Get the modification time of a cache file.
fn modified_at(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

/// Age of an entry written at `written`. Future timestamps count as zero.
fn age_at(written: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(written).unwrap_or(Duration::ZERO)
}

fn write_atomic(path: &Path, records: &[Record]) -> io::Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_vec(records)?;

    // Write via temp file so readers never see a partial entry
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    let written = file
        .write_all(&json)
        .and_then(|()| file.sync_all())
        .and_then(|()| fs::rename(&temp_path, path));

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}
