// Cache path utilities.
// Derives content-addressed entry names and resolves the cache directory.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{Result, SearchError};

const CACHE_DIR_NAME: &str = "gpsearch";

/// Derive the on-disk key for a query: lowercase hex SHA-256 of its bytes.
///
/// The key is deterministic across calls and process runs, and contains
/// only `[0-9a-f]`, so it is safe as a file name on every platform.
pub fn cache_key(query: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(query.as_bytes());
    hex::encode(hasher.finalize())
}

/// Default cache directory (<temp dir>/gpsearch).
pub fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join(CACHE_DIR_NAME)
}

/// Resolve the directory entries are stored in.
///
/// An override must already exist. The default directory is created on demand.
pub fn resolve_cache_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(SearchError::Config(format!(
                    "The specified cache directory {} does not exist",
                    dir.display()
                )));
            }
            Ok(dir.to_path_buf())
        }
        None => {
            let dir = default_cache_dir();
            fs::create_dir_all(&dir).map_err(|e| {
                SearchError::Config(format!(
                    "Failed to create cache directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            Ok(dir)
        }
    }
}

/// Path of the entry for a query within a cache directory.
pub fn entry_path(dir: &Path, query: &str) -> PathBuf {
    dir.join(cache_key(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_key_is_deterministic() {
        assert_eq!(cache_key("http router"), cache_key("http router"));
        assert_ne!(cache_key("http router"), cache_key("http  router"));
        assert_eq!(
            cache_key(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_cache_key_is_filesystem_safe() {
        let key = cache_key("../etc/passwd: *?<>|");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_entry_path() {
        let path = entry_path(Path::new("/cache"), "yaml");
        assert!(path.starts_with("/cache"));
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), cache_key("yaml"));
    }

    #[test]
    fn test_resolve_override() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = resolve_cache_dir(Some(temp_dir.path())).unwrap();
        assert_eq!(resolved, temp_dir.path());
    }

    #[test]
    fn test_resolve_missing_override_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = resolve_cache_dir(Some(&missing)).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_resolve_default_creates_dir() {
        let dir = resolve_cache_dir(None).unwrap();
        assert!(dir.is_dir());
        assert!(dir.ends_with(CACHE_DIR_NAME));
    }
}
