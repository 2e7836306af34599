// Cache module for query responses.
// Stores decoded search results on disk, one entry per distinct query.

pub mod paths;
pub mod store;

pub use paths::{cache_key, default_cache_dir};
pub use store::{CacheConfig, CacheEntryInfo, DEFAULT_TIMEOUT, FingerprintCache};
