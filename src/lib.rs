// gpsearch: search Go packages from the command line.
// Caches search responses on disk and presents sorted, field-selected results.

pub mod cache;
pub mod config;
pub mod error;
pub mod godoc;
pub mod logging;
pub mod query;
pub mod rank;
pub mod record;

pub use cache::{CacheConfig, FingerprintCache};
pub use config::Config;
pub use error::{Result, SearchError};
pub use godoc::{Fetcher, SearchClient};
pub use query::{Orchestrator, QueryOptions, Source};
pub use rank::{Listing, SortSpec};
pub use record::{Record, Value};
