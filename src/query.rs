// Query orchestration.
// Serves results from the cache or the search endpoint, then sorts and projects them.

use tracing::{debug, warn};

use crate::cache::FingerprintCache;
use crate::error::Result;
use crate::godoc::Fetcher;
use crate::rank::{DEFAULT_FIELDS, Listing, SortSpec, render, sort_records};
use crate::record::Record;

/// Default number of packages to list.
pub const DEFAULT_LIMIT: usize = 10;

/// How results are ordered and presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub sort: SortSpec,
    pub fields: Vec<String>,
    pub limit: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            sort: SortSpec::default(),
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Where a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Fetched,
}

/// Result set obtained for one query.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub records: Vec<Record>,
    pub source: Source,
}

/// Runs a single query through cache, fetch, sort and projection.
pub struct Orchestrator<F> {
    cache: FingerprintCache,
    fetcher: F,
}

impl<F: Fetcher> Orchestrator<F> {
    pub fn new(cache: FingerprintCache, fetcher: F) -> Self {
        Self { cache, fetcher }
    }

    pub fn cache(&self) -> &FingerprintCache {
        &self.cache
    }

    /// Get records for `query`, fetching when the cache cannot serve them.
    ///
    /// Fetch and decode failures are returned; stale entries are never used
    /// as a fallback. A failed cache write is logged and ignored.
    pub async fn obtain(&self, query: &str) -> Result<Outcome> {
        if !self.cache.is_stale(query) {
            match self.cache.load(query) {
                Ok(records) => {
                    if let Some(info) = self.cache.entry_info(query) {
                        debug!(
                            path = %info.path.display(),
                            written_at = %info.written_at,
                            "serving cached results"
                        );
                    }
                    return Ok(Outcome {
                        records,
                        source: Source::Cache,
                    });
                }
                Err(e) => debug!(error = %e, "cache load failed, refetching"),
            }
        } else {
            debug!(query, "cache entry missing or stale");
        }

        let records = self.fetcher.fetch(query).await?;
        if let Err(e) = self.cache.save(query, &records) {
            warn!(error = %e, "cannot write query result to cache, ignoring");
        }

        Ok(Outcome {
            records,
            source: Source::Fetched,
        })
    }

    /// Obtain, sort and render the results for `query`.
    pub async fn execute(&self, query: &str, options: &QueryOptions) -> Result<Listing> {
        let Outcome { mut records, source } = self.obtain(query).await?;
        debug!(?source, records = records.len(), sort = %options.sort.field, "ranking results");

        sort_records(&mut records, &options.sort);
        Ok(render(&records, &options.fields, options.limit))
    }
}
