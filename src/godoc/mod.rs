// Search API module.
// Provides the HTTP client and response types for the package search endpoint.

pub mod client;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, Fetcher, SearchClient};
pub use types::{SearchResponse, decode_results};
