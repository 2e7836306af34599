// Search API HTTP client.
// Issues the search request and converts failures into fetch/decode errors.

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{Result, SearchError};
use crate::record::Record;

use super::types::decode_results;

pub const DEFAULT_ENDPOINT: &str = "https://api.godoc.org/search";

const CLIENT_USER_AGENT: &str = concat!("gpsearch/", env!("CARGO_PKG_VERSION"));

/// Source of search results for a query.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, query: &str) -> Result<Vec<Record>>;
}

/// HTTP client for the package search endpoint.
pub struct SearchClient {
    client: Client,
    endpoint: String,
}

impl SearchClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(SearchError::Fetch)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check response status and convert errors.
    fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(SearchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }
}

impl Fetcher for SearchClient {
    async fn fetch(&self, query: &str) -> Result<Vec<Record>> {
        debug!(endpoint = %self.endpoint, query, "fetching search results");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(SearchError::Fetch)?;

        let body = Self::check_response(response)?.text().await?;
        let records = decode_results(&body)?;
        debug!(records = records.len(), "search results decoded");
        Ok(records)
    }
}
