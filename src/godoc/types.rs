// Search API response types.
// Decodes the `results` array into loosely-typed records.

use serde::Deserialize;

use crate::error::Result;
use crate::record::Record;

/// Response body of the search endpoint.
///
/// Each result is an arbitrary JSON object; no schema is enforced.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl SearchResponse {
    pub fn into_records(self) -> Vec<Record> {
        self.results.iter().map(Record::from_json).collect()
    }
}

/// Decode a response body into records.
pub fn decode_results(body: &str) -> Result<Vec<Record>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.into_records())
}
