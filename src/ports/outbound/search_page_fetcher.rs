use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One page of tracker search results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub items: Vec<Value>,
    /// Total number of matches the tracker reports for the query
    pub total_count: u64,
    /// URL of the following page, taken from the response's link header
    pub next: Option<String>,
}

/// SearchPageFetcher port for the raw transport of one search request
///
/// Pagination, rate limiting and deduplication live above this port.
#[async_trait]
pub trait SearchPageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<SearchPage>;
}
