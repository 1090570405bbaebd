use crate::ports::outbound::{SearchPage, SearchPageFetcher};
use crate::shared::error::StatusError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION, LINK};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    items: Vec<Value>,
}

/// HttpSearchPageFetcher adapter performing search requests over HTTP
///
/// Sends the configured user agent and, when a token is available, a
/// `token` authorization header. A non-success status is a transport
/// failure; retrying is left to the caller.
pub struct HttpSearchPageFetcher {
    client: reqwest::Client,
    token: Option<String>,
}

impl HttpSearchPageFetcher {
    pub fn new(user_agent: &str, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// The `rel="next"` target of an RFC 8288 `Link` header
    fn next_link(headers: &HeaderMap) -> Option<String> {
        let header = headers.get(LINK)?.to_str().ok()?;
        header.split(',').find_map(|link| {
            let mut parts = link.split(';').map(str::trim);
            let target = parts.next()?.strip_prefix('<')?.strip_suffix('>')?;
            parts
                .any(|param| param == "rel=\"next\"" || param == "rel=next")
                .then(|| target.to_string())
        })
    }
}

#[async_trait]
impl SearchPageFetcher for HttpSearchPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<SearchPage> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::TrackerRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let next = Self::next_link(response.headers());
        let body: SearchResponse = response.json().await?;
        Ok(SearchPage {
            items: body.items,
            total_count: body.total_count,
            next,
        })
    }
}
