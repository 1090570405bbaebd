use crate::ports::outbound::{IssueRepository, SearchPage, SearchPageFetcher};
use crate::shared::Result;
use crate::status::domain::IssueSet;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// The search endpoint refuses to page past this many results per query
pub const SEARCH_RESULT_CEILING: u64 = 1000;

/// Items requested per page
pub const PAGE_SIZE: u32 = 100;

/// Request budget and pacing for the search client
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Base URL of the tracker API, without a trailing slash
    pub api_base: String,
    /// Pause between consecutive page requests; none before the first
    pub request_delay: Duration,
    /// Hard ceiling on page requests per download
    pub max_requests: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            request_delay: Duration::from_secs(5),
            max_requests: 100,
        }
    }
}

/// Where a download stands between two page requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationState {
    /// The first page of a (possibly continued) query is due
    Requesting(String),
    /// The previous page linked to another one
    HasNext(String),
    /// No more pages
    Exhausted,
    /// The query hit the result ceiling; continue from this creation time
    Overflowed { created_at: String },
}

impl PaginationState {
    /// Transition after a page arrived.
    ///
    /// `new_items` counts items not seen before. A continuation that brings
    /// nothing new would repeat forever, so it ends the download.
    pub fn after_page(page: &SearchPage, new_items: usize) -> Self {
        if let Some(next) = &page.next {
            return PaginationState::HasNext(next.clone());
        }
        if page.total_count > SEARCH_RESULT_CEILING && !page.items.is_empty() {
            if new_items == 0 {
                log::warn!("Continuation query returned no new issues; stopping");
                return PaginationState::Exhausted;
            }
            if let Some(created_at) = page
                .items
                .last()
                .and_then(|item| item.get("created_at"))
                .and_then(Value::as_str)
            {
                return PaginationState::Overflowed {
                    created_at: created_at.to_string(),
                };
            }
        }
        PaginationState::Exhausted
    }
}

/// GitHubIssueClient adapter downloading open issues through the search API
///
/// Pages are requested in ascending creation order. When a query exceeds
/// the result ceiling, the download continues with the same query narrowed
/// to `created:>=` the last item received; the repeated boundary item is
/// dropped by id.
pub struct GitHubIssueClient<F: SearchPageFetcher> {
    fetcher: F,
    settings: SearchSettings,
}

impl<F: SearchPageFetcher> GitHubIssueClient<F> {
    pub fn new(fetcher: F, settings: SearchSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Search URL for the given query terms, restricted to open items
    pub fn search_url(&self, terms: &[String]) -> String {
        let query: Vec<String> = terms
            .iter()
            .map(|term| urlencoding::encode(term).into_owned())
            .chain(std::iter::once("is:open".to_string()))
            .collect();
        format!(
            "{}/search/issues?q={}&sort=created&order=asc&per_page={}",
            self.settings.api_base,
            query.join("+"),
            PAGE_SIZE
        )
    }

    /// Downloads every open item matching `terms`
    pub async fn download(&self, terms: &[String]) -> Result<IssueSet> {
        let mut issues = IssueSet::new();
        let mut state = PaginationState::Requesting(self.search_url(terms));
        let mut requests = 0;

        loop {
            let url = match state {
                PaginationState::Requesting(url) | PaginationState::HasNext(url) => url,
                PaginationState::Exhausted => break,
                PaginationState::Overflowed { created_at } => {
                    log::info!("Result ceiling reached; continuing after {}", created_at);
                    let mut continued = terms.to_vec();
                    continued.push(format!("created:>={}", created_at));
                    state = PaginationState::Requesting(self.search_url(&continued));
                    continue;
                }
            };

            if requests >= self.settings.max_requests {
                log::warn!(
                    "Stopping after {} search requests; issue set may be incomplete",
                    requests
                );
                break;
            }
            if requests > 0 && !self.settings.request_delay.is_zero() {
                tokio::time::sleep(self.settings.request_delay).await;
            }
            requests += 1;

            log::debug!("Downloading {}", url);
            let page = self.fetcher.fetch_page(&url).await?;
            let new_items = issues.append(page.items.clone());
            state = PaginationState::after_page(&page, new_items);
        }

        log::info!("Downloaded {} issue(s) in {} request(s)", issues.len(), requests);
        Ok(issues)
    }
}

#[async_trait]
impl<F: SearchPageFetcher> IssueRepository for GitHubIssueClient<F> {
    async fn fetch_open_issues(&self, orgs: &[String]) -> Result<IssueSet> {
        if orgs.is_empty() {
            return Ok(IssueSet::new());
        }
        let terms: Vec<String> = orgs.iter().map(|org| format!("user:{}", org)).collect();
        self.download(&terms).await
    }
}
