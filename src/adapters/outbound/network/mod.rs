/// Network adapters for the issue tracker's search API
mod github_issue_client;
mod http_search_fetcher;

pub use github_issue_client::{
    GitHubIssueClient, PaginationState, SearchSettings, PAGE_SIZE, SEARCH_RESULT_CEILING,
};
pub use http_search_fetcher::HttpSearchPageFetcher;
