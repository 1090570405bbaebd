use crate::shared::Result;
use crate::status::domain::IssueSet;
use async_trait::async_trait;

/// IssueRepository port for retrieving open issues from an issue tracker
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Fetches every open issue and pull request owned by any of `orgs`
    ///
    /// Items come back in ascending creation order, with no item repeated.
    ///
    /// # Errors
    /// Returns an error if a page request fails or a response cannot be decoded
    async fn fetch_open_issues(&self, orgs: &[String]) -> Result<IssueSet>;
}
