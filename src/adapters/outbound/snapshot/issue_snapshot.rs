use super::persist;
use crate::ports::outbound::IssueRepository;
use crate::shared::security::read_optional_file;
use crate::shared::Result;
use crate::status::domain::IssueSet;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

/// Caching decorator over any [`IssueRepository`]
///
/// The issue set is either loaded whole from the snapshot or downloaded
/// from scratch; it is never partially refreshed.
pub struct SnapshotIssueRepository<R: IssueRepository> {
    inner: R,
    path: PathBuf,
}

impl<R: IssueRepository> SnapshotIssueRepository<R> {
    pub fn new(inner: R, path: PathBuf) -> Self {
        Self { inner, path }
    }
}

#[async_trait]
impl<R: IssueRepository> IssueRepository for SnapshotIssueRepository<R> {
    async fn fetch_open_issues(&self, orgs: &[String]) -> Result<IssueSet> {
        if let Some(content) = read_optional_file(&self.path)? {
            let issues = IssueSet::from_json(&content)
                .with_context(|| format!("Malformed issue snapshot {}", self.path.display()))?;
            log::info!(
                "Loaded {} issue(s) from snapshot {}",
                issues.len(),
                self.path.display()
            );
            return Ok(issues);
        }

        let issues = self.inner.fetch_open_issues(orgs).await?;
        if persist(&self.path, &issues.to_json()?)? {
            log::info!("Wrote issue snapshot {}", self.path.display());
        }
        Ok(issues)
    }
}
