use crate::shared::Result;
use crate::status::domain::{IssueSet, IssueStats, NO_MILESTONE};

/// IssueStatistics service for reducing issue items to per-repository counts
pub struct IssueStatistics;

impl IssueStatistics {
    /// Filters the combined result set to `org/repo` and reduces it.
    ///
    /// A repository with no matching items yields zero counts and no
    /// timestamps. An item without a timestamp is left out of that
    /// reduction; a malformed one is fatal.
    pub fn summarize(org: &str, repo: &str, combined: &IssueSet) -> Result<IssueStats> {
        let mut stats = IssueStats::new(org, repo);

        for issue in combined.filter_by_repo(org, repo).issues()? {
            stats.count += 1;
            if issue.is_pr() {
                stats.prs += 1;
            }
            if issue.is_draft() {
                stats.drafts += 1;
            }
            for label in issue.labels() {
                *stats.labels.entry(label.to_string()).or_default() += 1;
            }
            let milestone = issue.milestone().unwrap_or(NO_MILESTONE);
            *stats.milestones.entry(milestone.to_string()).or_default() += 1;
            for login in issue.assignees() {
                *stats.assignees.entry(login.to_string()).or_default() += 1;
            }

            if let Some(created) = issue.created_at()? {
                stats.oldest = Some(stats.oldest.map_or(created, |t| t.min(created)));
            }
            if let Some(updated) = issue.updated_at()? {
                stats.updated = Some(stats.updated.map_or(updated, |t| t.max(updated)));
            }
        }

        Ok(stats)
    }
}
