use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Milestone bucket for issues without a milestone
pub const NO_MILESTONE: &str = "none";

/// Per-component issue statistics, reduced from the combined issue set.
///
/// Only the (org, repo) pair is known until the combined query has run;
/// the counters start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueStats {
    pub org: String,
    pub repo: String,
    /// Open issues, pull requests included
    pub count: u64,
    pub prs: u64,
    pub drafts: u64,
    pub labels: BTreeMap<String, u64>,
    pub milestones: BTreeMap<String, u64>,
    pub oldest: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub assignees: BTreeMap<String, u64>,
}

impl IssueStats {
    pub fn new(org: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            ..Default::default()
        }
    }

    /// `org/repo`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }

    pub fn label_count(&self, label: &str) -> u64 {
        self.labels.get(label).copied().unwrap_or(0)
    }

    pub fn milestone_count(&self, milestone: &str) -> u64 {
        self.milestones.get(milestone).copied().unwrap_or(0)
    }
}
