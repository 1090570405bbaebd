use crate::shared::Result;
use crate::status::domain::ComponentRecord;

/// StatusResponse - Internal response DTO from the aggregation use case
#[derive(Debug, Clone)]
pub struct StatusResponse {
    /// One merged record per coordinate, root first
    pub records: Vec<ComponentRecord>,
    /// Tracker orgs the combined issue query covered, sorted
    pub tracked_orgs: Vec<String>,
    /// Size of the combined issue set
    pub issue_count: usize,
}

impl StatusResponse {
    pub fn new(records: Vec<ComponentRecord>, tracked_orgs: Vec<String>, issue_count: usize) -> Self {
        Self {
            records,
            tracked_orgs,
            issue_count,
        }
    }

    /// Serializes the records as the aggregate status document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}
