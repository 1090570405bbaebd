use async_trait::async_trait;
use bom_status::prelude::*;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock IssueRepository serving a canned issue set and recording every query
#[derive(Default, Clone)]
pub struct MockIssueRepository {
    pub items: Vec<Value>,
    pub should_fail: bool,
    pub requested: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockIssueRepository {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Org lists of every call, in call order
    pub fn requested_orgs(&self) -> Vec<Vec<String>> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueRepository for MockIssueRepository {
    async fn fetch_open_issues(&self, orgs: &[String]) -> Result<IssueSet> {
        self.requested.lock().unwrap().push(orgs.to_vec());
        if self.should_fail {
            anyhow::bail!("Mock issue repository failure");
        }
        Ok(IssueSet::from_items(self.items.clone()))
    }
}
