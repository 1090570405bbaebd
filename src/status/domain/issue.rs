use crate::shared::Result;
use crate::status::domain::timestamp::parse_tracker_timestamp;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;

/// The accumulated issue-tracker result set.
///
/// Items are kept exactly as the tracker returned them so the set can be
/// persisted and reloaded verbatim. Pages are appended in arrival order; an
/// item whose `id` was already received (the boundary item repeated by an
/// overflow continuation query) is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueSet {
    items: Vec<Value>,
    seen_ids: HashSet<u64>,
}

impl IssueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Value>) -> Self {
        let mut set = Self::new();
        set.append(items);
        set
    }

    /// Appends a page of raw items, returning how many were new
    pub fn append(&mut self, items: Vec<Value>) -> usize {
        let before = self.items.len();
        for item in items {
            match item.get("id").and_then(Value::as_u64) {
                Some(id) if !self.seen_ids.insert(id) => continue,
                _ => self.items.push(item),
            }
        }
        self.items.len() - before
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The sub-collection whose `repository_url` ends with `/repos/{org}/{repo}`
    pub fn filter_by_repo(&self, org: &str, repo: &str) -> IssueSet {
        let suffix = format!("/repos/{}/{}", org, repo);
        let items = self
            .items
            .iter()
            .filter(|item| {
                item.get("repository_url")
                    .and_then(Value::as_str)
                    .is_some_and(|url| url.ends_with(&suffix))
            })
            .cloned()
            .collect();
        IssueSet::from_items(items)
    }

    /// Typed views over every item
    pub fn issues(&self) -> Result<Vec<Issue>> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Issue::deserialize(item).with_context(|| format!("Malformed issue item #{}", i))
            })
            .collect()
    }

    /// Parses a persisted snapshot: a JSON array of raw items
    pub fn from_json(content: &str) -> Result<Self> {
        let items: Vec<Value> =
            serde_json::from_str(content).context("Issue snapshot is not a JSON array")?;
        Ok(Self::from_items(items))
    }

    /// Serializes the raw items with stable (sorted) key order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Named {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Login {
    #[serde(default)]
    login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Milestone {
    #[serde(default)]
    title: Option<String>,
}

/// One open issue or pull request as reported by the tracker search API
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub repository_url: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    pull_request: Option<Value>,
    /// `Some` whenever the key is present, even with a `null` value
    #[serde(default, deserialize_with = "present")]
    draft: Option<Value>,
    #[serde(default)]
    milestone: Option<Milestone>,
    #[serde(default, deserialize_with = "null_as_empty")]
    labels: Vec<Named>,
    #[serde(default, deserialize_with = "null_as_empty")]
    assignees: Vec<Login>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Issue {
    /// `None` when the item carries no creation time; an unparsable one is an error
    pub fn created_at(&self) -> Result<Option<DateTime<Utc>>> {
        self.created_at
            .as_deref()
            .map(parse_tracker_timestamp)
            .transpose()
    }

    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        self.updated_at
            .as_deref()
            .map(parse_tracker_timestamp)
            .transpose()
    }

    pub fn is_pr(&self) -> bool {
        self.pull_request.is_some()
    }

    /// A draft is any item carrying the `draft` marker, whatever its value
    pub fn is_draft(&self) -> bool {
        self.draft.is_some()
    }

    pub fn milestone(&self) -> Option<&str> {
        self.milestone.as_ref().and_then(|m| m.title.as_deref())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.labels.iter().filter_map(|l| l.name.as_deref()).collect()
    }

    pub fn assignees(&self) -> Vec<&str> {
        self.assignees
            .iter()
            .filter_map(|a| a.login.as_deref())
            .collect()
    }
}
