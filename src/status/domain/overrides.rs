use crate::shared::Result;
use crate::status::domain::timestamp::parse_repository_timestamp;
use crate::status::domain::Coordinate;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Parses a line-oriented `key<sep>value` file.
///
/// Blank lines and lines starting with `#` are ignored. A line without a
/// separator maps its key to an empty value.
pub fn parse_key_value_map(content: &str, separator: char) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(separator) {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (line.to_string(), String::new()),
        })
        .collect()
}

/// Manually maintained override data, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `org/repo` slug -> badge HTML
    badges: HashMap<String, String>,
    /// `group:artifact` -> when the component was last confirmed not to need a release
    vetted: HashMap<String, DateTime<Utc>>,
    /// `group:artifact` -> project URL
    project_urls: HashMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_badges(mut self, badges: HashMap<String, String>) -> Self {
        self.badges = badges;
        self
    }

    /// Converts raw timestamp override values; a malformed value is fatal
    pub fn with_vetted_timestamps(mut self, raw: HashMap<String, String>) -> Result<Self> {
        self.vetted = raw
            .into_iter()
            .map(|(key, value)| {
                let ts = parse_repository_timestamp(&value)
                    .with_context(|| format!("Invalid vetted timestamp override for {}", key))?;
                Ok((key, ts))
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    pub fn with_project_urls(mut self, project_urls: HashMap<String, String>) -> Self {
        self.project_urls = project_urls;
        self
    }

    pub fn badge(&self, slug: &str) -> Option<&str> {
        self.badges.get(slug).map(String::as_str)
    }

    pub fn vetted_timestamp(&self, coordinate: &Coordinate) -> Option<DateTime<Utc>> {
        self.vetted.get(&coordinate.key()).copied()
    }

    pub fn project_url(&self, coordinate: &Coordinate) -> Option<&str> {
        self.project_urls.get(&coordinate.key()).map(String::as_str)
    }
}
