use crate::shared::error::StatusError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for a groupId or artifactId (security limit)
const MAX_PART_LENGTH: usize = 255;

/// Component coordinate: the (groupId, artifactId) identity of a component,
/// independent of version. Globally unique key for every downstream record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
}

impl Coordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        Self::validate_part(&group_id, &group_id, &artifact_id)?;
        Self::validate_part(&artifact_id, &group_id, &artifact_id)?;
        Ok(Self {
            group_id,
            artifact_id,
        })
    }

    // Parts become path segments inside repository storage, so separators
    // and parent references are rejected outright.
    fn validate_part(part: &str, group_id: &str, artifact_id: &str) -> Result<()> {
        let valid = !part.is_empty()
            && part.len() <= MAX_PART_LENGTH
            && !part.contains("..")
            && part
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.');
        if !valid {
            return Err(StatusError::InvalidCoordinate {
                value: format!("{}:{}", group_id, artifact_id),
            }
            .into());
        }
        Ok(())
    }

    /// The groupId as a relative storage path (`org.scijava` -> `org/scijava`)
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// The `group:artifact` key used by override files
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once(':') {
            Some((g, a)) if !a.contains(':') => Coordinate::new(g, a),
            _ => Err(StatusError::InvalidCoordinate {
                value: s.to_string(),
            }
            .into()),
        }
    }
}
