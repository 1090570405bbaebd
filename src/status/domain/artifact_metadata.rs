use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version metadata for one coordinate as recorded by one backing store.
///
/// Several stores may hold metadata for the same coordinate; the resolver
/// keeps only the one with the greatest `last_updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// When the store last updated this coordinate's metadata
    pub last_updated: Option<DateTime<Utc>>,
    /// Newest version of any kind, pre-releases included
    pub latest: Option<String>,
    /// Newest release version
    pub release: Option<String>,
    /// Last version listed under `versions`; more reliable than `latest`
    pub last_version: Option<String>,
    /// Name of the store this metadata was read from
    pub source: String,
}

impl ArtifactMetadata {
    /// True when this metadata should replace `best` under "best wins".
    ///
    /// Only a strictly newer timestamp wins, so among equal timestamps the
    /// first store in list order is retained. A known timestamp beats an
    /// unknown one.
    pub fn supersedes(&self, best: &ArtifactMetadata) -> bool {
        self.last_updated > best.last_updated
    }
}
