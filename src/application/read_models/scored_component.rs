//! Scored view of one component, as consumed by report renderers.

use crate::status::domain::{ComponentRecord, Coordinate, Overrides};
use crate::status::policies::TrackerNamespace;
use crate::status::services::{
    build_badge, project_url, BuildBadge, ScoringEngine, VettingAssessment,
};
use serde::{Deserialize, Serialize};

/// A developer's total score on one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperScore {
    /// Developer id, else name, else the anonymous placeholder
    pub developer: String,
    pub score: u64,
}

/// One row of the status report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredComponent {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// `org/repo` of the tracked issue list, when there is one
    pub repository: Option<String>,
    pub project_url: Option<String>,
    pub badge: Option<BuildBadge>,
    /// Release version recorded by the winning release store
    pub release: Option<String>,
    /// Newest version listed by the winning release store
    pub newest_release: Option<String>,
    pub review_score: u64,
    pub support_score: u64,
    pub maintenance_score: u64,
    pub developers: Vec<DeveloperScore>,
    pub vetting: VettingAssessment,
    pub sort_key: String,
}

impl ScoredComponent {
    pub fn from_record(
        record: &ComponentRecord,
        overrides: &Overrides,
        namespace: &TrackerNamespace,
    ) -> Self {
        let developers = record
            .manifest
            .iter()
            .flat_map(|m| m.developers.iter())
            .filter_map(|dev| {
                ScoringEngine::developer_score(record, dev, overrides).map(|score| DeveloperScore {
                    developer: dev.display_id().to_string(),
                    score,
                })
            })
            .collect();

        Self {
            coordinate: record.coordinate.clone(),
            repository: record.issues.as_ref().map(|s| s.slug()),
            project_url: project_url(record, overrides),
            badge: build_badge(record, overrides, namespace),
            release: record.release.as_ref().and_then(|m| m.release.clone()),
            newest_release: record.release.as_ref().and_then(|m| m.last_version.clone()),
            review_score: ScoringEngine::review_score(record),
            support_score: ScoringEngine::support_score(record),
            maintenance_score: ScoringEngine::maintenance_score(record, overrides),
            developers,
            vetting: VettingAssessment::assess(record, overrides),
            sort_key: record.sort_key(),
        }
    }
}
