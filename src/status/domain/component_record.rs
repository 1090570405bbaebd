use crate::status::domain::{ArtifactMetadata, Coordinate, IssueStats, ProjectManifest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role tag of developers who review pull requests
pub const ROLE_REVIEWER: &str = "reviewer";
/// Role tag of developers who answer issues
pub const ROLE_SUPPORT: &str = "support";
/// Role tag of developers who cut releases
pub const ROLE_MAINTAINER: &str = "maintainer";

/// Role tag -> developer ids, in manifest order
pub type Team = BTreeMap<String, Vec<String>>;

/// The result of resolving one coordinate against repository storage.
///
/// This is the element type of the persisted metadata snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub release: Option<ArtifactMetadata>,
    pub prerelease: Option<ArtifactMetadata>,
    pub manifest: Option<ProjectManifest>,
}

impl ResolvedComponent {
    pub fn unresolved(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            release: None,
            prerelease: None,
            manifest: None,
        }
    }

    /// True when no store knew the coordinate and no manifest was found
    pub fn is_unresolved(&self) -> bool {
        self.release.is_none() && self.prerelease.is_none() && self.manifest.is_none()
    }
}

/// The merged per-component aggregate.
///
/// The resolver fills `release`, `prerelease` and `manifest`; the aggregator
/// fills `team` and `issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub release: Option<ArtifactMetadata>,
    pub prerelease: Option<ArtifactMetadata>,
    pub manifest: Option<ProjectManifest>,
    #[serde(default)]
    pub team: Team,
    #[serde(default)]
    pub issues: Option<IssueStats>,
}

impl From<ResolvedComponent> for ComponentRecord {
    fn from(resolved: ResolvedComponent) -> Self {
        Self {
            coordinate: resolved.coordinate,
            release: resolved.release,
            prerelease: resolved.prerelease,
            manifest: resolved.manifest,
            team: Team::new(),
            issues: None,
        }
    }
}

impl ComponentRecord {
    /// Rebuilds the team mapping from the manifest's developers.
    ///
    /// Developers lacking an id or roles are skipped. An id is appended once
    /// per declared role, so a role listed twice yields the id twice.
    pub fn derive_team(&mut self) {
        self.team.clear();
        let Some(manifest) = &self.manifest else {
            return;
        };
        for dev in &manifest.developers {
            let Some(id) = &dev.id else { continue };
            for role in &dev.roles {
                self.team.entry(role.clone()).or_default().push(id.clone());
            }
        }
    }

    pub fn members(&self, role: &str) -> &[String] {
        self.team.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Someone reviews or supports this component
    pub fn is_watched(&self) -> bool {
        !self.members(ROLE_REVIEWER).is_empty() || !self.members(ROLE_SUPPORT).is_empty()
    }

    /// Ordering key: issues slug first, then coordinate
    pub fn sort_key(&self) -> String {
        let slug = self.issues.as_ref().map(IssueStats::slug).unwrap_or_default();
        format!("{};{}", slug, self.coordinate)
    }
}
