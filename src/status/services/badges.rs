use crate::status::domain::{ComponentRecord, Overrides};
use crate::status::policies::TrackerNamespace;
use serde::{Deserialize, Serialize};

/// A component's build status badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BuildBadge {
    /// Hand-written badge markup from the badge override file
    Override { html: String },
    /// A hosted CI workflow badge
    Actions { link: String, image: String },
}

/// The project URL of a component: the override for `group:artifact`, else
/// the manifest's SCM URL.
pub fn project_url(record: &ComponentRecord, overrides: &Overrides) -> Option<String> {
    overrides
        .project_url(&record.coordinate)
        .map(str::to_string)
        .or_else(|| record.manifest.as_ref().and_then(|m| m.scm_url.clone()))
}

/// Picks the build badge for a component.
///
/// A badge override keyed by the `org/repo` slug of the project URL wins.
/// Otherwise a project or CI URL on the tracker host yields the workflow
/// badge of that repository.
pub fn build_badge(
    record: &ComponentRecord,
    overrides: &Overrides,
    namespace: &TrackerNamespace,
) -> Option<BuildBadge> {
    let project = project_url(record, overrides);
    let ci = record.manifest.as_ref().and_then(|m| m.ci_url.clone());

    let project_repo = project.as_deref().and_then(|u| namespace.project_repo(u));
    if let Some((org, repo)) = &project_repo {
        if let Some(html) = overrides.badge(&format!("{}/{}", org, repo)) {
            return Some(BuildBadge::Override {
                html: html.to_string(),
            });
        }
    }

    let (org, repo) = ci
        .as_deref()
        .and_then(|u| namespace.project_repo(u))
        .or(project_repo)?;
    let base = format!("https://{}/{}/{}/actions", namespace.host(), org, repo);
    Some(BuildBadge::Actions {
        image: format!("{}/workflows/build-main.yml/badge.svg", base),
        link: base,
    })
}
