use crate::shared::Result;
use crate::status::domain::timestamp::parse_repository_timestamp;
use crate::status::domain::{ArtifactMetadata, Coordinate, Developer, ProjectManifest};
use crate::status::services::xml_document::{XmlDocument, XmlElement};

/// ManifestReader - parses repository documents into flat domain records
///
/// Handles three document kinds: project manifests (POMs), per-store
/// version metadata (`maven-metadata.xml`) and the root manifest's
/// dependency-management section.
pub struct ManifestReader;

impl ManifestReader {
    /// Parses a project manifest.
    ///
    /// `groupId` and `version` fall back to the `parent` section when unset
    /// locally; `artifactId` never inherits.
    pub fn read_manifest(content: &str, source: &str) -> Result<ProjectManifest> {
        let doc = XmlDocument::parse(content, source)?;

        let group_id = match doc.value("groupId")? {
            Some(g) => Some(g),
            None => doc.value("parent/groupId")?,
        };
        let version = match doc.value("version")? {
            Some(v) => Some(v),
            None => doc.value("parent/version")?,
        };

        Ok(ProjectManifest {
            group_id,
            artifact_id: doc.value("artifactId")?,
            version,
            scm_url: doc.value("scm/url")?,
            issues_url: doc.value("issueManagement/url")?,
            ci_url: doc.value("ciManagement/url")?,
            developers: doc
                .elements("developers/developer")
                .into_iter()
                .map(Self::read_developer)
                .collect(),
            source: source.to_string(),
        })
    }

    fn read_developer(element: &XmlElement) -> Developer {
        let mut dev = Developer::default();
        for child in &element.children {
            if child.is_leaf() {
                let Some(text) = child.text.clone() else {
                    continue;
                };
                match child.name.as_str() {
                    "id" => dev.id = Some(text),
                    "name" => dev.name = Some(text),
                    other => {
                        dev.fields.insert(other.to_string(), text);
                    }
                }
            } else if child.name == "properties" {
                dev.properties = child
                    .children
                    .iter()
                    .map(|p| (p.name.clone(), p.text.clone().unwrap_or_default()))
                    .collect();
            } else {
                let values: Vec<String> = child
                    .children
                    .iter()
                    .filter_map(|v| v.text.clone())
                    .collect();
                if child.name == "roles" {
                    dev.roles = values;
                } else {
                    dev.lists.insert(child.name.clone(), values);
                }
            }
        }
        dev
    }

    /// Parses one store's version metadata.
    ///
    /// An unparsable `lastUpdated` degrades to `None` rather than failing.
    pub fn read_metadata(content: &str, store: &str, source: &str) -> Result<ArtifactMetadata> {
        let doc = XmlDocument::parse(content, source)?;

        let last_updated = match doc.value("versioning/lastUpdated")? {
            Some(raw) => match parse_repository_timestamp(&raw) {
                Ok(ts) => Some(ts),
                Err(e) => {
                    log::warn!("Ignoring lastUpdated in {}: {}", source, e);
                    None
                }
            },
            None => None,
        };

        Ok(ArtifactMetadata {
            last_updated,
            latest: doc.value("versioning/latest")?,
            release: doc.value("versioning/release")?,
            last_version: doc
                .elements("versioning/versions/version")
                .last()
                .and_then(|v| v.text.clone()),
            source: store.to_string(),
        })
    }

    /// Coordinates declared in the `dependencyManagement` section.
    ///
    /// `${project.groupId}` and `${pom.groupId}` resolve to `own_group_id`;
    /// entries still containing a placeholder are skipped.
    pub fn managed_dependencies(
        content: &str,
        source: &str,
        own_group_id: &str,
    ) -> Result<Vec<Coordinate>> {
        let doc = XmlDocument::parse(content, source)?;
        let mut coordinates = Vec::new();

        for dep in doc.elements("dependencyManagement/dependencies/dependency") {
            let field = |name: &str| {
                dep.children
                    .iter()
                    .find(|c| c.name == name)
                    .and_then(|c| c.text.clone())
            };
            let (Some(group_id), Some(artifact_id)) = (field("groupId"), field("artifactId"))
            else {
                log::warn!("Skipping incomplete managed dependency in {}", source);
                continue;
            };
            let group_id = group_id
                .replace("${project.groupId}", own_group_id)
                .replace("${pom.groupId}", own_group_id);
            if group_id.contains("${") || artifact_id.contains("${") {
                log::warn!(
                    "Skipping managed dependency with unresolved property: {}:{}",
                    group_id,
                    artifact_id
                );
                continue;
            }
            match Coordinate::new(group_id, artifact_id) {
                Ok(coordinate) => coordinates.push(coordinate),
                Err(e) => log::warn!("Skipping managed dependency in {}: {}", source, e),
            }
        }

        Ok(coordinates)
    }
}
