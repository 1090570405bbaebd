use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display identity for developers declaring neither an id nor a name
pub const ANONYMOUS_DEVELOPER: &str = "~MYSTERIOUS NINJA~";

/// The flattened project manifest (POM) of one resolved coordinate+version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Local groupId, falling back to the parent's
    pub group_id: Option<String>,
    /// Local artifactId; never inherited
    pub artifact_id: Option<String>,
    /// Local version, falling back to the parent's
    pub version: Option<String>,
    pub scm_url: Option<String>,
    pub issues_url: Option<String>,
    pub ci_url: Option<String>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    /// Where the manifest was read from
    pub source: String,
}

/// A `<developer>` entry of a manifest.
///
/// Leaf children become string fields, the nested `properties` tree becomes a
/// string map, and any other child with sub-elements (such as `roles`)
/// becomes a list of its sub-element texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Role tags in declaration order; re-listed roles are kept
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    /// Remaining leaf fields (email, url, organization, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    /// Remaining list-valued fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub lists: BTreeMap<String, Vec<String>>,
}

impl Developer {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// The id, else the name, else the anonymous placeholder
    pub fn display_id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(ANONYMOUS_DEVELOPER)
    }
}
