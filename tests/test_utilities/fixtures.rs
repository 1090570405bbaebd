use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An on-disk repository storage tree in a temporary directory
pub struct StorageFixture {
    dir: TempDir,
}

impl StorageFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    fn artifact_dir(&self, store: &str, group_id: &str, artifact_id: &str) -> PathBuf {
        let dir = self
            .root()
            .join(store)
            .join(group_id.replace('.', "/"))
            .join(artifact_id);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes `maven-metadata.xml` for one store
    pub fn metadata(
        &self,
        store: &str,
        coordinate: &str,
        versions: &[&str],
        last_updated: &str,
    ) -> &Self {
        let (group_id, artifact_id) = coordinate.split_once(':').unwrap();
        let versions_xml: String = versions
            .iter()
            .map(|v| format!("<version>{}</version>", v))
            .collect();
        let release = versions
            .iter()
            .rev()
            .find(|v| !v.ends_with("-SNAPSHOT"))
            .map(|v| format!("<release>{}</release>", v))
            .unwrap_or_default();
        let xml = format!(
            "<metadata><groupId>{g}</groupId><artifactId>{a}</artifactId><versioning>\
             <latest>{latest}</latest>{release}<versions>{versions_xml}</versions>\
             <lastUpdated>{last_updated}</lastUpdated></versioning></metadata>",
            g = group_id,
            a = artifact_id,
            latest = versions.last().copied().unwrap_or_default(),
        );
        fs::write(
            self.artifact_dir(store, group_id, artifact_id)
                .join("maven-metadata.xml"),
            xml,
        )
        .unwrap();
        self
    }

    /// Writes one file into a version directory
    pub fn version_file(
        &self,
        store: &str,
        coordinate: &str,
        version: &str,
        file_name: &str,
        content: &str,
    ) -> &Self {
        let (group_id, artifact_id) = coordinate.split_once(':').unwrap();
        let dir = self.artifact_dir(store, group_id, artifact_id).join(version);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file_name), content).unwrap();
        self
    }
}

/// A project manifest with a tracker URL and one developer holding `roles`
pub fn manifest(
    coordinate: &str,
    version: &str,
    tracker_repo: Option<&str>,
    developer: Option<(&str, &[&str])>,
) -> String {
    let (group_id, artifact_id) = coordinate.split_once(':').unwrap();
    let issue_management = tracker_repo
        .map(|repo| {
            format!(
                "<issueManagement><url>https://github.com/{}/issues</url></issueManagement>\
                 <scm><url>https://github.com/{}</url></scm>",
                repo, repo
            )
        })
        .unwrap_or_default();
    let developers = developer
        .map(|(id, roles)| {
            let roles: String = roles.iter().map(|r| format!("<role>{}</role>", r)).collect();
            format!(
                "<developers><developer><id>{}</id><roles>{}</roles></developer></developers>",
                id, roles
            )
        })
        .unwrap_or_default();
    format!(
        "<project><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version>{}{}</project>",
        group_id, artifact_id, version, issue_management, developers
    )
}

/// A root manifest managing `dependencies`
pub fn root_manifest(coordinate: &str, version: &str, dependencies: &[&str]) -> String {
    let (group_id, artifact_id) = coordinate.split_once(':').unwrap();
    let managed: String = dependencies
        .iter()
        .map(|dep| {
            let (g, a) = dep.split_once(':').unwrap();
            format!(
                "<dependency><groupId>{}</groupId><artifactId>{}</artifactId></dependency>",
                g, a
            )
        })
        .collect();
    format!(
        "<project><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version>\
         <dependencyManagement><dependencies>{}</dependencies></dependencyManagement></project>",
        group_id, artifact_id, version, managed
    )
}

/// A raw tracker search item
pub fn issue_item(id: u64, repo: &str, created_at: &str, labels: &[&str]) -> Value {
    let labels: Vec<Value> = labels.iter().map(|l| json!({ "name": l })).collect();
    json!({
        "id": id,
        "repository_url": format!("https://api.github.com/repos/{}", repo),
        "created_at": created_at,
        "updated_at": created_at,
        "labels": labels,
        "assignees": [],
        "milestone": null,
    })
}
