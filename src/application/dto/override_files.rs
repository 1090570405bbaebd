use std::path::PathBuf;

/// Locations of the manually maintained override files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideFiles {
    /// `org/repo` -> badge markup
    pub badges: PathBuf,
    /// `group:artifact` -> last vetted timestamp
    pub timestamps: PathBuf,
    /// `group:artifact` -> project URL
    pub project_urls: PathBuf,
}

impl Default for OverrideFiles {
    fn default() -> Self {
        Self {
            badges: PathBuf::from("ci-badges.txt"),
            timestamps: PathBuf::from("timestamps.txt"),
            project_urls: PathBuf::from("project-urls.txt"),
        }
    }
}
