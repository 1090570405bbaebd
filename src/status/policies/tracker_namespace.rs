use crate::shared::Result;
use regex::Regex;

/// TrackerNamespace policy for mapping manifest URLs onto tracker repositories
///
/// A manifest's issue URL only counts as tracked when it is the canonical
/// issue list of a repository on the tracker host:
/// `https://{host}/{org}/{repo}/issues`.
/// Anything else (a mailing list, another tracker, a bare project page)
/// leaves the component without issue statistics.
#[derive(Debug, Clone)]
pub struct TrackerNamespace {
    host: String,
    issues_pattern: Regex,
    project_pattern: Regex,
}

impl TrackerNamespace {
    pub fn new(host: &str) -> Result<Self> {
        let escaped = regex::escape(host);
        Ok(Self {
            host: host.to_string(),
            issues_pattern: Regex::new(&format!(r"^https?://{}/([^/]+)/([^/]+)/issues", escaped))?,
            project_pattern: Regex::new(&format!(
                r"^https?://{}/([^/]+)/([^/]+?)(?:\.git)?(?:/.*)?$",
                escaped
            ))?,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The (org, repo) whose issue list `url` points at
    pub fn issues_repo(&self, url: &str) -> Option<(String, String)> {
        Self::capture_pair(&self.issues_pattern, url)
    }

    /// The (org, repo) of a project, CI or SCM URL hosted on the tracker
    pub fn project_repo(&self, url: &str) -> Option<(String, String)> {
        Self::capture_pair(&self.project_pattern, url)
    }

    fn capture_pair(pattern: &Regex, url: &str) -> Option<(String, String)> {
        let caps = pattern.captures(url.trim())?;
        Some((caps[1].to_string(), caps[2].to_string()))
    }
}
