use crate::status::domain::{ComponentRecord, Overrides};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds a pre-release may run ahead of the last vetting before a
/// release is considered due
const RELEASE_GRACE_SECS: i64 = 24 * 60 * 60;

/// Where a component's last vetting timestamp came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VettingSource {
    /// Release metadata only; no override exists
    Release,
    /// The manual override is the latest vetting
    Override,
    /// A release was cut after the manual override, making the override stale
    ReleaseAfterOverride,
    /// Neither a release nor an override ever vetted the component
    Unknown,
}

/// Whether a component has changed since it was last vetted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VettingAssessment {
    pub last_vetted: Option<DateTime<Utc>>,
    pub source: VettingSource,
    /// Pre-release metadata's last update
    pub last_updated: Option<DateTime<Utc>>,
    pub release_needed: bool,
}

impl VettingAssessment {
    /// Vetting is the later of the release timestamp and the manual override.
    pub fn assess(record: &ComponentRecord, overrides: &Overrides) -> Self {
        let released = record.release.as_ref().and_then(|m| m.last_updated);
        let overridden = overrides.vetted_timestamp(&record.coordinate);
        let last_updated = record.prerelease.as_ref().and_then(|m| m.last_updated);

        let (last_vetted, source) = match (released, overridden) {
            (None, None) => (None, VettingSource::Unknown),
            (Some(r), None) => (Some(r), VettingSource::Release),
            (Some(r), Some(o)) if r > o => (Some(r), VettingSource::ReleaseAfterOverride),
            (_, Some(o)) => (Some(o), VettingSource::Override),
        };

        let release_needed = match (last_updated, last_vetted) {
            (Some(updated), Some(vetted)) => (updated - vetted).num_seconds() > RELEASE_GRACE_SECS,
            (Some(_), None) => true,
            (None, _) => false,
        };

        Self {
            last_vetted,
            source,
            last_updated,
            release_needed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::domain::{parse_key_value_map, ArtifactMetadata, Coordinate, ResolvedComponent};
    use chrono::TimeZone;

    fn metadata(ts: DateTime<Utc>) -> ArtifactMetadata {
        ArtifactMetadata {
            last_updated: Some(ts),
            latest: None,
            release: None,
            last_version: None,
            source: "test".to_string(),
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 9, day, hour, 0, 0).unwrap()
    }

    fn record(release: Option<DateTime<Utc>>, prerelease: Option<DateTime<Utc>>) -> ComponentRecord {
        ComponentRecord::from(ResolvedComponent {
            coordinate: Coordinate::new("org.acme", "widget").unwrap(),
            release: release.map(metadata),
            prerelease: prerelease.map(metadata),
            manifest: None,
        })
    }

    fn override_at(ts: &str) -> Overrides {
        Overrides::new()
            .with_vetted_timestamps(parse_key_value_map(&format!("org.acme:widget {}", ts), ' '))
            .unwrap()
    }

    #[test]
    fn test_release_only() {
        let a = VettingAssessment::assess(&record(Some(at(1, 0)), Some(at(1, 12))), &Overrides::new());
        assert_eq!(a.source, VettingSource::Release);
        assert_eq!(a.last_vetted, Some(at(1, 0)));
        assert!(!a.release_needed);
    }

    #[test]
    fn test_release_needed_after_one_day() {
        let a = VettingAssessment::assess(&record(Some(at(1, 0)), Some(at(2, 1))), &Overrides::new());
        assert!(a.release_needed);
    }

    #[test]
    fn test_newer_override_wins() {
        let a = VettingAssessment::assess(
            &record(Some(at(1, 0)), Some(at(5, 0))),
            &override_at("20210905000000"),
        );
        assert_eq!(a.source, VettingSource::Override);
        assert_eq!(a.last_vetted, Some(at(5, 0)));
        assert!(!a.release_needed);
    }

    #[test]
    fn test_release_after_override() {
        let a = VettingAssessment::assess(
            &record(Some(at(10, 0)), None),
            &override_at("20210905000000"),
        );
        assert_eq!(a.source, VettingSource::ReleaseAfterOverride);
        assert_eq!(a.last_vetted, Some(at(10, 0)));
    }

    #[test]
    fn test_never_vetted() {
        let a = VettingAssessment::assess(&record(None, Some(at(1, 0))), &Overrides::new());
        assert_eq!(a.source, VettingSource::Unknown);
        assert_eq!(a.last_vetted, None);
        assert!(a.release_needed);

        let idle = VettingAssessment::assess(&record(None, None), &Overrides::new());
        assert!(!idle.release_needed);
    }
}
