pub mod artifact_metadata;
pub mod component_record;
pub mod coordinate;
pub mod issue;
pub mod issue_stats;
pub mod manifest;
pub mod overrides;
pub mod timestamp;

pub use artifact_metadata::ArtifactMetadata;
pub use component_record::{
    ComponentRecord, ResolvedComponent, Team, ROLE_MAINTAINER, ROLE_REVIEWER, ROLE_SUPPORT,
};
pub use coordinate::Coordinate;
pub use issue::{Issue, IssueSet};
pub use issue_stats::{IssueStats, NO_MILESTONE};
pub use manifest::{Developer, ProjectManifest, ANONYMOUS_DEVELOPER};
pub use overrides::{parse_key_value_map, Overrides};
