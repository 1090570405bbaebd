pub mod badges;
mod issue_statistics;
mod manifest_reader;
mod metadata_resolver;
mod scoring;
mod vetting;
mod xml_document;

pub use badges::{build_badge, project_url, BuildBadge};
pub use issue_statistics::IssueStatistics;
pub use manifest_reader::ManifestReader;
pub use metadata_resolver::{MetadataResolver, ResolverSettings};
pub use scoring::{ScoringEngine, NEVER_VETTED_SCORE};
pub use vetting::{VettingAssessment, VettingSource};
pub use xml_document::{XmlDocument, XmlElement};
