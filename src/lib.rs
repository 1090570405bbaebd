//! bom-status - release and maintenance status for managed component collections
//!
//! This library resolves every component managed by a root "bill of
//! materials" manifest against a repository manager's storage, downloads the
//! open issues of the tracker organizations those components belong to, and
//! merges both into one status record per component. A scoring pass turns
//! those records into review, support and maintenance scores.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`status`): Pure business logic, domain models and policies
//! - **Application Layer** (`application`): Use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_status::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let storage = FileSystemStorage::new(PathBuf::from("/opt/sonatype-work/nexus/storage"));
//! let resolver = MetadataResolver::new(storage, ResolverSettings::default());
//! let metadata_provider = StorageMetadataProvider::new(resolver);
//! let fetcher = HttpSearchPageFetcher::new("bom-status", None)?;
//! let issue_repository = GitHubIssueClient::new(fetcher, SearchSettings::default());
//!
//! // Create use case
//! let use_case = AggregateStatusUseCase::new(
//!     metadata_provider,
//!     issue_repository,
//!     StderrProgressReporter::new(),
//!     TrackerNamespace::new("github.com")?,
//! );
//!
//! // Execute
//! let root: Coordinate = "org.scijava:pom-scijava".parse()?;
//! let response = use_case.execute(StatusRequest::new(root)).await?;
//! println!("{}", response.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod status;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemStorage, FileSystemWriter, StdoutPresenter,
        StorageMetadataProvider,
    };
    pub use crate::adapters::outbound::network::{
        GitHubIssueClient, HttpSearchPageFetcher, SearchSettings,
    };
    pub use crate::adapters::outbound::snapshot::{
        SnapshotIssueRepository, SnapshotMetadataProvider,
    };
    pub use crate::application::dto::{OverrideFiles, StatusRequest, StatusResponse};
    pub use crate::application::read_models::{DeveloperScore, ScoredComponent};
    pub use crate::application::use_cases::{AggregateStatusUseCase, ScoreComponentsUseCase};
    pub use crate::ports::outbound::{
        IssueRepository, MetadataProvider, OutputPresenter, OverridesReader, ProgressReporter,
        RepositoryStorage, SearchPage, SearchPageFetcher, StoredDocument,
    };
    pub use crate::shared::Result;
    pub use crate::status::domain::{
        ArtifactMetadata, ComponentRecord, Coordinate, Developer, Issue, IssueSet, IssueStats,
        Overrides, ProjectManifest, ResolvedComponent,
    };
    pub use crate::status::policies::TrackerNamespace;
    pub use crate::status::services::{
        BuildBadge, MetadataResolver, ResolverSettings, ScoringEngine, VettingAssessment,
        VettingSource,
    };
}
