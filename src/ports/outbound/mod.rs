/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (repository storage, the issue
/// tracker, the file system, the console).
pub mod issue_repository;
pub mod metadata_provider;
pub mod output_presenter;
pub mod overrides_reader;
pub mod progress_reporter;
pub mod repository_storage;
pub mod search_page_fetcher;

pub use issue_repository::IssueRepository;
pub use metadata_provider::MetadataProvider;
pub use output_presenter::OutputPresenter;
pub use overrides_reader::OverridesReader;
pub use progress_reporter::ProgressReporter;
pub use repository_storage::{RepositoryStorage, StoredDocument};
pub use search_page_fetcher::{SearchPage, SearchPageFetcher};
