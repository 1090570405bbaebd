/// Mock implementations for testing
mod mock_issue_repository;
mod mock_progress_reporter;

pub use mock_issue_repository::MockIssueRepository;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
