use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow cron jobs and CI systems to distinguish between
/// argument mistakes and failed aggregation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the status document was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unresolved root, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for status aggregation.
///
/// Missing data is never represented here: absent stores, manifests and
/// tracker fields flow through the records as `None`. These variants cover
/// malformed data, transport failures and the unresolved-root condition.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Root component {coordinate} could not be resolved: no repository metadata and no manifest were found\n\n💡 Hint: Run on the repository server, or provide a cached metadata snapshot in the cache directory")]
    RootUnresolved { coordinate: String },

    #[error("Metadata snapshot is empty: {path}\n\n💡 Hint: Delete the snapshot to force a fresh resolution from repository storage")]
    EmptySnapshot { path: PathBuf },

    #[error("Malformed document: {source_name}\nField '{field}' appears {count} times but must be singular")]
    DuplicateField {
        source_name: String,
        field: String,
        count: usize,
    },

    #[error("Invalid timestamp: '{value}'\nDetails: {details}")]
    InvalidTimestamp { value: String, details: String },

    #[error("Invalid component coordinate: '{value}'\n\n💡 Hint: Coordinates are written as groupId:artifactId")]
    InvalidCoordinate { value: String },

    #[error("Failed to parse manifest: {source_name}\nDetails: {details}")]
    ManifestParseError { source_name: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Issue tracker returned status {status} for {url}\n\n💡 Hint: Check the token in the configured environment variable, or wait for the rate limit to reset")]
    TrackerRequestFailed { status: u16, url: String },

    #[error("Aggregation did not finish within {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Validation error for configuration values and builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}
