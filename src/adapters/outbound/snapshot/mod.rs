//! Snapshot decorators persisting resolved metadata and issue sets so an
//! interrupted or repeated run can resume without re-fetching.

mod issue_snapshot;
mod metadata_snapshot;

pub use issue_snapshot::SnapshotIssueRepository;
pub use metadata_snapshot::SnapshotMetadataProvider;

use crate::shared::error::StatusError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Writes a snapshot, but only when its directory already exists.
///
/// Returns whether the snapshot was written. A missing directory means
/// caching is disabled for this run, which is not an error.
fn persist(path: &Path, content: &str) -> Result<bool> {
    let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(false);
    };
    if !dir.is_dir() {
        log::debug!(
            "Snapshot directory {} does not exist; not persisting",
            dir.display()
        );
        return Ok(false);
    }
    if fs::symlink_metadata(path).is_ok() {
        validate_not_symlink(path, "write")?;
    }
    fs::write(path, content).map_err(|e| StatusError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(true)
}
