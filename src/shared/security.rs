use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Maximum size of any document read from repository storage or the cache (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular file as UTF-8, treating a missing file as absent data.
///
/// Returns `Ok(None)` when the path does not exist. Non-regular files and
/// oversized files are rejected; any other I/O failure is propagated as a
/// transport error.
pub fn read_optional_file(path: &Path) -> Result<Option<String>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => anyhow::bail!("Failed to read metadata of {}: {}", path.display(), e),
    };

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }
    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow::anyhow!("Failed to read {}: {}", path.display(), e)),
    }
}
