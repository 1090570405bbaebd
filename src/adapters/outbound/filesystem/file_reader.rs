use crate::ports::outbound::OverridesReader;
use crate::shared::error::StatusError;
use crate::shared::security::{read_optional_file, validate_not_symlink};
use crate::shared::Result;
use crate::status::domain::parse_key_value_map;
use std::collections::HashMap;
use std::path::Path;

/// FileSystemReader adapter for reading local input files
///
/// Implements the OverridesReader port and reads the aggregate document
/// consumed by the scoring command.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a required input file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    pub fn read_required(&self, path: &Path) -> Result<String> {
        let to_error = |details: String| StatusError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        validate_not_symlink(path, "read").map_err(|e| to_error(e.to_string()))?;
        read_optional_file(path)
            .map_err(|e| to_error(e.to_string()))?
            .ok_or_else(|| to_error("File does not exist".to_string()).into())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl OverridesReader for FileSystemReader {
    fn read_key_values(&self, path: &Path) -> Result<HashMap<String, String>> {
        match read_optional_file(path)? {
            Some(content) => Ok(parse_key_value_map(&content, ' ')),
            None => {
                log::debug!("No override file at {}", path.display());
                Ok(HashMap::new())
            }
        }
    }
}
