use crate::ports::outbound::OutputPresenter;
use crate::shared::error::StatusError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> StatusError {
        StatusError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")
                .map_err(|e| self.write_error(e.to_string()))?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
