use crate::ports::outbound::{RepositoryStorage, StoredDocument};
use crate::shared::error::StatusError;
use crate::shared::security::read_optional_file;
use crate::shared::Result;
use crate::status::domain::Coordinate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const METADATA_FILE: &str = "maven-metadata.xml";

/// FileSystemStorage adapter reading the on-disk layout of a repository manager
///
/// Every store is a directory under the storage root, laid out as
/// `{store}/{group path}/{artifactId}/` with one metadata file and one
/// directory per version.
pub struct FileSystemStorage {
    root: PathBuf,
}

impl FileSystemStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_dir(&self, store: &str, coordinate: &Coordinate) -> Result<PathBuf> {
        Self::validate_segment(store, "store name")?;
        Ok(self
            .root
            .join(store)
            .join(coordinate.group_path())
            .join(&coordinate.artifact_id))
    }

    fn version_dir(&self, store: &str, coordinate: &Coordinate, version: &str) -> Result<PathBuf> {
        Self::validate_segment(version, "version")?;
        Ok(self.artifact_dir(store, coordinate)?.join(version))
    }

    /// Names taken from metadata become path segments; reject anything
    /// that could leave the storage root.
    fn validate_segment(segment: &str, what: &str) -> Result<()> {
        if segment.is_empty()
            || segment == "."
            || segment.contains("..")
            || segment.contains('/')
            || segment.contains('\\')
        {
            return Err(StatusError::Validation {
                message: format!("Unsafe {} in repository storage path: '{}'", what, segment),
            }
            .into());
        }
        Ok(())
    }

    fn read_document(path: PathBuf) -> Result<Option<StoredDocument>> {
        Ok(read_optional_file(&path)?.map(|content| StoredDocument {
            content,
            location: path.display().to_string(),
        }))
    }
}

impl RepositoryStorage for FileSystemStorage {
    fn read_metadata(
        &self,
        store: &str,
        coordinate: &Coordinate,
    ) -> Result<Option<StoredDocument>> {
        Self::read_document(self.artifact_dir(store, coordinate)?.join(METADATA_FILE))
    }

    fn list_version_files(
        &self,
        store: &str,
        coordinate: &Coordinate,
        version: &str,
    ) -> Result<Vec<String>> {
        let dir = self.version_dir(store, coordinate, version)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StatusError::FileReadError {
                    path: dir,
                    details: e.to_string(),
                }
                .into())
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::debug!("Skipping non-UTF-8 file name {:?}", raw),
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_version_file(
        &self,
        store: &str,
        coordinate: &Coordinate,
        version: &str,
        file_name: &str,
    ) -> Result<Option<StoredDocument>> {
        Self::validate_segment(file_name, "file name")?;
        Self::read_document(self.version_dir(store, coordinate, version)?.join(file_name))
    }
}
