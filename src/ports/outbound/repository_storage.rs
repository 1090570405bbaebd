use crate::shared::Result;
use crate::status::domain::Coordinate;

/// A document read from repository storage, with the location it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub content: String,
    pub location: String,
}

/// RepositoryStorage port for reading the backing stores of a repository manager
///
/// Stores are addressed by name (e.g. `releases`, `snapshots`). Every method
/// treats a missing store, directory or file as absent data (`Ok(None)` or an
/// empty listing); only genuine I/O failures are errors.
pub trait RepositoryStorage: Send + Sync {
    /// Reads the version metadata document of `coordinate` in `store`
    fn read_metadata(&self, store: &str, coordinate: &Coordinate)
        -> Result<Option<StoredDocument>>;

    /// Lists the file names inside the directory of one version
    fn list_version_files(
        &self,
        store: &str,
        coordinate: &Coordinate,
        version: &str,
    ) -> Result<Vec<String>>;

    /// Reads one file inside the directory of one version
    fn read_version_file(
        &self,
        store: &str,
        coordinate: &Coordinate,
        version: &str,
        file_name: &str,
    ) -> Result<Option<StoredDocument>>;
}
