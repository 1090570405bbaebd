/// Filesystem adapters for repository storage and local file I/O
mod file_reader;
mod file_storage;
mod file_writer;
mod storage_metadata_provider;

pub use file_reader::FileSystemReader;
pub use file_storage::FileSystemStorage;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use storage_metadata_provider::{StorageMetadataProvider, DEFAULT_CONCURRENCY};
