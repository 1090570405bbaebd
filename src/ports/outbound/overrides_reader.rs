use crate::shared::Result;
use std::collections::HashMap;
use std::path::Path;

/// OverridesReader port for loading manually maintained `key value` files
pub trait OverridesReader {
    /// Reads the key/value pairs of one override file
    ///
    /// A missing file yields an empty map. Blank lines and `#` comments are
    /// skipped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    fn read_key_values(&self, path: &Path) -> Result<HashMap<String, String>>;
}
