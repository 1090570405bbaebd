use crate::shared::Result;
use crate::status::domain::{Coordinate, ResolvedComponent};
use async_trait::async_trait;

/// MetadataProvider port for obtaining the resolved component collection
///
/// Implementations either walk repository storage starting from the root
/// manifest or reload a persisted snapshot of an earlier walk.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolves every component managed by `root`, the root included
    ///
    /// # Errors
    /// Returns an error if:
    /// - The root has no metadata in any store and no manifest
    /// - A repository document is malformed
    /// - Storage cannot be read
    async fn resolve_components(&self, root: &Coordinate) -> Result<Vec<ResolvedComponent>>;
}
