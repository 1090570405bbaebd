use super::persist;
use crate::ports::outbound::MetadataProvider;
use crate::shared::error::StatusError;
use crate::shared::security::read_optional_file;
use crate::shared::Result;
use crate::status::domain::{Coordinate, ResolvedComponent};
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Caching decorator over any [`MetadataProvider`]
///
/// An existing snapshot is loaded whole instead of walking storage. A fresh
/// result is sorted by coordinate and written back when the snapshot's
/// directory exists.
pub struct SnapshotMetadataProvider<P: MetadataProvider> {
    inner: P,
    path: PathBuf,
}

impl<P: MetadataProvider> SnapshotMetadataProvider<P> {
    pub fn new(inner: P, path: PathBuf) -> Self {
        Self { inner, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<Vec<ResolvedComponent>>> {
        let Some(content) = read_optional_file(&self.path)? else {
            return Ok(None);
        };
        let components: Vec<ResolvedComponent> = serde_json::from_str(&content)
            .with_context(|| format!("Malformed metadata snapshot {}", self.path.display()))?;
        if components.is_empty() {
            return Err(StatusError::EmptySnapshot {
                path: self.path.clone(),
            }
            .into());
        }
        Ok(Some(components))
    }
}

#[async_trait]
impl<P: MetadataProvider> MetadataProvider for SnapshotMetadataProvider<P> {
    async fn resolve_components(&self, root: &Coordinate) -> Result<Vec<ResolvedComponent>> {
        if let Some(components) = self.load()? {
            log::info!(
                "Loaded {} component(s) from snapshot {}",
                components.len(),
                self.path.display()
            );
            return Ok(components);
        }

        log::debug!("No metadata snapshot at {}", self.path.display());
        let mut components = self.inner.resolve_components(root).await?;
        components.sort_by(|a, b| a.coordinate.cmp(&b.coordinate));

        if persist(&self.path, &serde_json::to_string_pretty(&components)?)? {
            log::info!("Wrote metadata snapshot {}", self.path.display());
        }
        Ok(components)
    }
}
