use crate::ports::outbound::{MetadataProvider, RepositoryStorage};
use crate::shared::error::StatusError;
use crate::shared::Result;
use crate::status::domain::{Coordinate, ResolvedComponent};
use crate::status::services::{ManifestReader, MetadataResolver};
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::sync::Arc;

/// Default number of coordinates resolved at the same time
pub const DEFAULT_CONCURRENCY: usize = 8;

/// StorageMetadataProvider adapter walking repository storage from the root
///
/// Resolves the root first, reads the managed dependencies declared in its
/// manifest and then resolves every one of them with bounded parallelism.
/// Storage access is blocking file I/O, so each resolution runs on the
/// blocking thread pool.
pub struct StorageMetadataProvider<S: RepositoryStorage + 'static> {
    resolver: Arc<MetadataResolver<S>>,
    concurrency: usize,
    show_progress: bool,
}

impl<S: RepositoryStorage + 'static> StorageMetadataProvider<S> {
    pub fn new(resolver: MetadataResolver<S>) -> Self {
        Self {
            resolver: Arc::new(resolver),
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: false,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb
    }

    /// Root first, then managed dependencies in declaration order, each
    /// coordinate once.
    fn coordinate_list(root: &Coordinate, managed: Vec<Coordinate>) -> Vec<Coordinate> {
        let mut seen = HashSet::new();
        std::iter::once(root.clone())
            .chain(managed)
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }
}

#[async_trait]
impl<S: RepositoryStorage + 'static> MetadataProvider for StorageMetadataProvider<S> {
    async fn resolve_components(&self, root: &Coordinate) -> Result<Vec<ResolvedComponent>> {
        let resolver = Arc::clone(&self.resolver);
        let root_coordinate = root.clone();
        let (root_resolved, root_document) =
            tokio::task::spawn_blocking(move || resolver.resolve_with_document(&root_coordinate))
                .await??;

        if root_resolved.is_unresolved() {
            return Err(StatusError::RootUnresolved {
                coordinate: root.to_string(),
            }
            .into());
        }

        let managed = match &root_document {
            Some(doc) => ManifestReader::managed_dependencies(
                &doc.content,
                &doc.location,
                &root.group_id,
            )?,
            None => {
                log::warn!(
                    "{}: no root manifest found; resolving the root component only",
                    root
                );
                Vec::new()
            }
        };

        let coordinates = Self::coordinate_list(root, managed);
        log::info!("Resolving {} component(s) from {}", coordinates.len(), root);

        let pb = self.progress_bar(coordinates.len());
        pb.inc(1);

        let others: Vec<ResolvedComponent> = stream::iter(coordinates.into_iter().skip(1))
            .map(|coordinate| {
                let resolver = Arc::clone(&self.resolver);
                let pb = pb.clone();
                async move {
                    pb.set_message(coordinate.to_string());
                    let resolved =
                        tokio::task::spawn_blocking(move || resolver.resolve(&coordinate))
                            .await??;
                    pb.inc(1);
                    Ok::<_, anyhow::Error>(resolved)
                }
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        pb.finish_and_clear();

        let mut components = Vec::with_capacity(others.len() + 1);
        components.push(root_resolved);
        components.extend(others);
        Ok(components)
    }
}
