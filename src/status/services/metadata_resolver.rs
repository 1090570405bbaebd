use crate::ports::outbound::{RepositoryStorage, StoredDocument};
use crate::shared::Result;
use crate::status::domain::timestamp::parse_repository_timestamp;
use crate::status::domain::{ArtifactMetadata, Coordinate, ResolvedComponent};
use crate::status::services::ManifestReader;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;

const PRERELEASE_SUFFIX: &str = "-SNAPSHOT";

/// Store lists and matching tolerance for metadata resolution
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Release stores in priority order
    pub release_stores: Vec<String>,
    /// Pre-release stores in priority order
    pub prerelease_stores: Vec<String>,
    /// Maximum distance between a pre-release's recorded `lastUpdated` and
    /// the build timestamp embedded in its manifest filename
    pub timestamp_tolerance: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            release_stores: ["releases", "thirdparty", "sonatype", "central", "ome-releases"]
                .map(String::from)
                .to_vec(),
            prerelease_stores: ["snapshots", "sonatype-snapshots", "ome-snapshots"]
                .map(String::from)
                .to_vec(),
            timestamp_tolerance: Duration::seconds(10),
        }
    }
}

/// MetadataResolver - finds the best release, best pre-release and the most
/// representative manifest of a coordinate across prioritized stores
///
/// Missing stores, missing files and unparsable timestamps degrade the
/// result toward absent values. Malformed documents and I/O failures are
/// returned as errors.
pub struct MetadataResolver<S: RepositoryStorage> {
    storage: S,
    settings: ResolverSettings,
}

impl<S: RepositoryStorage> MetadataResolver<S> {
    pub fn new(storage: S, settings: ResolverSettings) -> Self {
        Self { storage, settings }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Resolves release, pre-release and manifest for one coordinate.
    ///
    /// Both store lists are always scanned before any manifest lookup. The
    /// pre-release's manifest is preferred since it reflects the current
    /// development state; the release's is the fallback.
    pub fn resolve(&self, coordinate: &Coordinate) -> Result<ResolvedComponent> {
        self.resolve_with_document(coordinate)
            .map(|(resolved, _)| resolved)
    }

    /// Like [`resolve`](Self::resolve), also returning the raw manifest
    /// document the manifest was parsed from.
    pub fn resolve_with_document(
        &self,
        coordinate: &Coordinate,
    ) -> Result<(ResolvedComponent, Option<StoredDocument>)> {
        let release = self.best_metadata(&self.settings.release_stores, coordinate)?;
        let prerelease = self.best_metadata(&self.settings.prerelease_stores, coordinate)?;

        let document = match (&prerelease, &release) {
            (Some(pre), _) => self.prerelease_manifest(coordinate, pre)?,
            (None, Some(rel)) => match rel.last_version.as_deref() {
                Some(version) => {
                    let found =
                        self.direct_manifest(&self.settings.release_stores, coordinate, version)?;
                    if found.is_none() {
                        log::warn!(
                            "{}: release {} is declared but its manifest is missing",
                            coordinate,
                            version
                        );
                    }
                    found
                }
                None => None,
            },
            (None, None) => None,
        };

        let manifest = document
            .as_ref()
            .map(|doc| ManifestReader::read_manifest(&doc.content, &doc.location))
            .transpose()?;

        let resolved = ResolvedComponent {
            coordinate: coordinate.clone(),
            release,
            prerelease,
            manifest,
        };
        Ok((resolved, document))
    }

    /// Scans `stores` in order, keeping the metadata with the newest
    /// `lastUpdated`; the earlier store wins ties.
    fn best_metadata(
        &self,
        stores: &[String],
        coordinate: &Coordinate,
    ) -> Result<Option<ArtifactMetadata>> {
        let mut best: Option<ArtifactMetadata> = None;
        for store in stores {
            let Some(doc) = self.storage.read_metadata(store, coordinate)? else {
                continue;
            };
            let candidate = ManifestReader::read_metadata(&doc.content, store, &doc.location)?;
            if best.as_ref().is_none_or(|b| candidate.supersedes(b)) {
                best = Some(candidate);
            }
        }
        Ok(best)
    }

    fn prerelease_manifest(
        &self,
        coordinate: &Coordinate,
        prerelease: &ArtifactMetadata,
    ) -> Result<Option<StoredDocument>> {
        let stores = &self.settings.prerelease_stores;
        let Some(version) = prerelease.last_version.as_deref() else {
            return Ok(None);
        };
        if !version.ends_with(PRERELEASE_SUFFIX) {
            return self.direct_manifest(stores, coordinate, version);
        }
        let Some(requested) = prerelease.last_updated else {
            log::warn!(
                "{}: pre-release {} has no lastUpdated; cannot pick its manifest",
                coordinate,
                version
            );
            return Ok(None);
        };
        self.timestamped_manifest(stores, coordinate, version, requested)
    }

    /// Finds the pre-release manifest whose filename timestamp lies within
    /// tolerance of `requested`. Nothing within tolerance means no manifest.
    fn timestamped_manifest(
        &self,
        stores: &[String],
        coordinate: &Coordinate,
        version: &str,
        requested: DateTime<Utc>,
    ) -> Result<Option<StoredDocument>> {
        let base = &version[..version.len() - PRERELEASE_SUFFIX.len()];
        let pattern = Regex::new(&format!(
            r"^{}-{}-(\d{{8}}\.\d{{6}})-\d+\.pom$",
            regex::escape(&coordinate.artifact_id),
            regex::escape(base)
        ))?;

        for store in stores {
            for file_name in self.storage.list_version_files(store, coordinate, version)? {
                let Some(caps) = pattern.captures(&file_name) else {
                    continue;
                };
                let actual = match parse_repository_timestamp(&caps[1]) {
                    Ok(ts) => ts,
                    Err(e) => {
                        log::debug!("Skipping {}: {}", file_name, e);
                        continue;
                    }
                };
                if (requested - actual).abs() > self.settings.timestamp_tolerance {
                    continue;
                }
                if let Some(doc) =
                    self.storage
                        .read_version_file(store, coordinate, version, &file_name)?
                {
                    return Ok(Some(doc));
                }
            }
        }

        log::warn!(
            "{}: no {} manifest within {}s of {}",
            coordinate,
            version,
            self.settings.timestamp_tolerance.num_seconds(),
            requested
        );
        Ok(None)
    }

    fn direct_manifest(
        &self,
        stores: &[String],
        coordinate: &Coordinate,
        version: &str,
    ) -> Result<Option<StoredDocument>> {
        let file_name = format!("{}-{}.pom", coordinate.artifact_id, version);
        for store in stores {
            if let Some(doc) = self
                .storage
                .read_version_file(store, coordinate, version, &file_name)?
            {
                return Ok(Some(doc));
            }
        }
        Ok(None)
    }
}
