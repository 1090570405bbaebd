//! Configuration file support for bom-status.
//!
//! Provides YAML-based configuration through `bom-status.config.yml` files,
//! including data structures, file loading, validation, and the resolved
//! settings every command runs with.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::filesystem::DEFAULT_CONCURRENCY;
use crate::adapters::outbound::network::SearchSettings;
use crate::application::dto::OverrideFiles;
use crate::shared::Result;
use crate::status::domain::Coordinate;
use crate::status::services::ResolverSettings;

pub const CONFIG_FILENAME: &str = "bom-status.config.yml";

const DEFAULT_STORAGE_ROOT: &str = "/opt/sonatype-work/nexus/storage";
const DEFAULT_ROOT: &str = "org.scijava:pom-scijava";
const DEFAULT_CACHE_DIR: &str = ".cache";
const DEFAULT_TRACKER_HOST: &str = "github.com";
const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub storage_root: Option<PathBuf>,
    pub release_stores: Option<Vec<String>>,
    pub prerelease_stores: Option<Vec<String>>,
    pub snapshot_tolerance_secs: Option<u64>,
    /// Root component as `groupId:artifactId`
    pub root: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub concurrency: Option<usize>,
    pub tracker: Option<TrackerConfig>,
    pub overrides: Option<OverridesConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Issue-tracker section.
#[derive(Debug, Deserialize, Default)]
pub struct TrackerConfig {
    pub api_base: Option<String>,
    pub host: Option<String>,
    pub request_delay_secs: Option<u64>,
    pub max_requests: Option<usize>,
    /// Name of the environment variable holding the API token
    pub token_env: Option<String>,
    pub user_agent: Option<String>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Override file locations.
#[derive(Debug, Deserialize, Default)]
pub struct OverridesConfig {
    pub badges: Option<PathBuf>,
    pub timestamps: Option<PathBuf>,
    pub project_urls: Option<PathBuf>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, stores) in [
        ("release_stores", &config.release_stores),
        ("prerelease_stores", &config.prerelease_stores),
    ] {
        if let Some(stores) = stores {
            if stores.is_empty() || stores.iter().any(|s| s.trim().is_empty()) {
                bail!(
                    "Invalid config: {} must list at least one non-empty store name.\n\n\
                     💡 Hint: Remove the field to use the default stores.",
                    field
                );
            }
        }
    }

    if let Some(root) = &config.root {
        root.parse::<Coordinate>().with_context(|| {
            format!(
                "Invalid config: root '{}' is not a groupId:artifactId coordinate.",
                root
            )
        })?;
    }

    if config.concurrency == Some(0) {
        bail!("Invalid config: concurrency must be at least 1.");
    }

    if let Some(tracker) = &config.tracker {
        if tracker.max_requests == Some(0) {
            bail!(
                "Invalid config: tracker.max_requests must be at least 1.\n\n\
                 💡 Hint: The default is 100 page requests per download."
            );
        }
        if let Some(host) = &tracker.host {
            if host.trim().is_empty() || host.contains('/') {
                bail!(
                    "Invalid config: tracker.host must be a bare host name (e.g., \"github.com\"), got '{}'.",
                    host
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let nested_tracker = config
        .tracker
        .iter()
        .flat_map(|t| t.unknown_fields.keys().map(move |k| format!("tracker.{}", k)));
    let nested_overrides = config
        .overrides
        .iter()
        .flat_map(|o| o.unknown_fields.keys().map(move |k| format!("overrides.{}", k)));

    for key in config
        .unknown_fields
        .keys()
        .cloned()
        .chain(nested_tracker)
        .chain(nested_overrides)
    {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Fully resolved settings: config file values over built-in defaults.
///
/// Built once at startup and passed by reference; command-line flags are
/// applied on top by the caller.
#[derive(Debug, Clone)]
pub struct Settings {
    pub storage_root: PathBuf,
    pub resolver: ResolverSettings,
    pub root: Coordinate,
    pub cache_dir: PathBuf,
    pub concurrency: usize,
    pub search: SearchSettings,
    pub tracker_host: String,
    pub token_env: String,
    pub user_agent: String,
    pub override_files: OverrideFiles,
}

impl Settings {
    pub fn from_config(config: ConfigFile) -> Result<Self> {
        let resolver_defaults = ResolverSettings::default();
        let search_defaults = SearchSettings::default();
        let override_defaults = OverrideFiles::default();
        let tracker = config.tracker.unwrap_or_default();
        let overrides = config.overrides.unwrap_or_default();

        let root = config
            .root
            .as_deref()
            .unwrap_or(DEFAULT_ROOT)
            .parse::<Coordinate>()?;

        Ok(Self {
            storage_root: config
                .storage_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_ROOT)),
            resolver: ResolverSettings {
                release_stores: config
                    .release_stores
                    .unwrap_or(resolver_defaults.release_stores),
                prerelease_stores: config
                    .prerelease_stores
                    .unwrap_or(resolver_defaults.prerelease_stores),
                timestamp_tolerance: config
                    .snapshot_tolerance_secs
                    .and_then(|secs| i64::try_from(secs).ok())
                    .map(chrono::Duration::seconds)
                    .unwrap_or(resolver_defaults.timestamp_tolerance),
            },
            root,
            cache_dir: config
                .cache_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            concurrency: config.concurrency.unwrap_or(DEFAULT_CONCURRENCY),
            search: SearchSettings {
                api_base: tracker
                    .api_base
                    .map(|base| base.trim_end_matches('/').to_string())
                    .unwrap_or(search_defaults.api_base),
                request_delay: tracker
                    .request_delay_secs
                    .map(Duration::from_secs)
                    .unwrap_or(search_defaults.request_delay),
                max_requests: tracker.max_requests.unwrap_or(search_defaults.max_requests),
            },
            tracker_host: tracker
                .host
                .unwrap_or_else(|| DEFAULT_TRACKER_HOST.to_string()),
            token_env: tracker
                .token_env
                .unwrap_or_else(|| DEFAULT_TOKEN_ENV.to_string()),
            user_agent: tracker
                .user_agent
                .unwrap_or_else(|| format!("bom-status/{}", env!("CARGO_PKG_VERSION"))),
            override_files: OverrideFiles {
                badges: overrides.badges.unwrap_or(override_defaults.badges),
                timestamps: overrides.timestamps.unwrap_or(override_defaults.timestamps),
                project_urls: overrides
                    .project_urls
                    .unwrap_or(override_defaults.project_urls),
            },
        })
    }

    pub fn metadata_snapshot(&self) -> PathBuf {
        self.cache_dir.join("maven.json")
    }

    pub fn issue_snapshot(&self) -> PathBuf {
        self.cache_dir.join("issues.json")
    }

    /// The tracker token from the configured environment variable, if set
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env).ok().filter(|t| !t.is_empty())
    }
}
