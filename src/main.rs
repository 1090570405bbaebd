mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod shared;
mod status;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemStorage, StorageMetadataProvider};
use adapters::outbound::network::{GitHubIssueClient, HttpSearchPageFetcher};
use adapters::outbound::snapshot::{SnapshotIssueRepository, SnapshotMetadataProvider};
use anyhow::Context;
use application::dto::StatusRequest;
use application::factories::{PresenterFactory, PresenterType};
use application::use_cases::{AggregateStatusUseCase, ScoreComponentsUseCase};
use cli::{AggregateArgs, Args, Command, IssuesArgs, ScoreArgs};
use config::{discover_config, load_config_from_path, ConfigFile, Settings};
use shared::error::{ExitCode, StatusError};
use shared::Result;
use status::domain::{ComponentRecord, Coordinate};
use status::policies::TrackerNamespace;
use status::services::MetadataResolver;
use std::future::Future;
use std::path::Path;
use std::process;
use std::time::Duration;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;

    let output = match args.command {
        Command::Aggregate(aggregate) => {
            let settings = apply_aggregate_flags(settings, &aggregate)?;
            let timeout = aggregate.timeout;
            let root = match aggregate.root.as_deref() {
                Some(root) => root.parse::<Coordinate>()?,
                None => settings.root.clone(),
            };
            block_on(with_timeout(timeout, run_aggregate(&settings, root, args.quiet)))??
        }
        Command::Score(score) => run_score(settings, score)?,
        Command::Issues(issues) => {
            let timeout = issues.timeout;
            block_on(with_timeout(timeout, run_issues(&settings, issues)))??
        }
    };

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&output)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise a config in the working
/// directory is used when present.
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let config = match config_path {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_else(ConfigFile::default),
    };
    Settings::from_config(config)
}

fn apply_aggregate_flags(mut settings: Settings, flags: &AggregateArgs) -> Result<Settings> {
    if let Some(storage) = &flags.storage {
        settings.storage_root = storage.clone();
    }
    if let Some(cache_dir) = &flags.cache_dir {
        settings.cache_dir = cache_dir.clone();
    }
    if let Some(concurrency) = flags.concurrency {
        if concurrency == 0 {
            return Err(StatusError::Validation {
                message: "--concurrency must be at least 1".to_string(),
            }
            .into());
        }
        settings.concurrency = concurrency;
    }
    Ok(settings)
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    Ok(runtime.block_on(future))
}

async fn with_timeout<T>(seconds: Option<u64>, future: impl Future<Output = Result<T>>) -> Result<T> {
    match seconds {
        Some(seconds) => tokio::time::timeout(Duration::from_secs(seconds), future)
            .await
            .map_err(|_| StatusError::Timeout { seconds })?,
        None => future.await,
    }
}

fn issue_client(settings: &Settings) -> Result<GitHubIssueClient<HttpSearchPageFetcher>> {
    let token = settings.token();
    if token.is_none() {
        log::info!(
            "{} is not set; tracker requests are unauthenticated",
            settings.token_env
        );
    }
    let fetcher = HttpSearchPageFetcher::new(&settings.user_agent, token)?;
    Ok(GitHubIssueClient::new(fetcher, settings.search.clone()))
}

async fn run_aggregate(settings: &Settings, root: Coordinate, quiet: bool) -> Result<String> {
    let namespace = TrackerNamespace::new(&settings.tracker_host)?;

    let storage = FileSystemStorage::new(settings.storage_root.clone());
    let resolver = MetadataResolver::new(storage, settings.resolver.clone());
    let metadata_provider = SnapshotMetadataProvider::new(
        StorageMetadataProvider::new(resolver)
            .with_concurrency(settings.concurrency)
            .with_progress(!quiet),
        settings.metadata_snapshot(),
    );
    let issue_repository = SnapshotIssueRepository::new(issue_client(settings)?, settings.issue_snapshot());
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = AggregateStatusUseCase::new(
        metadata_provider,
        issue_repository,
        progress_reporter,
        namespace,
    );
    let response = use_case.execute(StatusRequest::new(root)).await?;
    response.to_json()
}

fn run_score(settings: Settings, flags: ScoreArgs) -> Result<String> {
    let reader = FileSystemReader::new();
    let content = reader.read_required(&flags.input)?;
    let records: Vec<ComponentRecord> = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse aggregate status document: {}\n\n💡 Hint: Pass the output of `bom-status aggregate`.",
            flags.input.display()
        )
    })?;

    let mut files = settings.override_files;
    if let Some(badges) = flags.badges {
        files.badges = badges;
    }
    if let Some(timestamps) = flags.timestamps {
        files.timestamps = timestamps;
    }
    if let Some(project_urls) = flags.project_urls {
        files.project_urls = project_urls;
    }

    let namespace = TrackerNamespace::new(&settings.tracker_host)?;
    let use_case = ScoreComponentsUseCase::from_override_files(&reader, &files, namespace)?;
    let scored = use_case.execute(&records);
    Ok(serde_json::to_string_pretty(&scored)?)
}

async fn run_issues(settings: &Settings, flags: IssuesArgs) -> Result<String> {
    let client = issue_client(settings)?;
    let issues = client.download(&flags.query).await?;
    log::info!("Downloaded {} issue(s)", issues.len());
    issues.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_settings_missing_explicit_config() {
        let result = load_settings(Some(Path::new("/nonexistent/bom-status.config.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_settings_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        std::fs::write(&path, "concurrency: 2\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.concurrency, 2);
    }

    #[test]
    fn test_aggregate_flags_override_settings() {
        let settings = Settings::from_config(ConfigFile::default()).unwrap();
        let flags = AggregateArgs {
            storage: Some(PathBuf::from("/srv/storage")),
            cache_dir: Some(PathBuf::from("/tmp/cache")),
            concurrency: Some(3),
            ..Default::default()
        };

        let settings = apply_aggregate_flags(settings, &flags).unwrap();
        assert_eq!(settings.storage_root, PathBuf::from("/srv/storage"));
        assert_eq!(settings.issue_snapshot(), PathBuf::from("/tmp/cache/issues.json"));
        assert_eq!(settings.concurrency, 3);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let settings = Settings::from_config(ConfigFile::default()).unwrap();
        let flags = AggregateArgs {
            concurrency: Some(0),
            ..Default::default()
        };
        assert!(apply_aggregate_flags(settings, &flags).is_err());
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result: Result<()> = with_timeout(Some(0), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("did not finish within 0 seconds"));
    }

    #[tokio::test]
    async fn test_with_timeout_passes_result_through() {
        let result = with_timeout(None, async { Ok(42) }).await.unwrap();
        assert_eq!(result, 42);
    }
}
