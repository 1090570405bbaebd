use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Release and maintenance status for a managed component collection
#[derive(Parser, Debug)]
#[command(name = "bom-status")]
#[command(version)]
#[command(
    about = "Aggregate repository metadata and issue-tracker data into per-component status records",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./bom-status.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every managed component and merge in open-issue statistics
    Aggregate(AggregateArgs),
    /// Score an aggregate status document using the override files
    Score(ScoreArgs),
    /// Download every open issue matching a search query
    Issues(IssuesArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct AggregateArgs {
    /// Root of the repository manager's storage
    #[arg(short, long, value_name = "DIR")]
    pub storage: Option<PathBuf>,

    /// Root component whose managed dependencies form the collection (groupId:artifactId)
    #[arg(short, long, value_name = "COORDINATE")]
    pub root: Option<String>,

    /// Directory for metadata and issue snapshots; nothing is cached if it does not exist
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Number of components resolved concurrently
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(usize))]
    pub concurrency: Option<usize>,

    /// Abort the run after this many seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct ScoreArgs {
    /// Aggregate status document produced by `bom-status aggregate`
    #[arg(value_name = "AGGREGATE_JSON")]
    pub input: PathBuf,

    /// Badge overrides file (`org/repo html` per line)
    #[arg(long, value_name = "FILE")]
    pub badges: Option<PathBuf>,

    /// Vetted-timestamp overrides file (`groupId:artifactId YYYYMMDDhhmmss` per line)
    #[arg(long, value_name = "FILE")]
    pub timestamps: Option<PathBuf>,

    /// Project-URL overrides file (`groupId:artifactId url` per line)
    #[arg(long, value_name = "FILE")]
    pub project_urls: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct IssuesArgs {
    /// Search terms, e.g. `user:acme label:bug`
    #[arg(required = true, value_name = "TERM")]
    pub query: Vec<String>,

    /// Abort the download after this many seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
