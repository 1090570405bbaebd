/// End-to-end tests for the CLI
///
/// Every aggregation test pre-seeds the issue snapshot so no request ever
/// reaches the tracker.
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_utilities::fixtures::*;

const ROOT: &str = "org.acme:pom-acme";

fn seeded_storage() -> StorageFixture {
    let storage = StorageFixture::new();
    storage
        .metadata("releases", ROOT, &["1.0.0"], "20240101000000")
        .version_file(
            "releases",
            ROOT,
            "1.0.0",
            "pom-acme-1.0.0.pom",
            &root_manifest(ROOT, "1.0.0", &["org.acme:widget"]),
        )
        .metadata("releases", "org.acme:widget", &["1.0.0"], "20240201000000")
        .version_file(
            "releases",
            "org.acme:widget",
            "1.0.0",
            "widget-1.0.0.pom",
            &manifest(
                "org.acme:widget",
                "1.0.0",
                Some("acme/widget"),
                Some(("alice", &["support"])),
            ),
        );
    storage
}

/// A working directory with an existing cache and a seeded issue snapshot
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join(".cache");
    fs::create_dir(&cache).unwrap();
    let issues = vec![issue_item(7, "acme/widget", "2024-01-05T08:00:00Z", &["bug"])];
    fs::write(
        cache.join("issues.json"),
        serde_json::to_string(&issues).unwrap(),
    )
    .unwrap();
    dir
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("bom-status").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("bom-status")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("bom-status")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("bom-status").assert().code(2);
    }

    /// Exit code 2: issues without a query
    #[test]
    fn test_exit_code_issues_without_query() {
        cargo_bin_cmd!("bom-status").arg("issues").assert().code(2);
    }

    /// Exit code 3: the root cannot be resolved from empty storage
    #[test]
    fn test_exit_code_unresolved_root() {
        let dir = TempDir::new().unwrap();
        let storage = StorageFixture::new();

        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .arg("aggregate")
            .arg("--storage")
            .arg(storage.root())
            .args(["--root", ROOT, "--quiet"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("could not be resolved"));
    }

    /// Exit code 3: malformed root coordinate
    #[test]
    fn test_exit_code_invalid_root() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .args(["aggregate", "--root", "no-colon-here"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid component coordinate"));
    }

    /// Exit code 3: score input does not exist
    #[test]
    fn test_exit_code_missing_score_input() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .args(["score", "missing.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read file"));
    }
}

mod aggregate_tests {
    use super::*;

    #[test]
    fn test_aggregate_writes_status_document() {
        let dir = workspace();
        let storage = seeded_storage();
        let output = dir.path().join("status.json");

        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .arg("aggregate")
            .arg("--storage")
            .arg(storage.root())
            .args(["--root", ROOT, "--quiet", "-o"])
            .arg(&output)
            .assert()
            .code(0);

        let records = read_json(&output);
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 2);

        let widget = records
            .iter()
            .find(|r| r["artifact_id"] == "widget")
            .unwrap();
        assert_eq!(widget["issues"]["org"], "acme");
        assert_eq!(widget["issues"]["count"], 1);
        assert_eq!(widget["team"]["support"][0], "alice");

        // The metadata walk is cached for the next run
        assert!(dir.path().join(".cache/maven.json").exists());
    }

    #[test]
    fn test_aggregate_reuses_metadata_snapshot() {
        let dir = workspace();
        let storage = seeded_storage();

        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .arg("aggregate")
            .arg("--storage")
            .arg(storage.root())
            .args(["--root", ROOT, "--quiet"])
            .assert()
            .code(0);

        // Storage is gone; the snapshot alone must satisfy the second run
        drop(storage);
        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .args(["aggregate", "--storage", "/nonexistent/storage", "--root", ROOT, "--quiet"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"artifact_id\": \"widget\""));
    }

    #[test]
    fn test_empty_metadata_snapshot_is_fatal() {
        let dir = workspace();
        fs::write(dir.path().join(".cache/maven.json"), "[]").unwrap();

        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .args(["aggregate", "--root", ROOT, "--quiet"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Metadata snapshot is empty"));
    }
}

mod score_tests {
    use super::*;

    fn aggregate_into(dir: &Path, storage: &StorageFixture) -> std::path::PathBuf {
        let output = dir.join("status.json");
        cargo_bin_cmd!("bom-status")
            .current_dir(dir)
            .arg("aggregate")
            .arg("--storage")
            .arg(storage.root())
            .args(["--root", ROOT, "--quiet", "-o"])
            .arg(&output)
            .assert()
            .code(0);
        output
    }

    #[test]
    fn test_score_orders_and_scores_components() {
        let dir = workspace();
        let storage = seeded_storage();
        let status = aggregate_into(dir.path(), &storage);

        let output = cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .arg("score")
            .arg(&status)
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let scored: Value = serde_json::from_slice(&output).unwrap();
        let scored = scored.as_array().unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0]["sort_key"], ";org.acme:pom-acme");
        assert_eq!(scored[1]["sort_key"], "acme/widget;org.acme:widget");
        assert_eq!(scored[1]["repository"], "acme/widget");
        assert_eq!(scored[1]["developers"][0]["developer"], "alice");
        assert_eq!(scored[1]["vetting"]["source"], "release");
        assert_eq!(scored[1]["badge"]["kind"], "actions");
    }

    #[test]
    fn test_score_applies_override_files() {
        let dir = workspace();
        let storage = seeded_storage();
        let status = aggregate_into(dir.path(), &storage);

        fs::write(
            dir.path().join("timestamps.txt"),
            "# vetted by hand\norg.acme:widget 20240301000000\n",
        )
        .unwrap();
        let project_urls = dir.path().join("urls.txt");
        fs::write(&project_urls, "org.acme:widget https://widget.acme.org/\n").unwrap();

        let output = cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .arg("score")
            .arg(&status)
            .arg("--project-urls")
            .arg(&project_urls)
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let scored: Value = serde_json::from_slice(&output).unwrap();
        let widget = &scored[1];
        assert_eq!(widget["vetting"]["source"], "override");
        assert_eq!(widget["project_url"], "https://widget.acme.org/");
    }

    #[test]
    fn test_score_rejects_malformed_override_timestamp() {
        let dir = workspace();
        let storage = seeded_storage();
        let status = aggregate_into(dir.path(), &storage);
        fs::write(
            dir.path().join("timestamps.txt"),
            "org.acme:widget last-tuesday\n",
        )
        .unwrap();

        cargo_bin_cmd!("bom-status")
            .current_dir(dir.path())
            .arg("score")
            .arg(&status)
            .assert()
            .code(3);
    }
}
