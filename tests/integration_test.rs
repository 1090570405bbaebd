/// Integration tests for the application layer
mod test_utilities;

use bom_status::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use test_utilities::fixtures::*;
use test_utilities::mocks::*;

const ROOT: &str = "org.acme:pom-acme";

/// Root managing a watched component, an unwatched one and one that
/// exists nowhere.
fn acme_storage() -> StorageFixture {
    let storage = StorageFixture::new();
    storage
        .metadata("releases", ROOT, &["1.0.0"], "20240101000000")
        .version_file(
            "releases",
            ROOT,
            "1.0.0",
            "pom-acme-1.0.0.pom",
            &root_manifest(
                ROOT,
                "1.0.0",
                &["org.acme:widget", "org.acme:gadget", "org.acme:ghost"],
            ),
        )
        .metadata("releases", "org.acme:widget", &["1.0.0", "1.1.0"], "20240201000000")
        .version_file(
            "releases",
            "org.acme:widget",
            "1.1.0",
            "widget-1.1.0.pom",
            &manifest(
                "org.acme:widget",
                "1.1.0",
                Some("acme/widget"),
                Some(("alice", &["reviewer"])),
            ),
        )
        .metadata(
            "snapshots",
            "org.acme:widget",
            &["1.2.0-SNAPSHOT"],
            "20240301120000",
        )
        .version_file(
            "snapshots",
            "org.acme:widget",
            "1.2.0-SNAPSHOT",
            "widget-1.2.0-20240301.120003-3.pom",
            &manifest(
                "org.acme:widget",
                "1.2.0-SNAPSHOT",
                Some("acme/widget"),
                Some(("alice", &["support", "reviewer"])),
            ),
        )
        .metadata("releases", "org.acme:gadget", &["2.0.0"], "20230101000000")
        .version_file(
            "releases",
            "org.acme:gadget",
            "2.0.0",
            "gadget-2.0.0.pom",
            &manifest("org.acme:gadget", "2.0.0", Some("other/gadget"), None),
        );
    storage
}

fn widget_issues() -> Vec<serde_json::Value> {
    let mut pr = issue_item(2, "acme/widget", "2024-02-10T08:00:00Z", &["bug"]);
    pr["pull_request"] = json!({ "url": "https://api.github.com/repos/acme/widget/pulls/2" });
    vec![
        issue_item(1, "acme/widget", "2024-01-05T08:00:00Z", &["bug"]),
        pr,
    ]
}

fn storage_provider(storage: &StorageFixture) -> StorageMetadataProvider<FileSystemStorage> {
    let resolver = MetadataResolver::new(
        FileSystemStorage::new(storage.root().to_path_buf()),
        ResolverSettings::default(),
    );
    StorageMetadataProvider::new(resolver).with_concurrency(2)
}

fn namespace() -> TrackerNamespace {
    TrackerNamespace::new("github.com").unwrap()
}

fn root() -> Coordinate {
    ROOT.parse().unwrap()
}

fn find<'a>(records: &'a [ComponentRecord], key: &str) -> &'a ComponentRecord {
    records
        .iter()
        .find(|r| r.coordinate.key() == key)
        .unwrap_or_else(|| panic!("no record for {}", key))
}

#[tokio::test]
async fn test_aggregate_from_storage() {
    let storage = acme_storage();
    let issues = MockIssueRepository::new(widget_issues());
    let progress_reporter = MockProgressReporter::new();

    let use_case = AggregateStatusUseCase::new(
        storage_provider(&storage),
        issues.clone(),
        progress_reporter.clone(),
        namespace(),
    );
    let response = use_case.execute(StatusRequest::new(root())).await.unwrap();

    let keys: Vec<String> = response.records.iter().map(|r| r.coordinate.key()).collect();
    assert_eq!(
        keys,
        vec![ROOT, "org.acme:widget", "org.acme:gadget", "org.acme:ghost"]
    );
    assert_eq!(response.tracked_orgs, vec!["acme"]);
    assert_eq!(response.issue_count, 2);
    assert_eq!(issues.requested_orgs(), vec![vec!["acme".to_string()]]);

    // The pre-release manifest wins over the release manifest
    let widget = find(&response.records, "org.acme:widget");
    let manifest = widget.manifest.as_ref().unwrap();
    assert_eq!(manifest.version.as_deref(), Some("1.2.0-SNAPSHOT"));
    assert_eq!(widget.members("support"), ["alice".to_string()]);
    assert_eq!(
        widget.release.as_ref().unwrap().release.as_deref(),
        Some("1.1.0")
    );
    let stats = widget.issues.as_ref().unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.prs, 1);
    assert_eq!(stats.label_count("bug"), 2);

    // Tracked but unwatched: present with zero counts
    let gadget = find(&response.records, "org.acme:gadget");
    assert!(gadget.team.is_empty());
    assert_eq!(gadget.issues.as_ref().unwrap().count, 0);

    // Unknown everywhere: still reported, with nothing filled in
    let ghost = find(&response.records, "org.acme:ghost");
    assert!(ghost.release.is_none());
    assert!(ghost.manifest.is_none());
    assert!(ghost.issues.is_none());

    let last = progress_reporter.events().pop().unwrap();
    assert!(matches!(
        last,
        ProgressEvent::Completion(ref m) if m.contains("Aggregated 4 component(s) with 2 open issue(s)")
    ));
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Loading open issues for: acme")));
}

#[tokio::test]
async fn test_aggregate_then_score() {
    let storage = acme_storage();
    let use_case = AggregateStatusUseCase::new(
        storage_provider(&storage),
        MockIssueRepository::new(widget_issues()),
        MockProgressReporter::new(),
        namespace(),
    );
    let response = use_case.execute(StatusRequest::new(root())).await.unwrap();

    let scorer = ScoreComponentsUseCase::new(Overrides::new(), namespace());
    let scored = scorer.execute(&response.records);

    let order: Vec<&str> = scored.iter().map(|s| s.sort_key.as_str()).collect();
    assert_eq!(
        order,
        vec![
            ";org.acme:ghost",
            ";org.acme:pom-acme",
            "acme/widget;org.acme:widget",
            "other/gadget;org.acme:gadget",
        ]
    );

    let widget = &scored[2];
    assert_eq!(widget.repository.as_deref(), Some("acme/widget"));
    assert_eq!(
        widget.project_url.as_deref(),
        Some("https://github.com/acme/widget")
    );
    assert_eq!(widget.newest_release.as_deref(), Some("1.1.0"));
    assert!(matches!(widget.badge, Some(BuildBadge::Actions { .. })));
    assert!(widget.vetting.release_needed);
    assert_eq!(widget.developers.len(), 1);
    assert_eq!(widget.developers[0].developer, "alice");
}

#[tokio::test]
async fn test_unresolved_root_is_fatal() {
    let storage = StorageFixture::new();
    let issues = MockIssueRepository::new(Vec::new());

    let use_case = AggregateStatusUseCase::new(
        storage_provider(&storage),
        issues.clone(),
        MockProgressReporter::new(),
        namespace(),
    );
    let err = use_case
        .execute(StatusRequest::new(root()))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("org.acme:pom-acme"));
    assert!(err.to_string().contains("could not be resolved"));
    assert!(issues.requested_orgs().is_empty());
}

#[tokio::test]
async fn test_no_watched_orgs_skips_issue_download() {
    let storage = StorageFixture::new();
    storage
        .metadata("releases", ROOT, &["1.0.0"], "20240101000000")
        .version_file(
            "releases",
            ROOT,
            "1.0.0",
            "pom-acme-1.0.0.pom",
            &root_manifest(ROOT, "1.0.0", &["org.acme:gadget"]),
        )
        .metadata("releases", "org.acme:gadget", &["2.0.0"], "20230101000000")
        .version_file(
            "releases",
            "org.acme:gadget",
            "2.0.0",
            "gadget-2.0.0.pom",
            &manifest("org.acme:gadget", "2.0.0", Some("other/gadget"), None),
        );
    let issues = MockIssueRepository::new(Vec::new());

    let use_case = AggregateStatusUseCase::new(
        storage_provider(&storage),
        issues.clone(),
        MockProgressReporter::new(),
        namespace(),
    );
    let response = use_case.execute(StatusRequest::new(root())).await.unwrap();

    assert!(response.tracked_orgs.is_empty());
    assert_eq!(response.issue_count, 0);
    assert!(issues.requested_orgs().is_empty());
}

#[tokio::test]
async fn test_issue_failure_propagates() {
    let storage = acme_storage();
    let use_case = AggregateStatusUseCase::new(
        storage_provider(&storage),
        MockIssueRepository::with_failure(),
        MockProgressReporter::new(),
        namespace(),
    );

    let err = use_case
        .execute(StatusRequest::new(root()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Mock issue repository failure"));
}

#[tokio::test]
async fn test_snapshots_replace_storage_and_tracker() {
    let cache_dir = TempDir::new().unwrap();
    let metadata_snapshot: PathBuf = cache_dir.path().join("maven.json");
    let issue_snapshot: PathBuf = cache_dir.path().join("issues.json");

    let storage = acme_storage();
    let first = AggregateStatusUseCase::new(
        SnapshotMetadataProvider::new(storage_provider(&storage), metadata_snapshot.clone()),
        SnapshotIssueRepository::new(
            MockIssueRepository::new(widget_issues()),
            issue_snapshot.clone(),
        ),
        MockProgressReporter::new(),
        namespace(),
    )
    .execute(StatusRequest::new(root()))
    .await
    .unwrap();
    assert!(metadata_snapshot.exists());
    assert!(issue_snapshot.exists());

    // Empty storage and tracker: everything must come from the snapshots
    let empty_storage = StorageFixture::new();
    let tracker = MockIssueRepository::new(Vec::new());
    let second = AggregateStatusUseCase::new(
        SnapshotMetadataProvider::new(storage_provider(&empty_storage), metadata_snapshot),
        SnapshotIssueRepository::new(tracker.clone(), issue_snapshot),
        MockProgressReporter::new(),
        namespace(),
    )
    .execute(StatusRequest::new(root()))
    .await
    .unwrap();

    assert!(tracker.requested_orgs().is_empty());
    assert_eq!(second.issue_count, 2);
    assert_eq!(second.records.len(), first.records.len());
    for record in &first.records {
        assert_eq!(find(&second.records, &record.coordinate.key()), record);
    }
}
