use crate::application::dto::{StatusRequest, StatusResponse};
use crate::ports::outbound::{IssueRepository, MetadataProvider, ProgressReporter};
use crate::shared::error::StatusError;
use crate::shared::Result;
use crate::status::domain::{ComponentRecord, IssueSet, IssueStats, ResolvedComponent};
use crate::status::policies::TrackerNamespace;
use crate::status::services::IssueStatistics;
use std::collections::BTreeSet;


/// AggregateStatusUseCase - Core use case merging metadata and issue data
///
/// Resolves the component collection, derives each component's team and
/// tracker repository, runs one combined issue query for every watched
/// org, and reduces the result to per-component issue statistics.
///
/// # Type Parameters
/// * `MP` - MetadataProvider implementation
/// * `IR` - IssueRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AggregateStatusUseCase<MP, IR, PR> {
    metadata_provider: MP,
    issue_repository: IR,
    progress_reporter: PR,
    namespace: TrackerNamespace,
}

impl<MP, IR, PR> AggregateStatusUseCase<MP, IR, PR>
where
    MP: MetadataProvider,
    IR: IssueRepository,
    PR: ProgressReporter,
{
    pub fn new(
        metadata_provider: MP,
        issue_repository: IR,
        progress_reporter: PR,
        namespace: TrackerNamespace,
    ) -> Self {
        Self {
            metadata_provider,
            issue_repository,
            progress_reporter,
            namespace,
        }
    }

    /// Executes the aggregation
    ///
    /// # Errors
    /// Returns an error if the root component cannot be resolved, a
    /// document is malformed, or storage or the tracker cannot be reached.
    pub async fn execute(&self, request: StatusRequest) -> Result<StatusResponse> {
        let resolved = self.resolve_components(&request).await?;

        let mut records: Vec<ComponentRecord> =
            resolved.into_iter().map(ComponentRecord::from).collect();
        for record in &mut records {
            record.derive_team();
            record.issues = self.tracker_repo(record);
        }

        let orgs = Self::watched_orgs(&records);
        let issues = self.fetch_issues(&orgs).await?;

        for record in &mut records {
            if let Some(stats) = record.issues.take() {
                record.issues = Some(IssueStatistics::summarize(&stats.org, &stats.repo, &issues)?);
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Aggregated {} component(s) with {} open issue(s)",
            records.len(),
            issues.len()
        ));
        Ok(StatusResponse::new(records, orgs, issues.len()))
    }

    async fn resolve_components(&self, request: &StatusRequest) -> Result<Vec<ResolvedComponent>> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving components managed by {}",
            request.root
        ));
        let resolved = self
            .metadata_provider
            .resolve_components(&request.root)
            .await?;

        // A reloaded snapshot may describe a root that no longer resolves.
        let root_resolved = resolved
            .iter()
            .any(|c| c.coordinate == request.root && !c.is_unresolved());
        if !root_resolved {
            return Err(StatusError::RootUnresolved {
                coordinate: request.root.to_string(),
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("✅ Resolved {} component(s)", resolved.len()));
        Ok(resolved)
    }

    /// The tracker repository a record's manifest points at, as empty stats
    fn tracker_repo(&self, record: &ComponentRecord) -> Option<IssueStats> {
        let url = record.manifest.as_ref()?.issues_url.as_deref()?;
        let (org, repo) = self.namespace.issues_repo(url)?;
        Some(IssueStats::new(org, repo))
    }

    /// Orgs of tracked components somebody reviews or supports, sorted
    fn watched_orgs(records: &[ComponentRecord]) -> Vec<String> {
        records
            .iter()
            .filter(|r| r.is_watched())
            .filter_map(|r| r.issues.as_ref().map(|s| s.org.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    async fn fetch_issues(&self, orgs: &[String]) -> Result<IssueSet> {
        if orgs.is_empty() {
            self.progress_reporter
                .report("ℹ️  No watched tracker orgs; skipping issue download");
            return Ok(IssueSet::new());
        }
        self.progress_reporter
            .report(&format!("📥 Loading open issues for: {}", orgs.join(", ")));
        let issues = self.issue_repository.fetch_open_issues(orgs).await?;
        self.progress_reporter
            .report(&format!("✅ Retrieved {} issue(s)", issues.len()));
        Ok(issues)
    }
}
