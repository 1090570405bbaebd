use crate::application::dto::OverrideFiles;
use crate::application::read_models::ScoredComponent;
use crate::ports::outbound::OverridesReader;
use crate::shared::Result;
use crate::status::domain::{ComponentRecord, Overrides};
use crate::status::policies::TrackerNamespace;

/// ScoreComponentsUseCase - turns merged records into ranked report rows
///
/// Scores every record with the override data and orders the rows by
/// component sort key, which groups components of one repository together.
pub struct ScoreComponentsUseCase {
    overrides: Overrides,
    namespace: TrackerNamespace,
}

impl ScoreComponentsUseCase {
    pub fn new(overrides: Overrides, namespace: TrackerNamespace) -> Self {
        Self {
            overrides,
            namespace,
        }
    }

    /// Builds the use case from override files; missing files are empty.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or a vetted timestamp is
    /// malformed.
    pub fn from_override_files<R: OverridesReader>(
        reader: &R,
        files: &OverrideFiles,
        namespace: TrackerNamespace,
    ) -> Result<Self> {
        let overrides = Overrides::new()
            .with_badges(reader.read_key_values(&files.badges)?)
            .with_project_urls(reader.read_key_values(&files.project_urls)?)
            .with_vetted_timestamps(reader.read_key_values(&files.timestamps)?)?;
        Ok(Self::new(overrides, namespace))
    }

    pub fn execute(&self, records: &[ComponentRecord]) -> Vec<ScoredComponent> {
        let mut scored: Vec<ScoredComponent> = records
            .iter()
            .map(|r| ScoredComponent::from_record(r, &self.overrides, &self.namespace))
            .collect();
        scored.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
        scored
    }
}
