use crate::status::domain::timestamp::BEGINNING_OF_TIME;
use crate::status::domain::{
    ComponentRecord, Developer, Overrides, NO_MILESTONE, ROLE_MAINTAINER, ROLE_REVIEWER,
    ROLE_SUPPORT,
};

/// Maintenance score of a component nothing has ever vetted
pub const NEVER_VETTED_SCORE: u64 = 9_999_999_999_999;

const REVIEW_WEIGHT: u64 = 1000;
const OPEN_ISSUE_WEIGHT: u64 = 10;
const BUG_WEIGHT: u64 = 100;
const NO_MILESTONE_WEIGHT: u64 = 25;

/// ScoringEngine - role-scoped attention priorities for one component
///
/// Every score is a non-negative integer; larger means more urgent.
/// Components without issue statistics score zero for review and support.
pub struct ScoringEngine;

impl ScoringEngine {
    /// 1000 per open pull request that is not a draft
    pub fn review_score(record: &ComponentRecord) -> u64 {
        let Some(stats) = &record.issues else {
            return 0;
        };
        REVIEW_WEIGHT * stats.prs.saturating_sub(stats.drafts)
    }

    /// 10 per open non-question issue, plus 100 per bug and 25 per issue
    /// without a milestone
    pub fn support_score(record: &ComponentRecord) -> u64 {
        let Some(stats) = &record.issues else {
            return 0;
        };
        OPEN_ISSUE_WEIGHT * stats.count.saturating_sub(stats.label_count("question"))
            + BUG_WEIGHT * stats.label_count("bug")
            + NO_MILESTONE_WEIGHT * stats.milestone_count(NO_MILESTONE)
    }

    /// Seconds between the last vetting and the latest pre-release update.
    ///
    /// Returns [`NEVER_VETTED_SCORE`] when neither release metadata nor a
    /// manual override exists.
    pub fn maintenance_score(record: &ComponentRecord, overrides: &Overrides) -> u64 {
        let released = record
            .release
            .as_ref()
            .and_then(|m| m.last_updated)
            .unwrap_or(BEGINNING_OF_TIME);
        let overridden = overrides
            .vetted_timestamp(&record.coordinate)
            .unwrap_or(BEGINNING_OF_TIME);
        let last_vetted = released.max(overridden);
        if last_vetted == BEGINNING_OF_TIME {
            return NEVER_VETTED_SCORE;
        }

        let last_updated = record
            .prerelease
            .as_ref()
            .and_then(|m| m.last_updated)
            .unwrap_or(BEGINNING_OF_TIME);
        u64::try_from((last_updated - last_vetted).num_seconds()).unwrap_or(0)
    }

    /// Sum of the scores for the roles `developer` holds on this component.
    ///
    /// `None` when the developer holds none of reviewer, support or
    /// maintainer; such developers are left out rather than scored zero.
    pub fn developer_score(
        record: &ComponentRecord,
        developer: &Developer,
        overrides: &Overrides,
    ) -> Option<u64> {
        let reviewer = developer.has_role(ROLE_REVIEWER);
        let support = developer.has_role(ROLE_SUPPORT);
        let maintainer = developer.has_role(ROLE_MAINTAINER);
        if !reviewer && !support && !maintainer {
            return None;
        }

        let mut total = 0;
        if reviewer {
            total += Self::review_score(record);
        }
        if support {
            total += Self::support_score(record);
        }
        if maintainer {
            total = total.saturating_add(Self::maintenance_score(record, overrides));
        }
        Some(total)
    }
}
