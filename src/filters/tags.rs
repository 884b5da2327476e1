//! Tag-based property filtering.
//!
//! Each toggle is an independent predicate over the remedy record; a record
//! must satisfy all active toggles to remain (logical AND). An inactive
//! toggle imposes no constraint. The transform is pure and idempotent, and
//! leaves `match_count` / `matched_symptoms` untouched.

use crate::models::{MatchResult, RemedyRecord};

/// Independent boolean predicate toggles over remedy properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFilterSet {
    /// Keep only remedies known safe during pregnancy.
    pub pregnancy_safe_only: bool,
    /// Keep only remedies verified by a health professional.
    pub verified_only: bool,
    /// Keep only remedies suitable for a child of this age.
    pub suitable_for_age: Option<u8>,
}

impl AppliedFilterSet {
    pub fn is_empty(&self) -> bool {
        !self.pregnancy_safe_only && !self.verified_only && self.suitable_for_age.is_none()
    }

    /// Whether a record satisfies every active toggle. Unknown values
    /// (`None`) fail the corresponding active toggle.
    pub fn matches(&self, remedy: &RemedyRecord) -> bool {
        if self.pregnancy_safe_only && remedy.pregnancy_safe != Some(true) {
            return false;
        }
        if self.verified_only && !remedy.verified_by_professional {
            return false;
        }
        if let Some(age) = self.suitable_for_age {
            match remedy.children_minimum_age {
                Some(minimum) if minimum <= age => {}
                _ => return false,
            }
        }
        true
    }
}

/// Narrow a result list to the records satisfying every active toggle.
pub fn apply_tag_filters(
    results: Vec<MatchResult>,
    filters: &AppliedFilterSet,
) -> Vec<MatchResult> {
    if filters.is_empty() {
        return results;
    }
    results.into_iter().filter(|r| filters.matches(&r.remedy)).collect()
}
