//! Recommendation selection.
//!
//! Exactly one non-filtered entry of the final display list is marked
//! recommended (zero when the list is empty or fully filtered). The flag is
//! recomputed from scratch after every filtering pass; there is no sticky
//! state, so when a tag change removes the previously recommended remedy
//! the recommendation moves to the new first eligible entry in the same
//! pass.

use crate::models::MatchResult;

/// Reassign the recommended flag over a final display list.
pub fn select_recommendation(results: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut recommended_assigned = false;
    results
        .into_iter()
        .map(|mut result| {
            result.is_recommended = !recommended_assigned && !result.is_filtered;
            if result.is_recommended {
                recommended_assigned = true;
            }
            result
        })
        .collect()
}
