//! Allergy-based safety filtering.
//!
//! Partitions a matched result list into usable and unusable halves given a
//! user allergen set. The unusable half is kept (not discarded) so callers
//! can reveal it behind an explicit opt-in, tagged and positioned apart
//! from the safe results rather than mixed in by score.

use std::collections::HashSet;

use crate::models::MatchResult;
use crate::normalize::matching_key;

/// The user's allergen set plus the master enable switch.
#[derive(Debug, Clone, Default)]
pub struct AllergyProfile {
    pub allergens: Vec<String>,
    pub enabled: bool,
}

impl AllergyProfile {
    pub fn new(allergens: Vec<String>, enabled: bool) -> Self {
        Self { allergens, enabled }
    }

    /// Filtering is active only when enabled with at least one allergen.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.allergens.is_empty()
    }

    fn allergen_keys(&self) -> HashSet<String> {
        self.allergens.iter().map(|a| matching_key(a)).filter(|k| !k.is_empty()).collect()
    }
}

/// Result lists split by allergy safety, input order preserved in both.
#[derive(Debug, Clone)]
pub struct SafetyPartition {
    pub safe: Vec<MatchResult>,
    pub unsafe_: Vec<MatchResult>,
}

impl SafetyPartition {
    pub fn filtered_count(&self) -> usize {
        self.unsafe_.len()
    }
}

/// Whether a result is usable under the given profile.
///
/// Always true when filtering is disabled. When enabled, true iff the
/// remedy's allergen set does not intersect the user's. A remedy with an
/// empty allergen set can never be filtered out.
pub fn can_use(result: &MatchResult, profile: &AllergyProfile) -> bool {
    if !profile.enabled {
        return true;
    }
    let user_keys = profile.allergen_keys();
    result
        .remedy
        .allergens
        .iter()
        .map(|a| matching_key(a))
        .all(|key| key.is_empty() || !user_keys.contains(&key))
}

/// Split results into safe and unsafe halves, preserving order.
pub fn partition_by_safety(results: Vec<MatchResult>, profile: &AllergyProfile) -> SafetyPartition {
    let (safe, unsafe_) = results.into_iter().partition(|r| can_use(r, profile));
    SafetyPartition { safe, unsafe_ }
}

/// Combined display list for a partition.
///
/// With `show_filtered`, unsafe entries come first, each tagged
/// `is_filtered`, followed by the safe entries; otherwise only the safe
/// entries are returned.
pub fn display_list(partition: SafetyPartition, show_filtered: bool) -> Vec<MatchResult> {
    let SafetyPartition { safe, unsafe_ } = partition;
    let mut list = Vec::with_capacity(safe.len() + if show_filtered { unsafe_.len() } else { 0 });
    if show_filtered {
        for mut result in unsafe_ {
            result.is_filtered = true;
            list.push(result);
        }
    }
    list.extend(safe);
    list
}
