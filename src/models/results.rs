use serde::{Deserialize, Serialize};

use super::remedy::RemedyRecord;

/// One matched remedy in a result list.
///
/// Results are created fresh on every matching pass. Filtering and
/// recommendation stages return new lists instead of mutating a shared one,
/// so a given query + catalog + filter set always reproduces the same
/// derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub remedy: RemedyRecord,
    /// Number of distinct query symptoms the remedy treats. Always >= 1;
    /// zero-overlap records are excluded from results entirely.
    pub match_count: usize,
    /// The query symptoms that matched, in selection order, in the display
    /// form the user entered them with.
    pub matched_symptoms: Vec<String>,
    pub is_recommended: bool,
    /// Set when the entry was excluded by allergy safety but retained for
    /// an opt-in display of filtered results.
    pub is_filtered: bool,
}

impl MatchResult {
    pub fn new(remedy: RemedyRecord, match_count: usize, matched_symptoms: Vec<String>) -> Self {
        Self { remedy, match_count, matched_symptoms, is_recommended: false, is_filtered: false }
    }
}
