//! Remedy matching and ranking.
//!
//! Matching is set intersection on canonical keys only: no fuzzy or partial
//! credit is given for near-matches. A remedy with zero symptom overlap is
//! never returned, not even with score 0. Results are ranked by the number
//! of distinct matched symptoms; ties keep catalog order (the sort is
//! stable, so re-running on an unchanged catalog and query reproduces the
//! same ordering byte for byte).

use std::collections::HashSet;

use crate::models::{MatchResult, RemedyRecord};
use crate::normalize::{display_form, matching_key, matching_keys};

/// Match a user symptom list against the catalog.
///
/// `symptoms` are display-form strings in selection order; the query is
/// deduplicated under matching keys before scoring. An empty query returns
/// an empty list without touching the catalog.
///
/// Each returned [`MatchResult`] carries the user-entered spellings of the
/// symptoms that matched, in selection order, one per distinct key.
pub fn find_matches(symptoms: &[String], catalog: &[RemedyRecord]) -> Vec<MatchResult> {
    let query_keys = matching_keys(symptoms);
    if query_keys.is_empty() {
        return Vec::new();
    }

    // First user-entered spelling for each distinct key, in selection order.
    let mut query_displays: Vec<(String, String)> = Vec::with_capacity(query_keys.len());
    for symptom in symptoms {
        let key = matching_key(symptom);
        if !key.is_empty() && !query_displays.iter().any(|(k, _)| *k == key) {
            query_displays.push((key, display_form(symptom)));
        }
    }

    let mut results = Vec::new();
    for remedy in catalog {
        let remedy_keys: HashSet<String> =
            remedy.symptoms.iter().map(|s| matching_key(s)).filter(|k| !k.is_empty()).collect();

        let matched_symptoms: Vec<String> = query_displays
            .iter()
            .filter(|(key, _)| remedy_keys.contains(key))
            .map(|(_, display)| display.clone())
            .collect();

        if matched_symptoms.is_empty() {
            continue;
        }

        let match_count = matched_symptoms.len();
        results.push(MatchResult::new(remedy.clone(), match_count, matched_symptoms));
    }

    // Stable sort: equal scores keep catalog order.
    results.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    results
}
