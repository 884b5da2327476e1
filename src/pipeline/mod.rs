//! Search submission orchestration.
//!
//! The matching pipeline is a chain of pure transforms over immutable
//! inputs: match against the catalog, partition by allergy safety, build
//! the display list, narrow by tag filters, then recompute the single
//! recommendation. [`run_search`] exposes exactly that chain with no side
//! effects. [`submit_search`] wraps it with the stateful submission flow: a
//! short randomized delay before matching (a "searching" signal to the
//! caller, with no bearing on correctness), then persistence, then the
//! navigation target. Persistence is deliberately the first side effect,
//! before any navigation the caller performs, so a submission that started
//! is never lost to an immediate teardown.

use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::filters::{
    AllergyProfile, AppliedFilterSet, apply_tag_filters, display_list, partition_by_safety,
    select_recommendation,
};
use crate::history::SearchHistory;
use crate::matcher::find_matches;
use crate::models::{MatchResult, RemedyRecord};
use crate::normalize::display_form;
use crate::storage::{KeyValueStore, LAST_SYMPTOMS_SLOT};
use crate::utils::{NavigationTarget, build_navigation_target};

const SEARCH_DELAY_MIN_MS: u64 = 300;
const SEARCH_DELAY_MAX_MS: u64 = 500;

/// One user search action.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Display-form symptoms in selection order, 1-5 per the product rule
    /// (the cap is enforced at the input boundary, not here).
    pub symptoms: Vec<String>,
    pub allergy: AllergyProfile,
    pub filters: AppliedFilterSet,
    /// Reveal allergy-filtered remedies, tagged and listed first.
    pub show_filtered: bool,
}

/// Final result list plus the submission side-channel data.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub results: Vec<MatchResult>,
    /// Count of usable (non-filtered) results.
    pub result_count: usize,
    /// Count of remedies excluded by allergy safety.
    pub filtered_count: usize,
    /// Route for the external router; `None` for the empty no-op
    /// submission.
    pub navigation: Option<NavigationTarget>,
}

/// Pure pipeline pass: no delay, no persistence, no navigation.
pub fn run_search(catalog: &[RemedyRecord], request: &SearchRequest) -> SearchOutcome {
    let matches = find_matches(&request.symptoms, catalog);
    let partition = partition_by_safety(matches, &request.allergy);
    let filtered_count = partition.filtered_count();
    let listed = display_list(partition, request.show_filtered);
    let narrowed = apply_tag_filters(listed, &request.filters);
    let results = select_recommendation(narrowed);
    let result_count = results.iter().filter(|r| !r.is_filtered).count();

    SearchOutcome { results, result_count, filtered_count, navigation: None }
}

/// Full submission flow for a user action.
///
/// Empty symptom lists are absorbed as a warning-logged no-op (the submit
/// affordance is disabled upstream, so this only happens on misuse). The
/// searching delay runs before matching. The history entry and the
/// last-selected-symptoms slot are written before the navigation target is
/// produced; write-before-navigate is a hard ordering requirement.
pub fn submit_search<S: KeyValueStore>(
    catalog: &[RemedyRecord],
    request: &SearchRequest,
    store: &S,
) -> SearchOutcome {
    if request.symptoms.is_empty() {
        eprintln!("Warning: Ignoring search submission with no symptoms");
        return SearchOutcome::default();
    }

    searching_delay();

    let display_symptoms: Vec<String> =
        request.symptoms.iter().map(|s| display_form(s)).filter(|s| !s.is_empty()).collect();
    let mut outcome = run_search(catalog, request);

    // Allergens travel with the entry only while filtering is active
    let recorded_allergens: &[String] =
        if request.allergy.is_active() { &request.allergy.allergens } else { &[] };

    let history = SearchHistory::new(store);
    history.add_search(
        &display_symptoms,
        outcome.result_count,
        recorded_allergens,
        outcome.filtered_count,
    );
    persist_last_symptoms(store, &display_symptoms);

    outcome.navigation = Some(build_navigation_target(&display_symptoms, recorded_allergens));
    outcome
}

/// Last submitted symptoms, for surviving a reload without re-searching.
pub fn load_last_symptoms<S: KeyValueStore>(store: &S) -> Vec<String> {
    store
        .get(LAST_SYMPTOMS_SLOT)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn persist_last_symptoms<S: KeyValueStore>(store: &S, symptoms: &[String]) {
    match serde_json::to_string(symptoms) {
        Ok(json) => store.set(LAST_SYMPTOMS_SLOT, &json),
        Err(e) => eprintln!("Warning: Failed to persist selected symptoms: {}", e),
    }
}

/// Bounded, randomized pause signalling "searching" to the caller. Runs
/// before matching; not cancellable.
fn searching_delay() {
    let millis = rand::thread_rng().gen_range(SEARCH_DELAY_MIN_MS..=SEARCH_DELAY_MAX_MS);
    thread::sleep(Duration::from_millis(millis));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn remedy(id: &str, symptoms: &[&str], allergens: &[&str]) -> RemedyRecord {
        RemedyRecord {
            id: id.to_string(),
            name: format!("Remedy {}", id),
            category: String::new(),
            description: String::new(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            allergens: allergens.iter().map(|a| a.to_string()).collect(),
            properties: vec![],
            contraindications: vec![],
            tips: vec![],
            uses: vec![],
            pregnancy_safe: None,
            children_minimum_age: None,
            verified_by_professional: false,
            sources: Default::default(),
        }
    }

    fn catalog() -> Vec<RemedyRecord> {
        vec![
            remedy("a", &["fatigue"], &[]),
            remedy("b", &["fatigue", "stress"], &["pollen"]),
            remedy("c", &["insomnie"], &[]),
        ]
    }

    fn request(symptoms: &[&str]) -> SearchRequest {
        SearchRequest {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_search_ranks_and_recommends() {
        let outcome = run_search(&catalog(), &request(&["fatigue", "stress"]));
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].remedy.id, "b");
        assert!(outcome.results[0].is_recommended);
        assert!(!outcome.results[1].is_recommended);
        assert_eq!(outcome.result_count, 2);
        assert_eq!(outcome.filtered_count, 0);
    }

    #[test]
    fn test_run_search_allergy_partition_and_recommendation() {
        let mut req = request(&["fatigue", "stress"]);
        req.allergy = AllergyProfile::new(vec!["pollen".to_string()], true);
        req.show_filtered = true;

        let outcome = run_search(&catalog(), &req);
        // Unsafe "b" listed first and tagged; recommendation skips to "a"
        assert_eq!(outcome.results[0].remedy.id, "b");
        assert!(outcome.results[0].is_filtered);
        assert!(!outcome.results[0].is_recommended);
        assert_eq!(outcome.results[1].remedy.id, "a");
        assert!(outcome.results[1].is_recommended);
        assert_eq!(outcome.result_count, 1);
        assert_eq!(outcome.filtered_count, 1);
    }

    #[test]
    fn test_run_search_empty_query() {
        let outcome = run_search(&catalog(), &request(&[]));
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.result_count, 0);
    }

    #[test]
    fn test_submit_search_persists_before_returning_navigation() {
        let store = MemoryStore::new();
        let outcome = submit_search(&catalog(), &request(&["fatigue"]), &store);

        let history = SearchHistory::new(&store);
        let entries = history.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symptoms, vec!["Fatigue"]);
        assert_eq!(entries[0].result_count, 2);

        assert_eq!(load_last_symptoms(&store), vec!["Fatigue"]);

        let navigation = outcome.navigation.expect("Navigation target expected");
        assert_eq!(navigation.query, "symptoms=Fatigue");
    }

    #[test]
    fn test_submit_search_empty_is_noop() {
        let store = MemoryStore::new();
        let outcome = submit_search(&catalog(), &request(&[]), &store);
        assert!(outcome.results.is_empty());
        assert!(outcome.navigation.is_none());
        assert!(SearchHistory::new(&store).entries().is_empty());
        assert!(load_last_symptoms(&store).is_empty());
    }

    #[test]
    fn test_submit_search_records_allergens_only_when_active() {
        let store = MemoryStore::new();
        let mut req = request(&["fatigue"]);
        req.allergy = AllergyProfile::new(vec!["pollen".to_string()], false);
        submit_search(&catalog(), &req, &store);

        let entries = SearchHistory::new(&store).entries();
        assert!(entries[0].allergens.is_empty());
        // Disabled filtering also means no allergies parameter
        let outcome = submit_search(&catalog(), &req, &store);
        assert_eq!(outcome.navigation.unwrap().query, "symptoms=Fatigue");
    }

    #[test]
    fn test_submit_search_navigation_includes_allergies_when_active() {
        let store = MemoryStore::new();
        let mut req = request(&["fatigue", "stress"]);
        req.allergy = AllergyProfile::new(vec!["pollen".to_string()], true);

        let outcome = submit_search(&catalog(), &req, &store);
        let navigation = outcome.navigation.unwrap();
        assert_eq!(navigation.query, "symptoms=Fatigue,Stress&allergies=pollen");
        assert_eq!(navigation.payload.allergens, vec!["pollen"]);

        let entries = SearchHistory::new(&store).entries();
        assert_eq!(entries[0].allergens, vec!["pollen"]);
        assert_eq!(entries[0].filtered_count, 1);
    }
}
