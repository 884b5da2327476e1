/// End-to-end integration tests for the remedy finder
///
/// These tests verify complete workflows: matching, filtering,
/// recommendation, and submission side effects through the public API
mod common;

use common::{RemedyBuilder, sample_catalog};
use remedy_finder::filters::{AllergyProfile, AppliedFilterSet};
use remedy_finder::pipeline::{SearchRequest, load_last_symptoms, run_search, submit_search};
use remedy_finder::storage::MemoryStore;
use remedy_finder::{SearchHistory, find_matches};

fn request(symptoms: &[&str]) -> SearchRequest {
    SearchRequest {
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_matching_ranks_by_overlap() {
    let catalog = sample_catalog();
    let results = find_matches(&request(&["stress", "insomnie"]).symptoms, &catalog);

    // Camomille and Lavande both match twice; catalog order breaks the tie
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].remedy.id, "camomille");
    assert_eq!(results[0].match_count, 2);
    assert_eq!(results[1].remedy.id, "lavande");
    assert_eq!(results[1].match_count, 2);
}

#[test]
fn test_full_pipeline_with_allergy_and_tags() {
    let catalog = sample_catalog();
    let mut req = request(&["toux", "stress"]);
    req.allergy = AllergyProfile::new(vec!["pollen".to_string()], true);
    req.show_filtered = true;
    req.filters = AppliedFilterSet { verified_only: false, ..Default::default() };

    let outcome = run_search(&catalog, &req);

    // Miel de thym carries pollen: listed first, tagged, never recommended
    assert_eq!(outcome.results[0].remedy.id, "miel");
    assert!(outcome.results[0].is_filtered);
    assert!(!outcome.results[0].is_recommended);
    assert_eq!(outcome.filtered_count, 1);

    // The first safe entry takes the recommendation
    let recommended: Vec<&str> = outcome
        .results
        .iter()
        .filter(|r| r.is_recommended)
        .map(|r| r.remedy.id.as_str())
        .collect();
    assert_eq!(recommended, vec!["camomille"]);
}

#[test]
fn test_tag_change_moves_recommendation_same_pass() {
    let catalog = sample_catalog();
    let mut req = request(&["stress"]);

    let before = run_search(&catalog, &req);
    assert_eq!(before.results[0].remedy.id, "camomille");
    assert!(before.results[0].is_recommended);

    // Filtering to pregnancy-unsafe-tolerant set: camomille survives, but
    // narrow to verified + pregnancy filter drops camomille's competitor
    req.filters = AppliedFilterSet { pregnancy_safe_only: true, ..Default::default() };
    let after = run_search(&catalog, &req);
    assert_eq!(after.results.len(), 1);
    assert_eq!(after.results[0].remedy.id, "camomille");
    assert!(after.results[0].is_recommended);
}

#[test]
fn test_recommendation_moves_when_leader_tag_filtered() {
    let catalog = vec![
        RemedyBuilder::new("leader").symptoms(&["stress", "insomnie"]).build(),
        RemedyBuilder::new("runner_up").symptoms(&["stress"]).verified().build(),
    ];
    let mut req = request(&["stress", "insomnie"]);

    let before = run_search(&catalog, &req);
    assert!(before.results[0].is_recommended);
    assert_eq!(before.results[0].remedy.id, "leader");

    req.filters = AppliedFilterSet { verified_only: true, ..Default::default() };
    let after = run_search(&catalog, &req);
    assert_eq!(after.results.len(), 1);
    assert_eq!(after.results[0].remedy.id, "runner_up");
    assert!(after.results[0].is_recommended);
}

#[test]
fn test_submission_records_history_and_navigation() {
    let catalog = sample_catalog();
    let store = MemoryStore::new();

    let outcome = submit_search(&catalog, &request(&["maux de tête", "nausée"]), &store);

    let navigation = outcome.navigation.expect("Navigation target expected");
    assert_eq!(navigation.query, "symptoms=Maux%20de%20t%C3%AAte,Naus%C3%A9e");
    assert_eq!(navigation.payload.symptoms, vec!["Maux de tête", "Nausée"]);

    let entries = SearchHistory::new(&store).entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].symptoms, vec!["Maux de tête", "Nausée"]);
    assert_eq!(load_last_symptoms(&store), vec!["Maux de tête", "Nausée"]);
}

#[test]
fn test_repeat_submission_dedups_history() {
    let catalog = sample_catalog();
    let store = MemoryStore::new();

    submit_search(&catalog, &request(&["Fatigue", "stress"]), &store);
    submit_search(&catalog, &request(&["stress", "fatigue"]), &store);

    let entries = SearchHistory::new(&store).entries();
    assert_eq!(entries.len(), 1);
    // The entry reflects the second submission's casing and order
    assert_eq!(entries[0].symptoms, vec!["Stress", "Fatigue"]);
}

#[test]
fn test_no_match_outcome_is_empty_not_error() {
    let catalog = sample_catalog();
    let store = MemoryStore::new();

    let outcome = submit_search(&catalog, &request(&["symptôme inconnu"]), &store);
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.result_count, 0);

    // The empty search is still recorded
    let entries = SearchHistory::new(&store).entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].result_count, 0);
}
