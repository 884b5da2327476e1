//! Remedy Finder - symptom-based natural remedy search
//!
//! This library matches free-text symptoms against a remedy catalog and
//! returns a ranked, safety-filtered result list. It supports:
//!
//! - Accent- and case-insensitive symptom normalization and matching
//! - Allergy-based safety filtering with a recomputed recommendation
//! - Independent tag filters (pregnancy safety, verification, child age)
//! - A deduplicating, capacity-bounded search history
//! - A red-flag triage questionnaire gating result visibility per session
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use remedy_finder::catalog::load_catalog;
//! use remedy_finder::pipeline::{SearchRequest, run_search};
//!
//! let catalog = load_catalog(Path::new("remedies.json"))?;
//! let request = SearchRequest {
//!     symptoms: vec!["fatigue".to_string(), "stress".to_string()],
//!     ..Default::default()
//! };
//! let outcome = run_search(&catalog, &request);
//! println!("{} matching remedies", outcome.results.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod filters;
pub mod history;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod storage;
pub mod triage;
pub mod utils;

// Re-export commonly used types
pub use filters::{AllergyProfile, AppliedFilterSet};
pub use history::{HISTORY_CAPACITY, SearchHistory};
pub use matcher::find_matches;
pub use models::{MatchResult, RemedyRecord, SearchHistoryEntry, TriageSession};
pub use pipeline::{SearchOutcome, SearchRequest, run_search, submit_search};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use triage::{TriageGate, TriageOutcome, is_session_validated, triage_questions};
