//! Data models for the remedy finder.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`RemedyRecord`] - Immutable catalog records supplied by the loader
//! - [`MatchResult`] - One matched remedy in a ranked result list
//! - [`SearchHistoryEntry`] - Persisted past searches
//! - [`TriageQuestion`] / [`TriageSession`] - Red-flag questionnaire state
//!
//! These models use serde for JSON (de)serialization; the catalog and the
//! persisted slots use camelCase field names at the JSON boundary.

pub mod history;
pub mod remedy;
pub mod results;
pub mod triage;

pub use history::SearchHistoryEntry;
pub use remedy::{RemedyProperty, RemedyRecord, SourceRef, SourceRefs, UsageSpec};
pub use results::MatchResult;
pub use triage::{TriageOption, TriageQuestion, TriageSession};
