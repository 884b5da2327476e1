use serde::{Deserialize, Serialize};

/// A persisted search, most recent first in the stored list.
///
/// Entries are stored as a JSON array under a single store slot. The
/// validity predicate is enforced on read: entries that fail it are dropped
/// from consideration, never repaired in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    /// Opaque id, generated at creation and kept across reuse updates.
    pub id: String,
    /// Display-form symptoms, in the order they were entered.
    pub symptoms: Vec<String>,
    /// Allergen ids active at submission time; empty when allergy filtering
    /// was off.
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Epoch milliseconds of creation or last reuse.
    pub timestamp: i64,
    #[serde(default)]
    pub result_count: usize,
    #[serde(default)]
    pub filtered_count: usize,
}

impl SearchHistoryEntry {
    /// Validity predicate applied to every entry read from storage:
    /// non-blank id, at least one non-blank symptom, positive timestamp.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.symptoms.is_empty()
            && self.symptoms.iter().all(|s| !s.trim().is_empty())
            && self.timestamp > 0
    }
}
