//! Capacity-bounded, deduplicating search history.
//!
//! The history lives as a JSON array under a single store slot. Every
//! mutating call fully reads, transforms, and writes the list before
//! returning, so within one process the operations are atomic and the
//! persistence write completes before any navigation the caller performs
//! next. Across concurrent processes the slot is last-write-wins; that is a
//! documented limitation, not a guarantee.
//!
//! Two searches are duplicates when their symptom lists are equal as
//! matching-key multisets, so `["stress", "fatigue"]` collides with
//! `["Fatigue", "STRESS"]` and with accent variants. A duplicate submission
//! refreshes the existing entry (timestamp, counts, position) and keeps its
//! id; it never creates a second entry.

use chrono::Utc;
use uuid::Uuid;

use crate::models::SearchHistoryEntry;
use crate::normalize::matching_key;
use crate::storage::{HISTORY_SLOT, KeyValueStore};

/// Maximum retained entries. The product copy promises the last 10
/// searches; once the list grows past this the least-recently-updated
/// entries are dropped from the tail.
pub const HISTORY_CAPACITY: usize = 10;

/// Search history over a key-value store slot.
pub struct SearchHistory<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> SearchHistory<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Current entries, most recent first, invalid entries dropped.
    pub fn entries(&self) -> Vec<SearchHistoryEntry> {
        self.load()
    }

    /// Record a search.
    ///
    /// An empty symptom list is rejected as a warning-logged no-op. A
    /// duplicate of an existing entry (order- and accent-insensitive
    /// symptom multiset) refreshes that entry in place of creating a new
    /// one. The updated list is persisted before this method returns.
    pub fn add_search(
        &self,
        symptoms: &[String],
        result_count: usize,
        allergens: &[String],
        filtered_count: usize,
    ) {
        if symptoms.is_empty() {
            eprintln!("Warning: Ignoring history entry with no symptoms");
            return;
        }

        let mut entries = self.load();
        let now = Utc::now().timestamp_millis();
        let key = dedup_key(symptoms);

        if let Some(pos) = entries.iter().position(|e| dedup_key(&e.symptoms) == key) {
            let mut existing = entries.remove(pos);
            existing.symptoms = symptoms.to_vec();
            existing.allergens = allergens.to_vec();
            existing.timestamp = now;
            existing.result_count = result_count;
            existing.filtered_count = filtered_count;
            entries.insert(0, existing);
        } else {
            entries.insert(
                0,
                SearchHistoryEntry {
                    id: generate_id(now),
                    symptoms: symptoms.to_vec(),
                    allergens: allergens.to_vec(),
                    timestamp: now,
                    result_count,
                    filtered_count,
                },
            );
        }

        entries.truncate(HISTORY_CAPACITY);
        self.persist(&entries);
    }

    /// Remove the entry with the given id. Unknown or blank ids are
    /// absorbed (the filtered list is persisted either way).
    pub fn remove_search(&self, id: &str) {
        if id.trim().is_empty() {
            eprintln!("Warning: Ignoring history removal with blank id");
            return;
        }
        let mut entries = self.load();
        entries.retain(|e| e.id != id);
        self.persist(&entries);
    }

    /// Drop every entry and persist the empty list.
    pub fn clear_history(&self) {
        self.persist(&[]);
    }

    /// Read the slot, dropping malformed JSON and invalid entries. The
    /// cleaned view is never written back here; repair happens only as a
    /// side effect of the next mutation.
    fn load(&self) -> Vec<SearchHistoryEntry> {
        let Some(raw) = self.store.get(HISTORY_SLOT) else {
            return Vec::new();
        };
        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Warning: Discarding unreadable search history: {}", e);
                return Vec::new();
            }
        };
        values
            .into_iter()
            .filter_map(|value| serde_json::from_value::<SearchHistoryEntry>(value).ok())
            .filter(SearchHistoryEntry::is_valid)
            .collect()
    }

    fn persist(&self, entries: &[SearchHistoryEntry]) {
        match serde_json::to_string(entries) {
            Ok(json) => self.store.set(HISTORY_SLOT, &json),
            Err(e) => eprintln!("Warning: Failed to serialize search history: {}", e),
        }
    }
}

/// Order-insensitive multiset key for duplicate detection.
fn dedup_key(symptoms: &[String]) -> Vec<String> {
    let mut keys: Vec<String> =
        symptoms.iter().map(|s| matching_key(s)).filter(|k| !k.is_empty()).collect();
    keys.sort();
    keys
}

/// Fresh entry id: monotonic timestamp plus a random suffix, unique without
/// a central counter.
fn generate_id(timestamp: i64) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", timestamp, &suffix[..8])
}
