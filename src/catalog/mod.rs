//! Remedy catalog loading.
//!
//! The catalog is a JSON array of remedy records supplied by an external
//! producer. Loading follows a graceful degradation approach: records that
//! fail the defensive checks (blank name, no usable symptom) are skipped
//! with a warning, and the load only fails when more than half the records
//! are unusable, which points at systematic corruption rather than a stray
//! bad record.
//!
//! The loader preserves file order. That order is load-bearing: the matcher
//! breaks ranking ties by catalog position, so ranking is only as stable as
//! the order returned here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::RemedyRecord;
use crate::normalize::matching_keys;

/// Load and validate the remedy catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<RemedyRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("Catalog is not a JSON array: {}", path.display()))?;

    let total = values.len();
    let mut records = Vec::with_capacity(total);
    let mut skipped = 0;

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RemedyRecord>(value) {
            Ok(record) => {
                if let Some(reason) = rejection_reason(&record) {
                    eprintln!("Warning: Skipping catalog record {}: {}", index, reason);
                    skipped += 1;
                } else {
                    records.push(record);
                }
            }
            Err(e) => {
                eprintln!("Warning: Skipping malformed catalog record {}: {}", index, e);
                skipped += 1;
            }
        }
    }

    if total > 0 {
        let failure_rate = skipped as f64 / total as f64;
        if failure_rate > 0.5 {
            bail!(
                "Catalog unusable: {} of {} records invalid ({:.1}%)",
                skipped,
                total,
                failure_rate * 100.0
            );
        }
    }

    if skipped > 0 {
        eprintln!("Loaded catalog: {} remedies ({} skipped)", records.len(), skipped);
    }

    Ok(records)
}

fn rejection_reason(record: &RemedyRecord) -> Option<&'static str> {
    if record.name.trim().is_empty() {
        return Some("blank name");
    }
    if matching_keys(&record.symptoms).is_empty() {
        return Some("no usable symptoms");
    }
    None
}
