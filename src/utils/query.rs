//! Navigation query construction.
//!
//! After a successful submission the core emits a target route for the
//! external router: `symptoms=<comma-joined, percent-encoded display
//! symptoms>` plus, only when allergy filtering was active with at least
//! one allergen set, `&allergies=<comma-joined, percent-encoded allergen
//! ids>`. Each element is encoded individually so the separator commas stay
//! literal and parseable. The structured payload carries the same data for
//! callers that prefer not to re-parse the query string.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

// Characters that would break query-string structure if left bare,
// including the comma used as the list separator.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']');

/// Structured equivalent of the navigation query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub symptoms: Vec<String>,
    pub allergens: Vec<String>,
}

/// Route target emitted after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub query: String,
    pub payload: SubmissionPayload,
}

/// Build the navigation target for a submission.
///
/// `allergens` must already reflect the active state: pass an empty slice
/// when allergy filtering was off, so the `allergies` parameter is omitted.
pub fn build_navigation_target(symptoms: &[String], allergens: &[String]) -> NavigationTarget {
    let mut query = format!("symptoms={}", encode_list(symptoms));
    if !allergens.is_empty() {
        query.push_str(&format!("&allergies={}", encode_list(allergens)));
    }
    NavigationTarget {
        query,
        payload: SubmissionPayload {
            symptoms: symptoms.to_vec(),
            allergens: allergens.to_vec(),
        },
    }
}

/// Percent-encode one query component.
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

/// Decode one query component back to its display form.
pub fn decode_query_component(encoded: &str) -> String {
    match percent_decode_str(encoded).decode_utf8_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

fn encode_list(values: &[String]) -> String {
    values.iter().map(|v| encode_query_component(v)).collect::<Vec<_>>().join(",")
}
