use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One multiple-choice triage question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<TriageOption>,
}

/// A selectable answer; red-flag options indicate the user should seek
/// professional or emergency care instead of a home remedy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageOption {
    pub id: String,
    pub text: String,
    pub is_red_flag: bool,
}

/// Completed triage state, persisted in a session-scoped slot (not the
/// durable history store). Only red-flag-free completions are persisted,
/// so a stored session always has `validated = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSession {
    pub validated: bool,
    /// Epoch milliseconds of completion.
    pub timestamp: i64,
    /// question-id -> selected option-id.
    pub answers: BTreeMap<String, String>,
    pub has_red_flags: bool,
}
