//! Red-flag triage gate.
//!
//! A short, fixed questionnaire must complete without an emergency
//! indicating answer before results for the current session are shown.
//! Completion requires every question answered and the disclaimer accepted.
//! A red-flag answer redirects to emergency information and leaves nothing
//! persisted, so re-entering the flow re-triggers triage; a clean pass
//! stores a validated [`TriageSession`] in the session-scoped slot and
//! unlocks result viewing for the remainder of that session.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::models::{TriageOption, TriageQuestion, TriageSession};
use crate::storage::{KeyValueStore, TRIAGE_SESSION_SLOT};

/// Outcome of a completion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriageOutcome {
    /// Not every question answered, or the disclaimer not yet accepted.
    Incomplete,
    /// At least one red-flag answer: the caller must show emergency
    /// information. The session is not validated.
    Redirected,
    /// No red flags; the session is validated and persisted.
    Validated(TriageSession),
}

/// The fixed, ordered question set.
pub fn triage_questions() -> Vec<TriageQuestion> {
    fn option(id: &str, text: &str, is_red_flag: bool) -> TriageOption {
        TriageOption { id: id.to_string(), text: text.to_string(), is_red_flag }
    }

    vec![
        TriageQuestion {
            id: "duration".to_string(),
            text: "How long have you had these symptoms?".to_string(),
            options: vec![
                option("under-three-days", "Less than 3 days", false),
                option("under-two-weeks", "3 days to 2 weeks", false),
                option("over-two-weeks", "More than 2 weeks", true),
            ],
        },
        TriageQuestion {
            id: "warning-signs".to_string(),
            text: "Do you have chest pain, difficulty breathing, or have you lost consciousness?"
                .to_string(),
            options: vec![
                option("warning-yes", "Yes", true),
                option("warning-no", "No", false),
            ],
        },
        TriageQuestion {
            id: "fever".to_string(),
            text: "Do you have a fever above 39\u{b0}C?".to_string(),
            options: vec![
                option("fever-yes", "Yes", true),
                option("fever-no", "No", false),
            ],
        },
        TriageQuestion {
            id: "intensity".to_string(),
            text: "How intense is the discomfort?".to_string(),
            options: vec![
                option("intensity-mild", "Mild", false),
                option("intensity-moderate", "Moderate", false),
                option("intensity-severe", "Severe or getting worse", true),
            ],
        },
    ]
}

/// Questionnaire state for one gate attempt.
#[derive(Debug, Clone, Default)]
pub struct TriageGate {
    answers: BTreeMap<String, String>,
    disclaimer_accepted: bool,
}

impl TriageGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Unknown question or option ids are absorbed with
    /// a warning rather than panicking or erroring.
    pub fn select_answer(&mut self, question_id: &str, option_id: &str) {
        let questions = triage_questions();
        let Some(question) = questions.iter().find(|q| q.id == question_id) else {
            eprintln!("Warning: Ignoring answer for unknown triage question {}", question_id);
            return;
        };
        if !question.options.iter().any(|o| o.id == option_id) {
            eprintln!(
                "Warning: Ignoring unknown option {} for triage question {}",
                option_id, question_id
            );
            return;
        }
        self.answers.insert(question_id.to_string(), option_id.to_string());
    }

    pub fn accept_disclaimer(&mut self) {
        self.disclaimer_accepted = true;
    }

    pub fn answers(&self) -> &BTreeMap<String, String> {
        &self.answers
    }

    pub fn all_questions_answered(&self) -> bool {
        triage_questions().iter().all(|q| self.answers.contains_key(&q.id))
    }

    /// True iff any selected option across the answered questions is a red
    /// flag.
    pub fn has_red_flags(&self) -> bool {
        triage_questions().iter().any(|question| {
            self.answers
                .get(&question.id)
                .and_then(|selected| question.options.iter().find(|o| &o.id == selected))
                .is_some_and(|option| option.is_red_flag)
        })
    }

    /// Attempt to pass the gate.
    ///
    /// Blocked while unanswered questions remain or the disclaimer is not
    /// accepted, regardless of answers. With red flags the caller must
    /// redirect to emergency information and nothing is persisted. On a
    /// clean pass the validated session is written to the session slot
    /// before this method returns.
    pub fn try_complete<S: KeyValueStore>(&self, session_store: &S) -> TriageOutcome {
        if !self.all_questions_answered() || !self.disclaimer_accepted {
            return TriageOutcome::Incomplete;
        }
        if self.has_red_flags() {
            return TriageOutcome::Redirected;
        }

        let session = TriageSession {
            validated: true,
            timestamp: Utc::now().timestamp_millis(),
            answers: self.answers.clone(),
            has_red_flags: false,
        };
        match serde_json::to_string(&session) {
            Ok(json) => session_store.set(TRIAGE_SESSION_SLOT, &json),
            Err(e) => eprintln!("Warning: Failed to persist triage session: {}", e),
        }
        TriageOutcome::Validated(session)
    }
}

/// Whether a previously validated session unlocks result viewing.
pub fn is_session_validated<S: KeyValueStore>(session_store: &S) -> bool {
    session_store
        .get(TRIAGE_SESSION_SLOT)
        .and_then(|raw| serde_json::from_str::<TriageSession>(&raw).ok())
        .is_some_and(|session| session.validated)
}
