//! Parsing of model output. The assistant tabs never fail on a bad model
//! answer: they fall back to an empty list or to the user's own input.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{AskepDiagnosis, QuizQuestion, SbarNote};

/// Diagnoses from a model answer; empty when the answer is unusable.
pub fn parse_askep(text: &str) -> Vec<AskepDiagnosis> {
    parse_json(text, "askep").unwrap_or_default()
}

/// Polished SBAR note, or `fallback` when the answer is unusable.
pub fn parse_sbar(text: &str, fallback: &SbarNote) -> SbarNote {
    parse_json(text, "sbar").unwrap_or_else(|| fallback.clone())
}

/// Quiz questions from a model answer.
///
/// Questions without text or whose answer index points outside the option
/// list are dropped.
pub fn parse_quiz(text: &str) -> Vec<QuizQuestion> {
    let questions: Vec<QuizQuestion> = parse_json(text, "quiz").unwrap_or_default();
    let total = questions.len();
    let kept: Vec<QuizQuestion> = questions
        .into_iter()
        .filter(QuizQuestion::is_well_formed)
        .collect();
    if kept.len() < total {
        warn!(dropped = total - kept.len(), "discarded malformed quiz questions");
    }
    kept
}

fn parse_json<T: DeserializeOwned>(text: &str, kind: &'static str) -> Option<T> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        warn!(kind, "empty model response");
        return None;
    }
    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(kind, %err, "failed to parse model response");
            None
        }
    }
}

/// Models occasionally wrap JSON in a markdown fence despite the schema.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
