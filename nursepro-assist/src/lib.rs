//! Contract with the generative-AI collaborator behind the assistant tabs.
//!
//! This crate builds the prompts, declares the JSON shapes the model must
//! answer with, and turns model output back into typed records. Transport
//! is left to the caller.

mod error;
mod prompt;
mod quiz;
mod response;

use serde::{Deserialize, Serialize};

pub use error::AssistError;
pub use prompt::{
    askep_prompt, askep_schema, image_prompt, quiz_schema, quiz_topic_prompt, sbar_prompt,
    sbar_schema, validate_image, DEFAULT_QUIZ_COUNT, DISCLAIMER, MAX_IMAGE_BYTES,
    QUIZ_DOCUMENT_PROMPT,
};
pub use quiz::{QuizHistory, QuizSession, QuizSet, QuizSource, ScoreBand};
pub use response::{parse_askep, parse_quiz, parse_sbar};

/// SDKI nursing diagnosis suggested for a patient summary.
///
/// Every field is optional on the wire so that one incomplete item does
/// not discard the rest of the model's answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AskepDiagnosis {
    pub code: String,
    pub name: String,
    pub category: String,
    pub definition: String,
    pub causes: Vec<String>,
    pub signs: DiagnosticSigns,
}

/// Major and minor signs/symptoms backing a diagnosis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticSigns {
    #[serde(default)]
    pub major: Vec<String>,
    #[serde(default)]
    pub minor: Vec<String>,
}

/// Shift handover note in SBAR form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SbarNote {
    pub situation: String,
    pub background: String,
    pub assessment: String,
    pub recommendation: String,
}

/// Multiple-choice practice question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty() && self.correct_answer < self.options.len()
    }
}

/// Kind of clinical image sent for interpretation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageKind {
    /// 12-lead electrocardiogram strip.
    Ekg,
    /// Arterial blood gas printout.
    Agd,
}
