//! Practice-quiz sessions and their score history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AssistError, QuizQuestion};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuizSource {
    Topic,
    Document,
}

/// Saved set of questions generated from a topic or a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizSet {
    pub id: String,
    pub title: String,
    pub source_type: QuizSource,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub questions: Vec<QuizQuestion>,
}

impl QuizSet {
    /// New set keyed by its creation time in milliseconds.
    pub fn new(
        title: impl Into<String>,
        source_type: QuizSource,
        questions: Vec<QuizQuestion>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            title: title.into(),
            source_type,
            created_at: now,
            questions,
        }
    }
}

/// Outcome of a finished quiz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizHistory {
    pub id: String,
    pub title: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub completed_at: DateTime<Utc>,
}

impl QuizHistory {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage)
    }
}

/// Colour band used on the history list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32) -> ScoreBand {
        if percentage >= 80 {
            ScoreBand::Good
        } else if percentage >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// One pass through a quiz set. Each question accepts a single answer.
#[derive(Debug, Clone)]
pub struct QuizSession {
    set: QuizSet,
    current: usize,
    score: usize,
    selected: Option<usize>,
}

impl QuizSession {
    pub fn new(set: QuizSet) -> Self {
        Self {
            set,
            current: 0,
            score: 0,
            selected: None,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.set.questions.get(self.current)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Record the answer for the current question; returns whether it was
    /// correct.
    pub fn answer(&mut self, choice: usize) -> Result<bool, AssistError> {
        let question = self.current_question().ok_or(AssistError::QuizFinished)?;
        if self.selected.is_some() {
            return Err(AssistError::AlreadyAnswered);
        }
        if choice >= question.options.len() {
            return Err(AssistError::ChoiceOutOfRange {
                choice,
                options: question.options.len(),
            });
        }

        let correct = choice == question.correct_answer;
        if correct {
            self.score += 1;
        }
        self.selected = Some(choice);
        Ok(correct)
    }

    /// Move to the next question; unanswered questions count as wrong.
    pub fn advance(&mut self) {
        if self.current < self.set.questions.len() {
            self.current += 1;
        }
        self.selected = None;
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.set.questions.len()
    }

    pub fn finish(&self, now: DateTime<Utc>) -> QuizHistory {
        let total = self.set.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (self.score as f64 / total as f64 * 100.0).round() as u32
        };
        QuizHistory {
            id: now.timestamp_millis().to_string(),
            title: self.set.title.clone(),
            score: self.score,
            total,
            percentage,
            completed_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn question(id: u32, correct: usize) -> QuizQuestion {
        QuizQuestion {
            id,
            question: format!("Soal {id}"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: correct,
            explanation: String::new(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn scores_and_rounds_percentage() {
        let set = QuizSet::new(
            "Cairan & Elektrolit",
            QuizSource::Topic,
            vec![question(1, 0), question(2, 1), question(3, 2)],
            fixed_now(),
        );
        let mut session = QuizSession::new(set);

        assert_eq!(session.answer(0), Ok(true));
        assert_eq!(session.answer(1), Err(AssistError::AlreadyAnswered));
        session.advance();
        assert_eq!(session.answer(3), Ok(false));
        session.advance();
        assert_eq!(session.answer(2), Ok(true));
        session.advance();

        assert!(session.is_finished());
        assert_eq!(session.answer(0), Err(AssistError::QuizFinished));

        let history = session.finish(fixed_now());
        assert_eq!(history.score, 2);
        assert_eq!(history.total, 3);
        assert_eq!(history.percentage, 67);
        assert_eq!(history.band(), ScoreBand::Fair);
        assert_eq!(history.id, fixed_now().timestamp_millis().to_string());
    }

    #[test]
    fn choice_must_exist() {
        let set = QuizSet::new("x", QuizSource::Document, vec![question(1, 0)], fixed_now());
        let mut session = QuizSession::new(set);
        assert_eq!(
            session.answer(4),
            Err(AssistError::ChoiceOutOfRange {
                choice: 4,
                options: 4
            })
        );
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let set = QuizSet::new("kosong", QuizSource::Topic, Vec::new(), fixed_now());
        let session = QuizSession::new(set);
        assert!(session.is_finished());
        assert_eq!(session.finish(fixed_now()).percentage, 0);
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::from_percentage(100), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(80), ScoreBand::Good);
        assert_eq!(ScoreBand::from_percentage(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_percentage(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_percentage(59), ScoreBand::Poor);
    }
}
