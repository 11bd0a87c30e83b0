//! Deterministic confirmation prompt adapters.
//!
//! Headless shells and tests answer confirmation questions without a
//! dialog. `FixedConfirmation` always gives the same answer;
//! `RecordingConfirmation` additionally remembers what was asked.

use std::sync::Mutex;

use crate::ports::ConfirmationPrompt;

/// Confirmation prompt with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmation {
    answer: bool,
}

impl FixedConfirmation {
    /// Always answers yes.
    pub fn accept() -> Self {
        Self { answer: true }
    }

    /// Always answers no.
    pub fn decline() -> Self {
        Self { answer: false }
    }
}

impl ConfirmationPrompt for FixedConfirmation {
    fn confirm(&self, _question: &str) -> bool {
        self.answer
    }
}

/// Confirmation prompt that records every question asked.
#[derive(Debug, Default)]
pub struct RecordingConfirmation {
    answer: bool,
    questions: Mutex<Vec<String>>,
}

impl RecordingConfirmation {
    /// Creates a recording prompt with the given fixed answer.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl ConfirmationPrompt for RecordingConfirmation {
    fn confirm(&self, question: &str) -> bool {
        if let Ok(mut questions) = self.questions.lock() {
            questions.push(question.to_string());
        }
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_confirmation_answers_consistently() {
        assert!(FixedConfirmation::accept().confirm("Delete?"));
        assert!(!FixedConfirmation::decline().confirm("Delete?"));
    }

    #[test]
    fn recording_confirmation_remembers_questions() {
        let prompt = RecordingConfirmation::answering(true);
        assert!(prompt.confirm("Really delete this comment?"));
        assert_eq!(prompt.questions(), ["Really delete this comment?"]);
    }
}
