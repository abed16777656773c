//! Core types for the flashcard deck.

use serde::{Deserialize, Serialize};

/// One question/answer pair at a fixed position within a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Final tally of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizOutcome {
    /// Number of correct responses.
    pub score: usize,
    /// Number of cards counted as attempted.
    pub attempted: usize,
    /// Whether the session ended before the last card.
    pub quit: bool,
}
