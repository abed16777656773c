//! Error types for flashcard-deck.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors raised while loading, mutating or quizzing a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A record file does not exist. Recoverable: the store treats it as empty.
    #[error("file '{}' not found", path.display())]
    FileMissing { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("number of questions ({questions}) and answers ({answers}) must be the same")]
    LengthMismatch { questions: usize, answers: usize },

    #[error("question not found: {0}")]
    NotFound(String),

    #[error("{field} must fit on a single line")]
    EmbeddedNewline { field: &'static str },

    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

impl DeckError {
    /// Whether the caller may keep working after this error.
    ///
    /// Only `LengthMismatch` is fatal: a deck never exists in that state.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::LengthMismatch { .. })
    }
}
