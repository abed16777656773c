//! Flashcard deck stored as two line-aligned text files.
//!
//! Provides:
//! - Record store for line-oriented question and answer files
//! - Deck with shuffle, add and delete that keeps both files in sync
//! - Sequential quiz with case-insensitive scoring and early quit
//! - Console abstraction for line-based prompts and feedback

pub mod console;
pub mod deck;
pub mod error;
pub mod matching;
pub mod quiz;
pub mod store;
pub mod types;

pub use console::{Console, LineConsole};
pub use deck::Deck;
pub use error::{DeckError, Result};
pub use matching::{answers_match, is_quit, QUIT_SENTINEL};
pub use store::Load;
pub use types::{Card, QuizOutcome};
