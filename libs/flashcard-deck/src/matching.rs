//! Answer matching for quiz responses.
//!
//! Matching is exact after lower-casing both sides. Surrounding whitespace is
//! significant and there is no partial credit.

/// Response that ends a quiz early, compared case-insensitively.
pub const QUIT_SENTINEL: &str = "q";

/// Whether the response asks to end the quiz.
pub fn is_quit(response: &str) -> bool {
    response.to_lowercase() == QUIT_SENTINEL
}

/// Compare a typed answer to the correct answer.
pub fn answers_match(typed: &str, correct: &str) -> bool {
    typed.to_lowercase() == correct.to_lowercase()
}
