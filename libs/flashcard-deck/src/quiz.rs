//! Sequential quiz over a run of cards.

use crate::console::Console;
use crate::error::Result;
use crate::matching::{answers_match, is_quit};
use crate::types::{Card, QuizOutcome};

/// Ask every card in order, scoring one point per matching answer.
///
/// The quit sentinel, or the end of input, stops the session on the current
/// card, which still counts as attempted. Feedback and the final score are
/// written to the console.
pub fn run<C: Console + ?Sized>(cards: &[Card], console: &mut C) -> Result<QuizOutcome> {
    let mut score = 0;

    for (index, card) in cards.iter().enumerate() {
        let prompt = format!("{} (type 'q' to quit) ", card.question);
        let response = match console.read_line(&prompt)? {
            Some(response) if !is_quit(&response) => response,
            _ => {
                let attempted = index + 1;
                console.write_line(&format!(
                    "Quitting the test. Your final score is {} out of {}.",
                    score, attempted
                ))?;
                tracing::info!(score, attempted, "quiz ended early");
                return Ok(QuizOutcome {
                    score,
                    attempted,
                    quit: true,
                });
            }
        };

        if answers_match(&response, &card.answer) {
            score += 1;
            console.write_line("Correct!")?;
        } else {
            console.write_line(&format!("Sorry, the correct answer is {}.", card.answer))?;
        }
    }

    console.write_line(&format!(
        "Your final score is {} out of {}.",
        score,
        cards.len()
    ))?;
    tracing::info!(score, attempted = cards.len(), "quiz completed");
    Ok(QuizOutcome {
        score,
        attempted: cards.len(),
        quit: false,
    })
}
