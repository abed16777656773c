//! Deck of flashcards backed by a question file and an answer file.

use crate::console::Console;
use crate::error::{DeckError, Result};
use crate::quiz;
use crate::store;
use crate::types::{Card, QuizOutcome};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;

/// Ordered cards plus the two line sequences they were built from.
///
/// `questions` and `answers` always have the same length. `cards` follows
/// them except after [`Deck::shuffle`], whose order lives only in `cards`
/// until the next rebuild.
#[derive(Debug)]
pub struct Deck {
    question_file: PathBuf,
    answer_file: PathBuf,
    questions: Vec<String>,
    answers: Vec<String>,
    cards: Vec<Card>,
    conditions: Vec<DeckError>,
}

impl Deck {
    /// Load a deck from its question and answer files.
    ///
    /// Missing files read as empty and are reported by [`Deck::conditions`].
    /// Files with differing line counts are rejected with
    /// [`DeckError::LengthMismatch`].
    pub fn open(question_file: impl Into<PathBuf>, answer_file: impl Into<PathBuf>) -> Result<Self> {
        let question_file = question_file.into();
        let answer_file = answer_file.into();

        let mut conditions = Vec::new();
        let questions = note_condition(store::load(&question_file)?, &mut conditions);
        let answers = note_condition(store::load(&answer_file)?, &mut conditions);
        if questions.len() != answers.len() {
            return Err(DeckError::LengthMismatch {
                questions: questions.len(),
                answers: answers.len(),
            });
        }

        let cards = pair(&questions, &answers);
        tracing::debug!(cards = cards.len(), "opened deck");
        Ok(Self {
            question_file,
            answer_file,
            questions,
            answers,
            cards,
            conditions,
        })
    }

    /// Recoverable conditions met while opening, such as `FileMissing`.
    pub fn conditions(&self) -> &[DeckError] {
        &self.conditions
    }

    /// Cards in their current (possibly shuffled) order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Questions in file order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Answers in file order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the cards with the thread-local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle the cards with a caller-supplied generator.
    ///
    /// Only the card order changes; the file-order sequences are untouched.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Quiz the user on every card in the current order.
    pub fn run_quiz<C: Console + ?Sized>(&self, console: &mut C) -> Result<QuizOutcome> {
        quiz::run(&self.cards, console)
    }

    /// Append a card and persist both files.
    ///
    /// Trailing whitespace is dropped, as loading would drop it. The card is
    /// kept in memory even if saving fails.
    pub fn add_card(&mut self, question: &str, answer: &str) -> Result<()> {
        ensure_single_line("question", question)?;
        ensure_single_line("answer", answer)?;
        let question = question.trim_end();
        let answer = answer.trim_end();

        self.questions.push(question.to_string());
        self.answers.push(answer.to_string());
        self.cards.push(Card::new(question, answer));
        tracing::info!(question, "added card");

        self.save()
    }

    /// Remove the first card whose question matches exactly, then persist.
    ///
    /// Cards are rebuilt from file order afterwards, discarding any shuffle.
    pub fn delete_card(&mut self, question: &str) -> Result<Card> {
        let Some(index) = self.questions.iter().position(|q| q == question) else {
            tracing::warn!(question, "Question not found.");
            return Err(DeckError::NotFound(question.to_string()));
        };

        let removed = Card::new(self.questions.remove(index), self.answers.remove(index));
        self.cards = pair(&self.questions, &self.answers);
        tracing::info!(question, index, "deleted card");

        self.save()?;
        Ok(removed)
    }

    /// Write the questions file, then the answers file.
    pub fn save(&self) -> Result<()> {
        store::save(&self.question_file, &self.questions)?;
        store::save(&self.answer_file, &self.answers)
    }
}

fn pair(questions: &[String], answers: &[String]) -> Vec<Card> {
    questions
        .iter()
        .zip(answers)
        .map(|(q, a)| Card::new(q.as_str(), a.as_str()))
        .collect()
}

fn note_condition(load: store::Load, conditions: &mut Vec<DeckError>) -> Vec<String> {
    if let Some(condition) = load.condition() {
        conditions.push(condition);
    }
    load.into_lines()
}

fn ensure_single_line(field: &'static str, text: &str) -> Result<()> {
    if text.contains('\n') || text.contains('\r') {
        return Err(DeckError::EmbeddedNewline { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use std::path::Path;
    use tempfile::TempDir;

    fn deck_files(questions: &str, answers: &str) -> (TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let q = dir.path().join("questions");
        let a = dir.path().join("answers");
        std::fs::write(&q, questions).unwrap();
        std::fs::write(&a, answers).unwrap();
        (dir, q, a)
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn open_pairs_lines_positionally() {
        let (_dir, q, a) = deck_files("2+2\n3+3\n", "4\n6\n");
        let deck = Deck::open(&q, &a).unwrap();

        assert_eq!(deck.cards(), &[Card::new("2+2", "4"), Card::new("3+3", "6")]);
    }

    #[test]
    fn open_rejects_length_mismatch() {
        let (_dir, q, a) = deck_files("2+2\n3+3\n", "4\n");
        let result = Deck::open(&q, &a);

        assert!(matches!(
            result,
            Err(DeckError::LengthMismatch {
                questions: 2,
                answers: 1
            })
        ));
    }

    #[test]
    fn open_missing_files_gives_empty_deck() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Deck::open(dir.path().join("q"), dir.path().join("a")).unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn open_reports_missing_files() {
        let (dir, q, _a) = deck_files("", "");
        let absent = dir.path().join("absent");
        let deck = Deck::open(&q, &absent).unwrap();

        assert_eq!(deck.conditions().len(), 1);
        assert!(matches!(
            &deck.conditions()[0],
            DeckError::FileMissing { path } if path == &absent
        ));
    }

    #[test]
    fn open_existing_files_has_no_conditions() {
        let (_dir, q, a) = deck_files("2+2\n", "4\n");
        let deck = Deck::open(&q, &a).unwrap();
        assert!(deck.conditions().is_empty());
    }

    #[test]
    fn one_missing_file_is_a_mismatch() {
        let (dir, q, _a) = deck_files("2+2\n", "4\n");
        let result = Deck::open(&q, dir.path().join("absent"));
        assert!(matches!(result, Err(DeckError::LengthMismatch { .. })));
    }

    #[test]
    fn shuffle_keeps_cards_and_file_order() {
        let (_dir, q, a) = deck_files("a\nb\nc\nd\n", "1\n2\n3\n4\n");
        let mut deck = Deck::open(&q, &a).unwrap();
        let mut before = deck.cards().to_vec();

        deck.shuffle_with(&mut StdRng::seed_from_u64(7));
        let mut after = deck.cards().to_vec();

        before.sort_by(|x, y| x.question.cmp(&y.question));
        after.sort_by(|x, y| x.question.cmp(&y.question));
        assert_eq!(before, after);
        assert_eq!(deck.questions(), &["a", "b", "c", "d"]);
        assert_eq!(read(&q), "a\nb\nc\nd\n");
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        let (_dir, q, a) = deck_files("a\nb\nc\n", "1\n2\n3\n");
        let mut deck = Deck::open(&q, &a).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, usize> = HashMap::new();

        let rounds = 6000;
        for _ in 0..rounds {
            deck.shuffle_with(&mut rng);
            let order: String = deck.cards().iter().map(|c| c.question.as_str()).collect();
            *counts.entry(order).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "skewed permutation count {count}");
        }
    }

    #[test]
    fn add_card_appends_and_persists() {
        let (_dir, q, a) = deck_files("2+2\n", "4\n");
        let mut deck = Deck::open(&q, &a).unwrap();

        deck.add_card("3+3", "6").unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards().last(), Some(&Card::new("3+3", "6")));
        assert_eq!(read(&q), "2+2\n3+3\n");
        assert_eq!(read(&a), "4\n6\n");
    }

    #[test]
    fn add_card_allows_duplicates() {
        let (_dir, q, a) = deck_files("2+2\n", "4\n");
        let mut deck = Deck::open(&q, &a).unwrap();

        deck.add_card("2+2", "four").unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(read(&q), "2+2\n2+2\n");
    }

    #[test]
    fn add_card_keeps_shuffled_order() {
        let (_dir, q, a) = deck_files("a\nb\nc\n", "1\n2\n3\n");
        let mut deck = Deck::open(&q, &a).unwrap();
        deck.shuffle_with(&mut StdRng::seed_from_u64(3));
        let shuffled = deck.cards().to_vec();

        deck.add_card("d", "4").unwrap();

        assert_eq!(&deck.cards()[..3], shuffled.as_slice());
        assert_eq!(deck.cards()[3], Card::new("d", "4"));
    }

    #[test]
    fn add_card_trailing_whitespace_survives_reopen() {
        let (_dir, q, a) = deck_files("", "");
        let mut deck = Deck::open(&q, &a).unwrap();

        deck.add_card("Capital of France? ", "Paris \t").unwrap();
        let reopened = Deck::open(&q, &a).unwrap();

        assert_eq!(deck.cards(), &[Card::new("Capital of France?", "Paris")]);
        assert_eq!(reopened.cards(), deck.cards());
        assert_eq!(read(&a), "Paris\n");
    }

    #[test]
    fn add_card_keeps_leading_whitespace() {
        let (_dir, q, a) = deck_files("", "");
        let mut deck = Deck::open(&q, &a).unwrap();

        deck.add_card("  indented", "x").unwrap();
        let reopened = Deck::open(&q, &a).unwrap();
        assert_eq!(reopened.cards(), &[Card::new("  indented", "x")]);
    }

    #[test]
    fn add_card_rejects_newlines() {
        let (_dir, q, a) = deck_files("", "");
        let mut deck = Deck::open(&q, &a).unwrap();

        let result = deck.add_card("two\nlines", "x");
        assert!(matches!(
            result,
            Err(DeckError::EmbeddedNewline { field: "question" })
        ));
        assert!(deck.is_empty());
        assert_eq!(read(&q), "");
    }

    #[test]
    fn delete_card_removes_first_match_only() {
        let (_dir, q, a) = deck_files("x\ny\nx\n", "1\n2\n3\n");
        let mut deck = Deck::open(&q, &a).unwrap();

        let removed = deck.delete_card("x").unwrap();

        assert_eq!(removed, Card::new("x", "1"));
        assert_eq!(deck.cards(), &[Card::new("y", "2"), Card::new("x", "3")]);
        assert_eq!(read(&q), "y\nx\n");
        assert_eq!(read(&a), "2\n3\n");
    }

    #[test]
    fn delete_card_is_case_sensitive() {
        let (_dir, q, a) = deck_files("Rust\n", "lang\n");
        let mut deck = Deck::open(&q, &a).unwrap();

        assert!(matches!(deck.delete_card("rust"), Err(DeckError::NotFound(_))));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn delete_missing_question_changes_nothing() {
        let (_dir, q, a) = deck_files("2+2\n", "4\n");
        let mut deck = Deck::open(&q, &a).unwrap();

        let result = deck.delete_card("9+9");
        assert!(matches!(result, Err(DeckError::NotFound(ref s)) if s == "9+9"));
        assert_eq!(deck.cards(), &[Card::new("2+2", "4")]);
        assert_eq!(read(&q), "2+2\n");
        assert_eq!(read(&a), "4\n");
    }

    #[test]
    fn delete_card_discards_shuffle() {
        let (_dir, q, a) = deck_files("a\nb\nc\nd\ne\n", "1\n2\n3\n4\n5\n");
        let mut deck = Deck::open(&q, &a).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        while deck.cards()[0].question == "a" {
            deck.shuffle_with(&mut rng);
        }

        deck.delete_card("e").unwrap();

        let order: Vec<&str> = deck.cards().iter().map(|c| c.question.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn save_and_reopen_round_trips() {
        let (dir, q, a) = deck_files("2+2\n3+3\n", "4\n6\n");
        let deck = Deck::open(&q, &a).unwrap();

        let q2 = dir.path().join("q2");
        let a2 = dir.path().join("a2");
        store::save(&q2, deck.questions()).unwrap();
        store::save(&a2, deck.answers()).unwrap();

        let reopened = Deck::open(&q2, &a2).unwrap();
        assert_eq!(reopened.cards(), deck.cards());
    }
}
