//! Interactive menu around a deck.
//!
//! Every menu action reopens the deck from disk, so the files are the only
//! state carried between actions.

use flashcard_deck::{Console, Deck, DeckError};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fallback file names used when the requested files do not exist.
pub const DEFAULT_QUESTION_FILE: &str = "questions";
pub const DEFAULT_ANSWER_FILE: &str = "answers";

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),

    #[error("failed to create '{}': {source}", path.display())]
    Bootstrap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The question and answer files a session works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckFiles {
    pub questions: PathBuf,
    pub answers: PathBuf,
}

impl DeckFiles {
    pub fn defaults_in(dir: &Path) -> Self {
        Self {
            questions: dir.join(DEFAULT_QUESTION_FILE),
            answers: dir.join(DEFAULT_ANSWER_FILE),
        }
    }

    fn exist(&self) -> bool {
        self.questions.exists() && self.answers.exists()
    }

    /// Whether the question file has any content.
    fn has_questions(&self) -> bool {
        std::fs::metadata(&self.questions).map_or(false, |m| m.len() > 0)
    }
}

/// A top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TakeTest,
    AddQuestion,
    DeleteQuestion,
    Quit,
    Invalid,
}

impl MenuChoice {
    /// Parse a menu response. Taking the test is only offered for a non-empty deck.
    pub fn parse(input: &str, test_available: bool) -> Self {
        match input {
            "1" if test_available => Self::TakeTest,
            "2" => Self::AddQuestion,
            "3" => Self::DeleteQuestion,
            "4" => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<C> {
    console: C,
    data_dir: PathBuf,
}

impl<C: Console> Shell<C> {
    pub fn new(console: C, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            console,
            data_dir: data_dir.into(),
        }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Settle which files to use, prompting for any not configured.
    ///
    /// When either file is missing the session falls back to the default
    /// files in the data directory, creating whichever of those is absent.
    pub fn resolve_files(
        &mut self,
        questions: Option<PathBuf>,
        answers: Option<PathBuf>,
    ) -> Result<DeckFiles, ShellError> {
        let questions = match questions {
            Some(path) => path,
            None => self.prompt_path("Enter the question file: ")?,
        };
        let answers = match answers {
            Some(path) => path,
            None => self.prompt_path("Enter the answer file: ")?,
        };

        if questions.as_os_str().is_empty() || answers.as_os_str().is_empty() {
            self.console
                .write_line("Both question and answer files are required.")?;
        }

        let files = DeckFiles { questions, answers };
        if files.exist() {
            return Ok(files);
        }

        self.console
            .write_line("No existing question and answer files found.")?;
        self.console
            .write_line("...Creating new question and answer files...")?;

        let files = DeckFiles::defaults_in(&self.data_dir);
        create_if_missing(&files.questions)?;
        create_if_missing(&files.answers)?;
        tracing::info!(
            questions = %files.questions.display(),
            answers = %files.answers.display(),
            "using default deck files"
        );
        Ok(files)
    }

    /// Run the menu until the user quits or input ends.
    pub fn run(&mut self, files: &DeckFiles) -> Result<(), ShellError> {
        loop {
            let test_available = files.has_questions();

            self.console.write_line("Options Available:")?;
            if test_available {
                self.console.write_line("1. Take the test")?;
            }
            self.console.write_line("2. Add a question")?;
            self.console.write_line("3. Delete a question")?;
            self.console.write_line("4. Quit")?;

            let Some(option) = self.console.read_line("Choose an option: ")? else {
                return self.farewell();
            };

            let choice = MenuChoice::parse(&option, test_available);
            tracing::debug!(?choice, "menu selection");

            let result = match choice {
                MenuChoice::TakeTest => self.take_test(files),
                MenuChoice::AddQuestion => self.add_question(files),
                MenuChoice::DeleteQuestion => self.delete_question(files),
                MenuChoice::Quit => return self.farewell(),
                MenuChoice::Invalid => {
                    self.console
                        .write_line("Invalid option. Please try again.")?;
                    continue;
                }
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return self.farewell(),
                Err(DeckError::Console(e)) => return Err(ShellError::Console(e)),
                Err(DeckError::NotFound(_)) => {
                    self.console.write_line("Question not found.")?;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "menu action failed");
                    self.console.write_line(&format!("An error occurred: {}", e))?;
                    if !e.is_recoverable() {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn take_test(&mut self, files: &DeckFiles) -> flashcard_deck::Result<Flow> {
        let mut deck = Deck::open(&files.questions, &files.answers)?;
        deck.shuffle();
        deck.run_quiz(&mut self.console)?;
        Ok(Flow::Continue)
    }

    fn add_question(&mut self, files: &DeckFiles) -> flashcard_deck::Result<Flow> {
        let Some(question) = self.console.read_line("Enter the question: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(answer) = self.console.read_line("Enter the answer: ")? else {
            return Ok(Flow::Exit);
        };

        let mut deck = Deck::open(&files.questions, &files.answers)?;
        deck.add_card(&question, &answer)?;
        Ok(Flow::Continue)
    }

    fn delete_question(&mut self, files: &DeckFiles) -> flashcard_deck::Result<Flow> {
        let Some(question) = self.console.read_line("Enter the question to delete: ")? else {
            return Ok(Flow::Exit);
        };

        let mut deck = Deck::open(&files.questions, &files.answers)?;
        deck.delete_card(&question)?;
        Ok(Flow::Continue)
    }

    fn farewell(&mut self) -> Result<(), ShellError> {
        self.console.write_line("Thank you!")?;
        Ok(())
    }

    fn prompt_path(&mut self, prompt: &str) -> Result<PathBuf, ShellError> {
        let line = self.console.read_line(prompt)?.unwrap_or_default();
        Ok(PathBuf::from(line))
    }
}

fn create_if_missing(path: &Path) -> Result<(), ShellError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map(|_| ())
        .map_err(|source| ShellError::Bootstrap {
            path: path.to_path_buf(),
            source,
        })
}
