//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

/// Quiz yourself from a question file and a line-aligned answer file.
#[derive(Parser, Debug, Clone)]
#[command(name = "flashcards", version)]
pub struct Config {
    /// Question file; prompted for when not given
    #[arg(long, short, env = "FLASHCARDS_QUESTIONS")]
    pub questions: Option<PathBuf>,

    /// Answer file; prompted for when not given
    #[arg(long, short, env = "FLASHCARDS_ANSWERS")]
    pub answers: Option<PathBuf>,

    /// Directory for the fallback `questions` and `answers` files
    #[arg(long, env = "FLASHCARDS_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, short, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Tracing filter directive, preferring RUST_LOG.
    pub fn log_filter(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.log_level.clone())
    }
}
