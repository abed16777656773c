pub mod config;
pub mod shell;

use clap::Parser;
use flashcard_deck::LineConsole;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::shell::Shell;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Config {
        questions,
        answers,
        data_dir,
        ..
    } = config;

    let console = LineConsole::new(std::io::stdin().lock(), std::io::stdout().lock());
    let mut shell = Shell::new(console, data_dir);

    let files = shell.resolve_files(questions, answers)?;
    tracing::info!(
        questions = %files.questions.display(),
        answers = %files.answers.display(),
        "starting session"
    );
    shell.run(&files)?;

    Ok(())
}
