//! CLI `chat` command — interactive ingredient search in the terminal.

use anyhow::Result;
use indicatif::ProgressBar;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::config::PantryConfig;
use crate::error::PantryError;
use crate::recipes::search::Recommender;
use crate::server::EMPTY_QUERY_WARNING;

const PROMPT: &str = "Enter ingredients (e.g., 'Egg, Onion, Tomato'): ";

/// Build the corpus behind a spinner, then run the prompt loop on stdin/stdout.
pub fn chat(config: &PantryConfig) -> Result<()> {
    println!("Indian Recipe Chatbot");
    println!("Enter ingredients you have, and I'll suggest recipes for you!");
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating recipe embeddings... please wait");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let recommender = Recommender::startup(config, false);
    spinner.finish_and_clear();
    let recommender = recommender?;
    println!("Recipe embeddings ready! ({} recipes)", recommender.corpus().len());
    println!("Type 'quit' to exit.");
    println!();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&recommender, stdin.lock(), stdout.lock())
}

/// Prompt, read a line, answer it; repeat until `quit`, `exit` or EOF.
pub fn run_session(
    recommender: &Recommender,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let query = line.trim();
        if ["quit", "exit"].iter().any(|cmd| query.eq_ignore_ascii_case(cmd)) {
            break;
        }

        match recommender.recommend(query) {
            Ok(results) => {
                writeln!(out)?;
                super::write_results(&mut out, &results)?;
            }
            Err(PantryError::EmptyQuery) => writeln!(out, "{EMPTY_QUERY_WARNING}")?,
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                writeln!(out, "Search failed: {e}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
