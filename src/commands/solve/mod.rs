//! Solve command

mod human;
mod json;

use std::time::Instant;

use ladder_core::dictionary::{self, Dictionary};
use ladder_core::error::{LadderError, Result};
use ladder_core::graph::{solve, Algorithm};

use crate::cli::{Cli, OutputFormat};

/// Execute the solve command
pub fn execute(
    cli: &Cli,
    dict: &Dictionary,
    start: &str,
    end: &str,
    algorithm: Algorithm,
) -> Result<()> {
    let timer = Instant::now();

    let start = normalize(start)?;
    let end = normalize(end)?;

    if start.len() != end.len() {
        return Err(LadderError::LengthMismatch {
            start: start.clone(),
            start_len: start.len(),
            end: end.clone(),
            end_len: end.len(),
        });
    }

    let result = solve(dict, &start, &end, algorithm);

    if cli.verbose {
        tracing::debug!(elapsed = ?timer.elapsed(), "search");
    }

    match cli.format {
        OutputFormat::Json => json::output_json(&result)?,
        OutputFormat::Human => human::output_human(cli, &result),
    }

    Ok(())
}

/// Trim and lowercase user input, rejecting anything beyond `a-z`.
fn normalize(word: &str) -> Result<String> {
    let word = word.trim().to_lowercase();
    if !dictionary::is_valid_word(&word) {
        return Err(LadderError::InvalidWord(word));
    }
    Ok(word)
}
