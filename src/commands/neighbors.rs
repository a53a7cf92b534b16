//! Neighbors command

use serde_json::json;

use ladder_core::dictionary::{self, Dictionary};
use ladder_core::error::{LadderError, Result};
use ladder_core::graph::neighbors;

use crate::cli::{Cli, OutputFormat};

/// Execute the neighbors command
pub fn execute(cli: &Cli, dict: &Dictionary, word: &str) -> Result<()> {
    let word = word.trim().to_lowercase();
    if !dictionary::is_valid_word(&word) {
        return Err(LadderError::InvalidWord(word));
    }

    let found = neighbors(dict, &word);

    match cli.format {
        OutputFormat::Json => {
            let payload = json!({
                "word": word,
                "neighbors": found,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            if found.is_empty() {
                if !cli.quiet {
                    println!("No neighbors found for {}", word);
                }
            } else {
                for neighbor in &found {
                    println!("{}", neighbor);
                }
            }
        }
    }

    Ok(())
}
