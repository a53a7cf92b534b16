//! Command dispatch logic

use std::time::Instant;

use ladder_core::dictionary::Dictionary;
use ladder_core::error::Result;
use ladder_core::trace_time;

use crate::cli::{Cli, Commands};

use super::{neighbors, solve};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Every command expands words against the dictionary; load it once.
    let dict = Dictionary::load(&cli.dict)?;

    trace_time!(start, "load_dictionary", words = dict.len());

    match &cli.command {
        Commands::Solve {
            start: from,
            end,
            algorithm,
        } => solve::execute(cli, &dict, from, end, *algorithm),
        Commands::Neighbors { word } => neighbors::execute(cli, &dict, word),
    }
}
