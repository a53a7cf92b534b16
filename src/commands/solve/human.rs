use ladder_core::graph::LadderResult;

use crate::cli::Cli;

/// Output in human-readable format
pub fn output_human(cli: &Cli, result: &LadderResult) {
    if !result.found {
        if !cli.quiet {
            println!("No ladder found from {} to {}", result.start, result.end);
        }
        return;
    }

    println!("{}", result.words.join(" -> "));

    if !cli.quiet {
        println!("Edits: {}", result.edits);
        println!("Nodes expanded: {}", result.nodes_expanded);
    }
}
