//! CLI argument parsing
//!
//! Global flags: --dict, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use ladder_core::format::OutputFormat;
use ladder_core::graph::Algorithm;
use parse::{parse_algorithm, parse_format};

/// Ladder - word ladder solver
#[derive(Parser, Debug)]
#[command(name = "ladder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dictionary file, one word per line
    #[arg(long, global = true, env = "LADDER_DICT", default_value = "words.txt")]
    pub dict: PathBuf,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (overrides LADDER_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a ladder between two words
    Solve {
        /// Starting word
        start: String,

        /// Target word
        end: String,

        /// Search strategy
        #[arg(long, short, value_parser = parse_algorithm, default_value = "ucs")]
        algorithm: Algorithm,
    },

    /// List the one-letter neighbors of a word
    Neighbors {
        /// Word to expand
        word: String,
    },
}
