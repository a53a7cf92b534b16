//! Search strategies over the implicit word graph.
//!
//! Words are nodes; an edge joins two dictionary words differing in exactly
//! one letter. Edges cost 1. No adjacency list is ever built: neighbors are
//! generated on demand during expansion.

pub mod astar;
pub mod greedy;
pub mod shared;
pub mod ucs;

use tracing::{debug, instrument};

use crate::dictionary::Dictionary;

use super::types::{Algorithm, LadderResult};

/// Run `algorithm` from `start` to `end` and package the full result.
#[instrument(skip_all, fields(start = %start, end = %end, algorithm = %algorithm))]
pub fn solve(dict: &Dictionary, start: &str, end: &str, algorithm: Algorithm) -> LadderResult {
    let outcome = match algorithm {
        Algorithm::Ucs => ucs::search(dict, start, end),
        Algorithm::Greedy => greedy::search(dict, start, end),
        Algorithm::AStar => astar::search(dict, start, end),
    };

    debug!(
        found = !outcome.path.is_empty(),
        nodes_expanded = outcome.nodes_expanded,
        "search finished"
    );

    LadderResult {
        start: start.to_string(),
        end: end.to_string(),
        algorithm: algorithm.to_string(),
        found: !outcome.path.is_empty(),
        edits: outcome.path.len().saturating_sub(1),
        words: outcome.path,
        nodes_expanded: outcome.nodes_expanded,
    }
}

/// The ladder alone: start to end inclusive, empty when none exists.
pub fn find_path(dict: &Dictionary, start: &str, end: &str, algorithm: Algorithm) -> Vec<String> {
    solve(dict, start, end, algorithm).words
}

/// String-dispatch variant for callers holding an algorithm name.
///
/// Names parse case-insensitively; an unrecognized name yields an empty
/// ladder rather than an error, matching the lenient contract this entry
/// point has always had.
pub fn find_path_named(dict: &Dictionary, start: &str, end: &str, algorithm: &str) -> Vec<String> {
    match algorithm.parse::<Algorithm>() {
        Ok(algorithm) => find_path(dict, start, end, algorithm),
        Err(reason) => {
            debug!(%reason, "returning empty ladder");
            Vec::new()
        }
    }
}
