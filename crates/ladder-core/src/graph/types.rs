use std::fmt;

use serde::Serialize;

/// Search strategy for `find_path`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Uniform Cost Search - shortest ladder, ignores the goal until reached
    Ucs,
    /// Greedy Best-First Search - fast, not guaranteed shortest
    Greedy,
    /// A* - shortest ladder, goal-directed
    AStar,
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ucs" => Ok(Algorithm::Ucs),
            "greedy" => Ok(Algorithm::Greedy),
            "astar" => Ok(Algorithm::AStar),
            other => Err(format!(
                "unknown algorithm '{}' (expected: ucs, greedy, astar)",
                other
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Ucs => write!(f, "ucs"),
            Algorithm::Greedy => write!(f, "greedy"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

/// Complete search result
#[derive(Debug, Clone, Serialize)]
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub algorithm: String,
    pub found: bool,
    /// The ladder from start to end, inclusive; empty when not found.
    pub words: Vec<String>,
    /// Number of one-letter edits along the ladder.
    pub edits: usize,
    /// Nodes popped from the frontier before the search ended.
    pub nodes_expanded: usize,
}
