//! Greedy Best-First Search.

use tracing::trace;

use crate::dictionary::Dictionary;
use crate::graph::heuristic::hamming_distance;
use crate::graph::neighbors::neighbors;

use super::shared::{reconstruct, SearchOutcome, SearchState};

/// Expand in order of the Hamming estimate alone, ignoring path cost.
///
/// The first discovery of a word is final: no cost comparison, no
/// re-parenting. The ladder returned is valid but may be longer than the
/// shortest one. Fast and cheap when the estimate is informative.
pub fn search(dict: &Dictionary, start: &str, end: &str) -> SearchOutcome {
    let mut state = SearchState::new(start);
    state.push(0, hamming_distance(start, end));

    while let Some(node) = state.pop() {
        if state.arena[node].word == end {
            trace!(nodes_expanded = state.nodes_expanded, "goal reached");
            return SearchOutcome {
                path: reconstruct(&state.arena, node),
                nodes_expanded: state.nodes_expanded,
            };
        }

        let word = state.arena[node].word.clone();
        let new_cost = state.arena[node].cost + 1;
        for neighbor in neighbors(dict, &word) {
            if state.table.contains_key(&neighbor) {
                continue;
            }
            let priority = hamming_distance(&neighbor, end);
            let idx = state.insert(neighbor, Some(node), new_cost);
            state.push(idx, priority);
        }
    }

    trace!(nodes_expanded = state.nodes_expanded, "frontier exhausted");
    SearchOutcome {
        path: Vec::new(),
        nodes_expanded: state.nodes_expanded,
    }
}
