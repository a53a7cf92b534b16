//! Uniform Cost Search.

use tracing::trace;

use crate::dictionary::Dictionary;
use crate::graph::neighbors::neighbors;

use super::shared::{reconstruct, SearchOutcome, SearchState};

/// Expand in order of path cost alone. With unit edge costs this finds a
/// shortest ladder whenever one exists.
pub fn search(dict: &Dictionary, start: &str, end: &str) -> SearchOutcome {
    let mut state = SearchState::new(start);
    state.push(0, 0);

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
            match state.table.get(&neighbor).copied() {
                None => {
                    let idx = state.insert(neighbor, Some(node), new_cost);
                    state.push(idx, new_cost);
                }
                Some(idx) if new_cost < state.arena[idx].cost => {
                    // Cheaper route to a known word: rewrite its record and
                    // reinsert; the old frontier entry goes stale.
                    state.arena[idx].cost = new_cost;
                    state.arena[idx].parent = Some(node);
                    state.push(idx, new_cost);
                }
                Some(_) => {}
            }
        }
    }

    trace!(nodes_expanded = state.nodes_expanded, "frontier exhausted");
    SearchOutcome {
        path: Vec::new(),
        nodes_expanded: state.nodes_expanded,
    }
}
