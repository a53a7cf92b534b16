//! A* search.

use tracing::trace;

use crate::dictionary::Dictionary;
use crate::graph::heuristic::hamming_distance;
use crate::graph::neighbors::neighbors;

use super::shared::{reconstruct, SearchOutcome, SearchState};

/// Expand in order of path cost plus the Hamming estimate to the goal.
///
/// The estimate is admissible and consistent, so the first pop of the end
/// word carries a shortest ladder; A* matches UCS on path length while
/// typically expanding fewer nodes.
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
            match state.table.get(&neighbor).copied() {
                None => {
                    let priority = new_cost + hamming_distance(&neighbor, end);
                    let idx = state.insert(neighbor, Some(node), new_cost);
                    state.push(idx, priority);
                }
                Some(idx) if new_cost < state.arena[idx].cost => {
                    state.arena[idx].cost = new_cost;
                    state.arena[idx].parent = Some(node);
                    let priority = new_cost + hamming_distance(&state.arena[idx].word, end);
                    state.push(idx, priority);
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
