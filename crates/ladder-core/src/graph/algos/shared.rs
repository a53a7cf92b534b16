//! Bookkeeping shared by the three search strategies.
//!
//! Nodes live in a dense arena; the visited table and the frontier hold
//! indices into it, so the "one logical node, many referents" model needs
//! no shared mutable pointers. The frontier is a binary heap tolerant of
//! stale entries: a cost update pushes a fresh entry instead of removing
//! the old one, and pop discards entries whose recorded cost no longer
//! matches the arena.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// One word reached during a search.
#[derive(Debug)]
pub struct SearchNode {
    pub word: String,
    /// Arena index of the node this one was expanded from; `None` for the
    /// start node. Used only for path reconstruction.
    pub parent: Option<usize>,
    /// Edits taken from the start along the best known path (the g-cost).
    pub cost: u32,
}

/// Frontier entry: priority first, then insertion order, so equal
/// priorities pop FIFO.
#[derive(Debug)]
pub struct HeapEntry {
    pub priority: u32,
    pub seq: u64,
    pub node: usize,
    /// g-cost at push time; a mismatch against the arena marks the entry
    /// stale and pop skips it.
    pub cost_at_push: u32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Per-invocation search state: arena, word table, open set.
///
/// Local to one search; nothing survives the call.
pub struct SearchState {
    pub arena: Vec<SearchNode>,
    /// Word to arena index. At most one node per distinct word.
    pub table: HashMap<String, usize>,
    open: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
    pub nodes_expanded: usize,
}

impl SearchState {
    /// Seed the state with the start node at cost 0. The caller pushes the
    /// start entry itself since the initial priority depends on the
    /// strategy.
    pub fn new(start: &str) -> Self {
        let mut state = SearchState {
            arena: Vec::new(),
            table: HashMap::new(),
            open: BinaryHeap::new(),
            next_seq: 0,
            nodes_expanded: 0,
        };
        state.insert(start.to_string(), None, 0);
        state
    }

    /// Allocate a node for a newly discovered word.
    pub fn insert(&mut self, word: String, parent: Option<usize>, cost: u32) -> usize {
        let idx = self.arena.len();
        self.table.insert(word.clone(), idx);
        self.arena.push(SearchNode { word, parent, cost });
        idx
    }

    /// Push a frontier entry for `node` at `priority`.
    pub fn push(&mut self, node: usize, priority: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.open.push(Reverse(HeapEntry {
            priority,
            seq,
            node,
            cost_at_push: self.arena[node].cost,
        }));
    }

    /// Pop the best live entry, skipping stale ones left behind by cost
    /// updates.
    pub fn pop(&mut self) -> Option<usize> {
        while let Some(Reverse(entry)) = self.open.pop() {
            if self.arena[entry.node].cost == entry.cost_at_push {
                self.nodes_expanded += 1;
                return Some(entry.node);
            }
        }
        None
    }
}

/// Walk parent links from `node` back to the start, then reverse.
///
/// The start word comes first and `node`'s word last; when `node` is the
/// start itself the result is the single-element path.
pub fn reconstruct(arena: &[SearchNode], node: usize) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(node);
    while let Some(idx) = current {
        path.push(arena[idx].word.clone());
        current = arena[idx].parent;
    }
    path.reverse();
    path
}

/// What a strategy hands back to the dispatcher.
pub struct SearchOutcome {
    /// Ladder from start to end, or empty when none exists.
    pub path: Vec<String>,
    pub nodes_expanded: usize,
}
