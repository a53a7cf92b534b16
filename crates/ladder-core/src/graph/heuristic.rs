//! Remaining-distance estimate for goal-directed search.

/// Hamming distance: the count of positions where `word` and `goal` differ.
///
/// Only meaningful for equal-length words (extra trailing characters are
/// ignored). The raw mismatch count is admissible and consistent for the
/// unit-cost one-letter-substitution graph: it never overestimates the true
/// remaining edit count and drops by at most one per edge, which is what
/// lets A* keep its optimality guarantee. Deliberately unscaled - a legacy
/// variant scaled by `100 / length` with integer truncation, which voids
/// that guarantee.
pub fn hamming_distance(word: &str, goal: &str) -> u32 {
    word.bytes().zip(goal.bytes()).filter(|(a, b)| a != b).count() as u32
}
