//! One-letter-substitution neighbor generation.

use crate::dictionary::Dictionary;

/// All dictionary words differing from `word` in exactly one position.
///
/// Candidates are generated position by position, cycling `a..z` in order
/// and skipping the original letter, so the output order is deterministic.
/// Equal-priority frontier entries inherit this order through their
/// insertion sequence, which fixes the tie-break behavior of the search
/// strategies.
///
/// Costs `O(len * 26)` membership probes per call; nothing is cached.
pub fn neighbors(dict: &Dictionary, word: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut bytes: Vec<u8> = word.bytes().collect();

    for i in 0..bytes.len() {
        let original = bytes[i];
        for letter in b'a'..=b'z' {
            if letter == original {
                continue;
            }
            bytes[i] = letter;
            // Substituting a single byte into a multi-byte sequence can
            // produce invalid UTF-8; such candidates cannot be dictionary
            // words, so they are skipped.
            if let Ok(candidate) = std::str::from_utf8(&bytes) {
                if dict.contains(candidate) {
                    out.push(candidate.to_string());
                }
            }
        }
        bytes[i] = original;
    }

    out
}
