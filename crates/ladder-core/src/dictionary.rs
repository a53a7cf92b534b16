//! Dictionary view for word ladder searches.
//!
//! An immutable set of lowercase words queried only by membership test.
//! The search never mutates it, so one dictionary can back any number of
//! independent searches.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LadderError, Result};

/// In-memory word list, keyed by exact lowercase spelling.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a word list from a file, one word per line.
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped. This
    /// matches how the common `words_alpha.txt`-style lists are distributed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LadderError::DictionaryNotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        if words.is_empty() {
            return Err(LadderError::EmptyDictionary {
                path: path.to_path_buf(),
            });
        }

        Ok(Dictionary { words })
    }

    /// Membership test, the only query the search needs.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Dictionary {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Dictionary {
            words: iter.into_iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Check the shape the search assumes: non-empty, lowercase ASCII alphabetic.
///
/// The search core itself does not validate its inputs; callers are expected
/// to gate words through this before handing them over.
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
