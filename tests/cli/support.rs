use std::io::Write;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::TempDir;

/// Get a Command for ladder
pub fn ladder() -> Command {
    cargo_bin_cmd!("ladder")
}

/// Write a dictionary file into a fresh temp dir and return both.
///
/// The dir must outlive the command run or the file disappears.
pub fn write_dict(words: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    for word in words {
        writeln!(file, "{}", word).unwrap();
    }
    (dir, path)
}

/// The small ladder-friendly dictionary most tests use.
pub fn small_dict() -> (TempDir, PathBuf) {
    write_dict(&["cat", "cot", "cog", "dog", "dot"])
}
