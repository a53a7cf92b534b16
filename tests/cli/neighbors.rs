use predicates::prelude::*;

use super::support::{ladder, small_dict, write_dict};

#[test]
fn test_neighbors_deterministic_order() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["neighbors", "cot"])
        .assert()
        .success()
        .stdout("dot\ncat\ncog\n");
}

#[test]
fn test_neighbors_none_found() {
    let (_dir, dict) = write_dict(&["cat", "stone"]);
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["neighbors", "stone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No neighbors found for stone"));
}

#[test]
fn test_neighbors_quiet_suppresses_empty_message() {
    let (_dir, dict) = write_dict(&["cat", "stone"]);
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["--quiet", "neighbors", "stone"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_neighbors_json_output() {
    let (_dir, dict) = small_dict();
    let output = ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["--format", "json", "neighbors", "cot"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["word"], "cot");
    assert_eq!(parsed["neighbors"][0], "dot");
    assert_eq!(parsed["neighbors"][1], "cat");
    assert_eq!(parsed["neighbors"][2], "cog");
}

#[test]
fn test_neighbors_invalid_word_is_usage_error() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["neighbors", "c-t"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a lowercase alphabetic word"));
}
