use predicates::prelude::*;

use super::support::{ladder, small_dict, write_dict};

#[test]
fn test_solve_ucs_finds_shortest_ladder() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "cat", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat -> cot -> dot -> dog"))
        .stdout(predicate::str::contains("Edits: 3"))
        .stdout(predicate::str::contains("Nodes expanded:"));
}

#[test]
fn test_solve_astar_matches_ucs() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "cat", "dog", "--algorithm", "astar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat -> cot -> dot -> dog"));
}

#[test]
fn test_solve_greedy_reaches_goal() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "cat", "dog", "-a", "greedy"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cat"))
        .stdout(predicate::str::contains("dog"));
}

#[test]
fn test_solve_quiet_prints_ladder_only() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["--quiet", "solve", "cat", "dog"])
        .assert()
        .success()
        .stdout("cat -> cot -> dot -> dog\n");
}

#[test]
fn test_solve_no_ladder_succeeds_with_message() {
    let (_dir, dict) = write_dict(&["ice", "ace", "fog"]);
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "ice", "fog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ladder found from ice to fog"));
}

#[test]
fn test_solve_uppercase_input_is_normalized() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "CAT", "Dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat -> cot -> dot -> dog"));
}

#[test]
fn test_solve_json_output() {
    let (_dir, dict) = small_dict();
    let output = ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["--format", "json", "solve", "cat", "dog"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["start"], "cat");
    assert_eq!(parsed["end"], "dog");
    assert_eq!(parsed["algorithm"], "ucs");
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["edits"], 3);
    assert_eq!(parsed["words"][0], "cat");
    assert_eq!(parsed["words"][3], "dog");
    assert!(parsed["nodes_expanded"].as_u64().unwrap() > 0);
}

#[test]
fn test_solve_json_not_found() {
    let (_dir, dict) = write_dict(&["ice", "ace", "fog"]);
    let output = ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["--format", "json", "solve", "ice", "fog"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["found"], false);
    assert_eq!(parsed["words"].as_array().unwrap().len(), 0);
    assert_eq!(parsed["edits"], 0);
}

#[test]
fn test_solve_unknown_algorithm_is_usage_error() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "cat", "dog", "--algorithm", "bfs"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_solve_length_mismatch_is_usage_error() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "cat", "stone"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("length"));
}

#[test]
fn test_solve_invalid_word_is_usage_error() {
    let (_dir, dict) = small_dict();
    ladder()
        .arg("--dict")
        .arg(&dict)
        .args(["solve", "c4t", "dog"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a lowercase alphabetic word"));
}

#[test]
fn test_solve_missing_dictionary_is_data_error() {
    ladder()
        .args(["--dict", "/nonexistent/words.txt", "solve", "cat", "dog"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("dictionary not found"));
}

#[test]
fn test_solve_json_error_envelope_on_stderr() {
    let output = ladder()
        .args([
            "--format",
            "json",
            "--dict",
            "/nonexistent/words.txt",
            "solve",
            "cat",
            "dog",
        ])
        .assert()
        .failure()
        .code(3)
        .get_output()
        .stderr
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["error"]["type"], "dictionary_not_found");
    assert!(parsed["error"]["message"]
        .as_str()
        .unwrap()
        .contains("words.txt"));
}

#[test]
fn test_dict_flag_via_environment() {
    let (_dir, dict) = small_dict();
    ladder()
        .env("LADDER_DICT", &dict)
        .args(["--quiet", "solve", "cat", "dog"])
        .assert()
        .success()
        .stdout("cat -> cot -> dot -> dog\n");
}
