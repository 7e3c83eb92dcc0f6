//! Integration tests for the `slot` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the suggest and free
//! subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: path to the suggest_request.json fixture.
fn suggest_request_path() -> &'static str {
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/suggest_request.json"
    )
}

/// Helper: path to the free_request.json fixture.
fn free_request_path() -> &'static str {
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/free_request.json"
    )
}

fn suggest_request() -> String {
    std::fs::read_to_string(suggest_request_path()).expect("suggest fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Suggest subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn suggest_stdin_to_stdout() {
    let output = Command::cargo_bin("slot")
        .unwrap()
        .arg("suggest")
        .write_stdin(suggest_request())
        .output()
        .expect("suggest should run");

    assert!(output.status.success());
    let suggestions: Value = serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    let suggestions = suggestions.as_array().expect("output is an array");

    // The fixture generates 9 candidates; only the top 5 survive. Bob's
    // 09:00-10:00 meeting pushes the conflict-free 10:00+ slots to the top.
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0]["start"], "2026-03-16T10:00:00Z");
    assert_eq!(suggestions[0]["score"], 100);
    assert_eq!(suggestions[0]["description"], "all participants available");
}

#[test]
fn suggest_file_to_file() {
    // Unique per process so concurrent test runs never clobber each other.
    let output_path = std::env::temp_dir().join(format!(
        "slot-test-suggest-output-{}.json",
        std::process::id()
    ));
    let output_path = output_path.to_str().unwrap();
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("slot")
        .unwrap()
        .args(["suggest", "-i", suggest_request_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    let suggestions: Value = serde_json::from_str(&content).expect("file must contain JSON");
    assert_eq!(suggestions.as_array().unwrap().len(), 5);

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn suggest_scores_are_descending() {
    let output = Command::cargo_bin("slot")
        .unwrap()
        .args(["suggest", "-i", suggest_request_path()])
        .output()
        .expect("suggest should run");

    let suggestions: Value = serde_json::from_slice(&output.stdout).unwrap();
    let scores: Vec<i64> = suggestions
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["score"].as_i64().unwrap())
        .collect();

    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "scores must be descending: {scores:?}");
    }
}

#[test]
fn suggest_invalid_json_fails() {
    Command::cargo_bin("slot")
        .unwrap()
        .arg("suggest")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse scheduling request"));
}

#[test]
fn suggest_zero_duration_fails() {
    let request = suggest_request().replace("\"duration_minutes\": 60", "\"duration_minutes\": 0");

    Command::cargo_bin("slot")
        .unwrap()
        .arg("suggest")
        .write_stdin(request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compute slot suggestions"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_lists_qualifying_gaps() {
    let output = Command::cargo_bin("slot")
        .unwrap()
        .args(["free", "-i", free_request_path()])
        .output()
        .expect("free should run");

    assert!(output.status.success());
    let slots: Value = serde_json::from_slice(&output.stdout).unwrap();
    let slots = slots.as_array().unwrap();

    // 08-09, 10-14, 15-17 — all at least 60 minutes.
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["start"], "2026-03-16T08:00:00Z");
    assert_eq!(slots[1]["duration_minutes"], 240);
}

#[test]
fn free_first_prints_single_slot() {
    let output = Command::cargo_bin("slot")
        .unwrap()
        .args(["free", "--first", "-i", free_request_path()])
        .output()
        .expect("free should run");

    assert!(output.status.success());
    let slot: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(slot["start"], "2026-03-16T08:00:00Z");
    assert_eq!(slot["duration_minutes"], 60);
}

#[test]
fn free_participant_view_ignores_other_commitments() {
    // The fixture blocks alice 09-10 and bob 14-15; alice's own view has a
    // single 10:00-17:00 gap after her meeting, ignoring bob's.
    let output = Command::cargo_bin("slot")
        .unwrap()
        .args(["free", "--participant", "alice", "-i", free_request_path()])
        .output()
        .expect("free should run");

    assert!(output.status.success());
    let slots: Value = serde_json::from_slice(&output.stdout).unwrap();
    let slots = slots.as_array().unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["start"], "2026-03-16T08:00:00Z");
    assert_eq!(slots[1]["start"], "2026-03-16T10:00:00Z");
    assert_eq!(slots[1]["duration_minutes"], 420);
}

#[test]
fn free_first_with_no_qualifying_slot_prints_null() {
    let request = r#"{
        "busy_intervals": [
            {"participant_id": "alice", "start": "2026-03-16T08:00:00Z", "end": "2026-03-16T17:00:00Z"}
        ],
        "window_start": "2026-03-16T08:00:00Z",
        "window_end": "2026-03-16T17:00:00Z",
        "min_duration_minutes": 30
    }"#;

    Command::cargo_bin("slot")
        .unwrap()
        .args(["free", "--first"])
        .write_stdin(request)
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn free_invalid_json_fails() {
    Command::cargo_bin("slot")
        .unwrap()
        .arg("free")
        .write_stdin("[not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse free-time request"));
}
