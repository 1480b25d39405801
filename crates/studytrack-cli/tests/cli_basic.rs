//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studytrack-cli", "--"])
        .args(args)
        .env("STUDYTRACK_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_status() {
    let (stdout, _, code) = run_cli(&["status"]);
    assert_eq!(code, 0, "status failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("status is JSON");
    assert!(parsed["streak"].is_u64());
    assert_eq!(parsed["weekly"].as_array().unwrap().len(), 7);
}

#[test]
fn test_stats_today() {
    let (stdout, _, code) = run_cli(&["stats", "today"]);
    assert_eq!(code, 0, "stats today failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stats is JSON");
    assert!(parsed["seconds"].is_u64());
}

#[test]
fn test_stats_streak() {
    let (stdout, _, code) = run_cli(&["stats", "streak"]);
    assert_eq!(code, 0, "stats streak failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["streak"].is_u64());
}

#[test]
fn test_stats_weekly() {
    let (stdout, _, code) = run_cli(&["stats", "weekly"]);
    assert_eq!(code, 0, "stats weekly failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 7);
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("storage.file_name"));
}

#[test]
fn test_config_get() {
    let (_, _, code) = run_cli(&["config", "get", "watch.assume_window_active"]);
    assert_eq!(code, 0, "config get failed");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "no.such_key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_set_roundtrip() {
    let (_, _, code) = run_cli(&["config", "set", "watch.assume_window_active", "true"]);
    assert_eq!(code, 0, "config set failed");
    let (stdout, _, code) = run_cli(&["config", "get", "watch.assume_window_active"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_watch_bounded_session() {
    let (stdout, _, code) = run_cli(&["watch", "--duration-secs", "2"]);
    assert_eq!(code, 0, "watch failed");
    let mut lines = stdout.lines();
    let started: serde_json::Value =
        serde_json::from_str(lines.next().expect("started event")).unwrap();
    assert_eq!(started["type"], "WatchStarted");
    let stopped: serde_json::Value =
        serde_json::from_str(lines.next().expect("stopped event")).unwrap();
    assert_eq!(stopped["type"], "WatchStopped");
}
