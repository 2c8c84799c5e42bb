//! Integration tests for slot refresh against a local stub node.

mod common;

use common::{Sandbox, current_path, serve, target_path};

#[test]
fn test_refresh_without_url_fails() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["add", "p1"]);

    let output = sandbox.run(&["refresh"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Please set a HyperBEAM node URL first"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_refresh_all_reports_behind_and_synced() {
    let base = serve(vec![
        (target_path("behind"), 200, r#"{"slot":10}"#.to_string()),
        (current_path("behind"), 200, r#"{"slot":7}"#.to_string()),
        (target_path("synced"), 200, r#"{"slot":42}"#.to_string()),
        (current_path("synced"), 200, "42".to_string()),
    ]);

    let sandbox = Sandbox::new();
    sandbox.run_ok(&["url", &base]);
    sandbox.run_ok(&["add", "behind"]);
    sandbox.run_ok(&["add", "synced"]);

    let stdout = sandbox.run_ok(&["refresh", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("refresh --json is JSON");

    assert_eq!(value["notices"][0]["kind"], "all_refreshed");
    assert_eq!(value["notices"][0]["count"], 2);

    let rows = value["rows"].as_array().expect("rows");
    assert_eq!(rows[0]["id"], "behind");
    assert_eq!(rows[0]["current_slot"], 7);
    assert_eq!(rows[0]["target_slot"], 10);
    assert_eq!(rows[0]["status"], "behind");
    assert_eq!(rows[1]["status"], "synced");
    assert_eq!(rows[1]["current_slot"], 42);
}

#[test]
fn test_refresh_single_partial_failure_warns() {
    let base = serve(vec![(target_path("p1"), 200, r#"{"slot":5}"#.to_string())]);

    let sandbox = Sandbox::new();
    sandbox.run_ok(&["url", &base]);
    sandbox.run_ok(&["add", "p1"]);

    let output = sandbox.run(&["refresh", "p1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("N/A"), "stdout: {}", stdout);
    assert!(stdout.contains("No data"), "stdout: {}", stdout);
    assert!(
        stderr.contains("Some data could not be fetched for p1"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_refresh_untracked_process_fails() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["url", "http://127.0.0.1:9"]);

    let output = sandbox.run(&["refresh", "ghost"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not tracked"), "stderr: {}", stderr);
}

#[test]
fn test_refreshed_slots_are_not_persisted() {
    let base = serve(vec![
        (target_path("p1"), 200, r#"{"slot":3}"#.to_string()),
        (current_path("p1"), 200, r#"{"slot":3}"#.to_string()),
    ]);

    let sandbox = Sandbox::new();
    sandbox.run_ok(&["url", &base]);
    sandbox.run_ok(&["add", "p1"]);
    sandbox.run_ok(&["refresh"]);

    let stdout = sandbox.run_ok(&["list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("JSON");
    assert!(value["rows"][0]["current_slot"].is_null());
    assert_eq!(value["rows"][0]["status"], "no_data");
}

#[test]
fn test_refresh_all_with_no_processes_reports_completion() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["url", "http://127.0.0.1:9"]);

    let stdout = sandbox.run_ok(&["refresh"]);
    assert!(stdout.contains("Refreshed all processes (0)"), "stdout: {}", stdout);
}
