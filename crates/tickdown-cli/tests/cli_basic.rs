//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs. They avoid mutating the countdown so they stay
//! order-independent.

use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tickdown-cli", "--"])
        .args(args)
        .env("TICKDOWN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_timer_status() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "Timer status failed");
    assert!(stdout.contains("StateSnapshot"));
}

#[test]
fn test_timer_start_zero_is_noop() {
    let (stdout, _, code) = run_cli(&["timer", "start", "--minutes", "0", "--seconds", "0"]);
    assert_eq!(code, 0, "Timer start failed");
    // Zero duration never starts; the unchanged snapshot is printed.
    assert!(stdout.contains("StateSnapshot"));
}

#[test]
fn test_timer_say_seconds_only_is_noop() {
    let (stdout, _, code) = run_cli(&["timer", "say", "set alarm for 30 seconds"]);
    assert_eq!(code, 0, "Timer say failed");
    assert!(stdout.contains("StateSnapshot"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "timer.default_minutes"]);
    assert_eq!(code, 0, "Config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "get", "timer.no_such_key"]);
    assert_ne!(code, 0, "Unknown key unexpectedly succeeded");
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "Config list failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("config list is not valid JSON");
    assert!(parsed.get("notifications").is_some());
}

#[test]
fn test_permissions_list() {
    let (stdout, _, code) = run_cli(&["permissions", "list"]);
    assert_eq!(code, 0, "Permissions list failed");
    assert!(stdout.contains("SYSTEM_ALERT_WINDOW"));
    assert!(stdout.contains("WAKE_LOCK"));
}

#[test]
fn test_widget_status() {
    let (stdout, _, code) = run_cli(&["widget", "status"]);
    assert_eq!(code, 0, "Widget status failed");
    assert!(stdout.contains("position"));
}

#[test]
fn test_widget_tap_activates() {
    let (stdout, _, code) = run_cli(&["widget", "tap"]);
    assert_eq!(code, 0, "Widget tap failed");
    assert!(stdout.contains("WidgetActivated"));
    assert!(stdout.contains("WidgetSnapped"));
}
