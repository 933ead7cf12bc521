//! End-to-end tests for the console harness output

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_demo-headless"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to run demo-headless")
}

#[test]
fn test_batch_json_is_parseable_with_logging_enabled() {
    let output = run(&["batch", "--json"]);
    assert!(output.status.success());

    let entries: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be pure JSON");
    let entries = entries.as_array().expect("top level is an array");
    assert_eq!(entries.len(), 60 + 10);

    let first = &entries[0];
    assert_eq!(first["value"], 1.0);
    assert_eq!(first["from"]["Distance"], "Kilometers");
    assert_eq!(first["to"]["Distance"], "Miles");
    assert!(first["outcome"]["Ok"].is_f64());

    // Batch summaries are still logged, just not on stdout
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Batch distance conversions"));
}

#[test]
fn test_verbose_logging_stays_off_stdout() {
    let output = run(&["--verbose", "convert", "10", "km", "mi"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "10 Kilometers = 6.2137 Miles");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Converted 10 Kilometers to"));
}

#[test]
fn test_mixed_family_convert_fails() {
    let output = run(&["convert", "1", "km", "ha"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Cannot convert from Kilometers to Hectares"));
}

#[test]
fn test_check_subcommand_passes() {
    let output = run(&["check"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("PASS").count(), 6);
    assert!(!stdout.contains("FAIL"));
}
