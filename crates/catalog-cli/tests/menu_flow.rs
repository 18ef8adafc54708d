//! Full-session tests driving the compiled binary over piped stdio.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_catalog"))
}

/// Spawn a session, feed it the script line by line, and collect its output.
fn run_session(args: &[&str], script: &str) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn catalog");
    child
        .stdin
        .as_mut()
        .expect("piped stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    child.wait_with_output().expect("collect output")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be utf-8")
}

#[test]
fn test_exit_choice_terminates_with_success() {
    let output = run_session(&["--quiet"], "6\n");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Library Menu:"));
    assert!(stdout.contains("Exiting..."));
}

#[test]
fn test_end_of_input_terminates_with_success() {
    let output = run_session(&["--quiet"], "");
    assert!(output.status.success());
}

#[test]
fn test_banner_respects_quiet() {
    let with_banner = stdout_of(&run_session(&[], "6\n"));
    assert!(with_banner.contains("in-memory library session"));
    let without = stdout_of(&run_session(&["--quiet"], "6\n"));
    assert!(!without.contains("in-memory library session"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let output = run_session(&["--quiet"], "7\n6\n");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Invalid choice!"));
    assert_eq!(stdout.matches("Library Menu:").count(), 2);
}

#[test]
fn test_seeded_catalog_lists_in_plain_format() {
    let stdout = stdout_of(&run_session(&["--quiet", "--format", "plain"], "1\n6\n"));
    assert!(stdout.contains("ID: 1 | Title: C++ Programming | Status: Available"));
    assert!(stdout.contains("ID: 2 | Title: Data Structures | Status: Available"));
}

#[test]
fn test_seeded_catalog_lists_in_table_format() {
    let stdout = stdout_of(&run_session(&["--quiet", "--format", "table"], "1\n6\n"));
    assert!(stdout.contains("C++ Programming"));
    assert!(stdout.contains("Status"));
}

#[test]
fn test_issue_then_return_round_trip() {
    let script = "2\n101\n1\n1\n3\n101\n1\n1\n6\n";
    let stdout = stdout_of(&run_session(&["--quiet", "--format", "plain"], script));
    assert!(stdout.contains("Book issued!"));
    assert!(stdout.contains("ID: 1 | Title: C++ Programming | Status: Issued"));
    assert!(stdout.contains("Book returned!"));
    let available = "ID: 1 | Title: C++ Programming | Status: Available";
    assert!(stdout.matches(available).count() >= 1);
}

#[test]
fn test_transactions_view_drains_the_log() {
    let script = "2\n101\n1\n3\n101\n1\n4\n4\n6\n";
    let stdout = stdout_of(&run_session(&["--quiet", "--format", "plain"], script));
    assert_eq!(stdout.matches("Recent Issued Books:").count(), 2);
    assert_eq!(stdout.matches("Recent Returned Books:").count(), 2);
    assert_eq!(stdout.matches("No recent issues.").count(), 1);
    assert_eq!(stdout.matches("No recent returns.").count(), 1);
}

#[test]
fn test_loan_limit_reported_on_fourth_issue() {
    let script = "2\n101\n1\n2\n101\n2\n2\n101\n1\n2\n101\n2\n6\n";
    let stdout = stdout_of(&run_session(&["--quiet", "--format", "plain"], script));
    assert_eq!(stdout.matches("Book issued!").count(), 3);
    assert!(stdout.contains("Error: Max issue limit reached"));
}

#[test]
fn test_unknown_ids_are_reported_and_recoverable() {
    let script = "2\n999\n1\n2\n101\n999\n5\n999\n6\n";
    let output = run_session(&["--quiet", "--format", "plain"], script);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Error: Invalid Member ID: 999"));
    assert!(stdout.contains("Error: Invalid Book ID: 999"));
}

#[test]
fn test_json_format_emits_parseable_documents() {
    let script = "1\n2\n101\n1\n4\n6\n";
    let stdout = stdout_of(&run_session(&["--quiet", "--format", "json"], script));
    // Prompts are written without a trailing newline, so a document can
    // share a line with the prompt text that preceded it.
    let docs: Vec<serde_json::Value> = stdout
        .lines()
        .filter_map(|line| line.find('{').map(|start| &line[start..]))
        .map(|doc| serde_json::from_str(doc).expect("valid JSON document"))
        .collect();
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0]["books"][0]["title"], "C++ Programming");
    assert_eq!(docs[1]["status"], "ok");
    assert_eq!(docs[2]["issued"][0]["id"], 1);
}

#[test]
fn test_no_seed_starts_empty() {
    let script = "1\n2\n101\n1\n6\n";
    let stdout = stdout_of(&run_session(
        &["--quiet", "--no-seed", "--format", "plain"],
        script,
    ));
    assert!(stdout.contains("No books in the catalog."));
    assert!(stdout.contains("Error: Invalid Member ID: 101"));
}
