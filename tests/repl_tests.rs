//! Tests for the REPL loop
//!
//! These tests drive full sessions through scripted input and assert on the
//! rendered output, including:
//! - Command/result cycles and error recovery
//! - EXIT and end-of-input termination
//! - Durability across sessions
//! - Persistence warnings

use std::io::Cursor;
use std::path::Path;

use filekv::{Config, Dispatcher, FlushPolicy, Repl};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_session(path: &Path, policy: FlushPolicy, script: &str) -> String {
    let config = Config::builder()
        .data_path(path)
        .flush_policy(policy)
        .build();
    let mut dispatcher = Dispatcher::open(config).unwrap();

    let mut output = Vec::new();
    Repl::new(Cursor::new(script), &mut output)
        .prompt(false)
        .run(&mut dispatcher)
        .unwrap();

    String::from_utf8(output).unwrap()
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_put_list_scenario_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let output = run_session(
        &path,
        FlushPolicy::EveryMutation,
        "PUT a 1\nPUT b hello world\nLIST\nEXIT\n",
    );

    assert_eq!(
        output,
        "OK a = 1\nOK b = hello world\na = 1\nb = hello world\nbye\n"
    );
}

#[test]
fn test_get_missing_key_on_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let output = run_session(&path, FlushPolicy::EveryMutation, "GET missing\n");

    assert_eq!(output, "ERROR: key 'missing' not found\n");
}

#[test]
fn test_list_on_empty_store_prints_distinct_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let output = run_session(&path, FlushPolicy::EveryMutation, "LIST\n");

    assert_eq!(output, "(store is empty)\n");
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let output = run_session(
        &path,
        FlushPolicy::EveryMutation,
        "FROB\nPUT a 1\nDEL missing\nGET a\n",
    );

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("ERROR: cannot parse"));
    assert_eq!(lines[1], "OK a = 1");
    assert_eq!(lines[2], "ERROR: key 'missing' not found");
    assert_eq!(lines[3], "1");
}

#[test]
fn test_blank_lines_print_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let output = run_session(&path, FlushPolicy::EveryMutation, "\n   \nPUT a 1\n\n");

    assert_eq!(output, "OK a = 1\n");
}

#[test]
fn test_exit_stops_reading_further_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let output = run_session(
        &path,
        FlushPolicy::EveryMutation,
        "EXIT\nPUT never 1\n",
    );

    assert_eq!(output, "bye\n");
}

#[test]
fn test_prompt_is_written_before_each_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let config = Config::builder().data_path(&path).build();
    let mut dispatcher = Dispatcher::open(config).unwrap();

    let mut output = Vec::new();
    Repl::new(Cursor::new("LIST\nEXIT\n"), &mut output)
        .run(&mut dispatcher)
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "> (store is empty)\n> bye\n"
    );
}

// =============================================================================
// Durability Tests
// =============================================================================

#[test]
fn test_state_survives_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    run_session(&path, FlushPolicy::EveryMutation, "PUT a 1\n");
    let output = run_session(&path, FlushPolicy::EveryMutation, "GET a\n");

    assert_eq!(output, "1\n");
}

#[test]
fn test_end_of_input_flushes_on_exit_policy() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    // No EXIT command: the stream just ends
    run_session(&path, FlushPolicy::OnExit, "PUT a 1\nPUT b 2\n");
    let output = run_session(&path, FlushPolicy::EveryMutation, "LIST\n");

    assert_eq!(output, "a = 1\nb = 2\n");
}

#[test]
fn test_failed_save_prints_warning_after_reply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("store.json");

    let output = run_session(&path, FlushPolicy::EveryMutation, "PUT a 1\n");

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "OK a = 1");
    assert!(lines[1].starts_with("WARNING: persistence failed"));
}
