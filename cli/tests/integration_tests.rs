//! Integration tests for the demo binary: exit codes and output surfaces.

use std::path::PathBuf;
use std::process::{Command, Output};

fn argot_bin() -> PathBuf {
    // `cargo test` places the binary in the target directory.
    PathBuf::from(env!("CARGO_BIN_EXE_argot"))
}

fn run(args: &[&str]) -> Output {
    Command::new(argot_bin())
        .args(args)
        .output()
        .expect("failed to run argot")
}

#[test]
fn test_successful_parse_and_handler_exit_zero() {
    let output = run(&["push", "--remote", "origin"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "pushing to origin\n");
}

#[test]
fn test_force_flag_changes_handler_behavior() {
    let output = run(&["push", "--remote=origin", "-f"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "force-pushing to origin\n");
}

#[test]
fn test_parse_failure_exits_two() {
    let output = run(&["push"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing_required_option"));
    assert!(stderr.contains("remote"));
}

#[test]
fn test_missing_value_exits_two() {
    let output = run(&["push", "--remote"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing_value"));
}

#[test]
fn test_handler_failure_code_is_distinct_from_parse_failure() {
    // 'remote rm' with no remote name parses fine; the handler rejects it.
    let output = run(&["remote", "rm"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expects a remote name"));
}

#[test]
fn test_nested_subcommand_with_alias() {
    let output = run(&["remote", "rm", "upstream"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "removed remote upstream\n");
}

#[test]
fn test_help_flag_prints_commands_and_exits_zero() {
    let output = run(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("push"));
    assert!(stdout.contains("--remote <str>"));
    // Captured output is not a TTY, so no escape codes.
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_help_wins_over_parse_errors() {
    let output = run(&["push", "--help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Commands:"));
}

#[test]
fn test_version_flag() {
    let output = run(&["--version"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("argot "));
}

#[test]
fn test_json_output_round_trips() {
    let output = run(&["push", "--remote", "origin", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON output: {e}\n{stdout}"));
    assert_eq!(parsed["path"][0], "push");
    assert_eq!(parsed["bound"]["remote"]["text"], "origin");
    assert!(parsed["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn test_separator_keeps_option_syntax_positional() {
    let output = run(&["push", "--remote", "origin", "--", "--force"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // --force after the separator is a positional, not the flag.
    assert_eq!(stdout, "pushing to origin\n");
}

#[test]
fn test_unknown_option_warns_but_succeeds() {
    let output = run(&["push", "--remote", "origin", "--woops"]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning"));
    assert!(stderr.contains("--woops"));
}

#[test]
fn test_no_arguments_prints_help() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Commands:"));
}
