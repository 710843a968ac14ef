//! Tests for the `aviary` binary.

use std::process::{Command, Output};

fn aviary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aviary"))
        .args(args)
        .output()
        .expect("failed to run aviary")
}

fn stdout(args: &[&str]) -> String {
    let output = aviary(args);
    assert!(output.status.success(), "aviary {args:?} failed");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_naturals() {
    assert_eq!(stdout(&["naturals", "--count", "3"]), "(1 2 3)");
}

#[test]
fn test_fibo() {
    assert_eq!(stdout(&["fibo", "--count", "5"]), "(1 1 2 3 5)");
}

#[test]
fn test_range_truncated() {
    assert_eq!(
        stdout(&["range", "--low", "0", "--high", "3", "--limit", "10"]),
        "(0 1 2)"
    );
    assert_eq!(stdout(&["range"]), "()");
}

#[test]
fn test_reverse() {
    assert_eq!(stdout(&["reverse", "--low", "1", "--high", "4"]), "(4 3 2 1)");
}

#[test]
fn test_apply_named_combinator() {
    assert_eq!(stdout(&["apply", "K", "1", "2"]), "1");
    assert_eq!(stdout(&["apply", "KI", "1", "2"]), "2");
}

#[test]
fn test_truth_table_lines() {
    let out = stdout(&["truth-table"]);
    assert_eq!(out.lines().count(), 6);
    assert!(out.contains("not true  = false"));
}

#[test]
fn test_unknown_combinator_fails() {
    let output = aviary(&["apply", "Y", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown combinator Y"));
}

#[test]
fn test_apply_without_arguments_prints_combinator() {
    let output = aviary(&["--max-depth", "50", "apply", "M"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "<M>");
}
