//! CLI integration tests.
//!
//! Tests the plainjson CLI by invoking the binary as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

fn binary_path() -> std::path::PathBuf {
    // Find the binary in the target directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Navigate to the deps directory's sibling (the main binary location)
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("plainjson.exe")
    } else {
        path.join("plainjson")
    }
}

fn run_command(args: &[&str], input: &str) -> (i32, String, String) {
    let binary = binary_path();
    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn plainjson at {binary:?}: {e}"));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ============================================================================
// parse
// ============================================================================

#[test]
fn cli_parse_prints_compact_value() {
    let (code, stdout, _stderr) = run_command(&["parse"], " { \"a\" : 1, \"b\": [true, null] } ");
    assert_eq!(code, 0, "Expected success exit code");
    assert_eq!(stdout.trim_end(), r#"{"a":1,"b":[true,null]}"#);
}

#[test]
fn cli_parse_preserves_key_order() {
    let (code, stdout, _stderr) = run_command(&["parse"], r#"{"z":1,"a":2}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), r#"{"z":1,"a":2}"#);
}

#[test]
fn cli_parse_reports_syntax_error() {
    let (code, stdout, stderr) = run_command(&["parse"], "[1,2,]");
    assert_ne!(code, 0, "Expected failure exit code");
    assert!(stdout.is_empty());
    assert!(stderr.contains("error"), "stderr was: {stderr}");
}

#[test]
fn cli_parse_reports_lex_error_with_offset() {
    let (code, _stdout, stderr) = run_command(&["parse"], "[1, @]");
    assert_ne!(code, 0);
    assert!(stderr.contains("byte 4"), "stderr was: {stderr}");
}

// ============================================================================
// lex
// ============================================================================

#[test]
fn cli_lex_prints_one_token_per_line() {
    let (code, stdout, _stderr) = run_command(&["lex"], "[1, true]");
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        ["LeftBracket", "Number(1.0)", "Comma", "Boolean(true)", "RightBracket"]
    );
}

#[test]
fn cli_lex_accepts_grammarless_token_soup() {
    // Lexing is independent of the grammar
    let (code, stdout, _stderr) = run_command(&["lex"], ": ,");
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 2);
}

// ============================================================================
// check
// ============================================================================

#[test]
fn cli_check_accepts_valid_input() {
    let (code, stdout, _stderr) = run_command(&["check"], r#"{"ok": true}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), "ok");
}

#[test]
fn cli_check_rejects_invalid_input() {
    let (code, _stdout, stderr) = run_command(&["check"], "{\"a\":}");
    assert_ne!(code, 0);
    assert!(stderr.contains("error"), "stderr was: {stderr}");
}

#[test]
fn cli_check_rejects_missing_file() {
    let (code, _stdout, stderr) = run_command(&["check", "/no/such/file.json"], "");
    assert_ne!(code, 0);
    assert!(!stderr.is_empty());
}
