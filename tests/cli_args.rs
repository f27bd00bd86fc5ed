//! Integration tests for the aocd binary
//!
//! Only paths that never touch the network: help, version, cache hits and
//! errors raised before a request would be sent.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run the CLI with a clean environment and capture output
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aocd"))
        .args(args)
        .env_remove("AOC_SESSION")
        .env_remove("AOCD_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute aocd")
}

fn write_cached(root: &Path, session: &str, year: i32, day: u32, text: &str) {
    let dir = root.join(session).join(year.to_string());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.txt", day)), text).unwrap();
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("aocd"), "Help should mention aocd");
    assert!(stdout.contains("--session"), "Help should mention --session");
}

#[test]
fn test_version_flag_prints_version() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cached_input_printed_without_network() {
    let dir = TempDir::new().unwrap();
    write_cached(dir.path(), "thetesttoken", 2018, 1, "+1\n-2\n");

    let output = run_cli(&[
        "1",
        "2018",
        "--session",
        "thetesttoken",
        "--dir",
        dir.path().to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "+1\n-2\n");
}

#[test]
fn test_token_file_used_when_no_session_given() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("token"), "filetoken\n").unwrap();
    write_cached(dir.path(), "filetoken", 2018, 5, "dabAcCaCBAcCcaDA");

    let output = run_cli(&["5", "2018", "--dir", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "dabAcCaCBAcCcaDA");
}

#[test]
fn test_named_user_token() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tokens.json"),
        r#"{"tokenA": "aaa", "tokenB": "bbb"}"#,
    )
    .unwrap();
    write_cached(dir.path(), "aaa", 2018, 1, "data for user A");
    write_cached(dir.path(), "bbb", 2018, 1, "data for user B");

    let output = run_cli(&["1", "2018", "-u", "tokenB", "--dir", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "data for user B");
}

#[test]
fn test_missing_token_fails() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(&["1", "2018", "--dir", dir.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No session token"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_day_fails() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(&["26", "2018", "-s", "tok", "--dir", dir.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid puzzle date"), "stderr: {}", stderr);
}

#[test]
fn test_corrupted_cache_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tok").join("2018").join("1.txt")).unwrap();

    let output = run_cli(&["1", "2018", "-s", "tok", "--dir", dir.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("IO error"), "stderr: {}", stderr);
}
