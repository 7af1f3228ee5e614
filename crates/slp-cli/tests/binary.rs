//! Runs the built binary to check exit codes and stdout/stderr split.

use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_swagger-log-parser"))
}

#[test]
fn success_exits_zero_and_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("Result.txt");
    std::fs::write(&input, r#"{"LogicLog":["a","b"],"Settings":{"X":{"Y":[1]}}}"#).unwrap();

    let result = bin()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--line-ending", "lf", "--no-open"])
        .output()
        .unwrap();

    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "a\n\nb");
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Loading JSON file..."));
    assert!(stdout.contains("Finished writing results"));
}

#[test]
fn missing_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Result.txt");

    let result = bin()
        .arg(dir.path().join("absent.json"))
        .arg("--output")
        .arg(&output)
        .arg("--no-open")
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("input not found"));
    assert!(!output.exists());
}

#[test]
fn malformed_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("Result.txt");
    std::fs::write(&input, "{ nope").unwrap();

    let result = bin()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--no-open")
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("parse error"));
    assert!(!output.exists());
}
