//! Integration tests for the keystream CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn keystream() -> Command {
    let mut cmd = Command::cargo_bin("keystream").unwrap();
    cmd.env_remove("KEYSTREAM_CONFIG");
    cmd
}

#[test]
fn test_type_inline_text() {
    keystream()
        .args(["type", "--no-delay", "Hi there."])
        .assert()
        .success()
        .stdout("Hi there.\n");
}

#[test]
fn test_type_from_stdin() {
    keystream()
        .args(["type", "--no-delay"])
        .write_stdin("one   two,  three.")
        .assert()
        .success()
        .stdout("one two, three.\n");
}

#[test]
fn test_type_file() {
    keystream()
        .args(["type", "--no-delay", "-i"])
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout("Hi there.\nThe quick brown fox, jumps.\n");
}

#[test]
fn test_type_with_real_delays() {
    // Two letters at 1 ms per unit: one 2 ms wait
    keystream()
        .args(["type", "--scale", "1", "hi"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_type_unrecognized_token() {
    keystream()
        .args(["type", "--no-delay", "-i"])
        .arg(fixture_path("question.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("question.txt"))
        .stderr(predicate::str::contains("unrecognized token '?' at position 18"));
}

#[test]
fn test_tokens_text_output() {
    keystream()
        .args(["tokens", "Hi there."])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# <argument>\n"))
        .stdout(predicate::str::contains("LETTER\t\"H\"\t2\n"))
        .stdout(predicate::str::contains("SPACE\t\" \"\t2\n"))
        .stdout(predicate::str::contains("LETTER\t\"t\"\t0.8\n"))
        .stdout(predicate::str::contains("PERIOD\t\".\"\t10\n"));
}

#[test]
fn test_tokens_newline_uses_cli_weight() {
    keystream()
        .args(["tokens", "-i"])
        .arg(fixture_path("second.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("NEWLINE\t\"\\n\"\t10\n"));
}

#[test]
fn test_tokens_json_output() {
    let output = keystream()
        .args(["tokens", "-f", "json", "a, b"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stream = &value[0];
    assert_eq!(stream["source"], "<argument>");
    assert_eq!(stream["letter_timing_ms"], 100.0);
    assert_eq!(stream["total_delay_ms"], 1100.0);
    assert_eq!(stream["tokens"][1]["kind"], "COMMA");
}

#[test]
fn test_tokens_markdown_output() {
    keystream()
        .args(["tokens", "-f", "markdown", "-i"])
        .arg(fixture_path("second.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1 | LETTER | `A` |"))
        .stdout(predicate::str::contains("*Total tokens: 14*"));
}

#[test]
fn test_tokens_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("tokens.json");

    keystream()
        .args(["tokens", "-q", "-f", "json", "-i"])
        .arg(fixture_path("*.txt"))
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("question.txt"));

    keystream()
        .args(["tokens", "-q", "-f", "json", "-i"])
        .arg(fixture_path("s*.txt"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let content = fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let sources: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|stream| stream["source"].as_str().unwrap())
        .collect();
    assert_eq!(sources.len(), 2);
    assert!(sources[0].ends_with("sample.txt"));
    assert!(sources[1].ends_with("second.txt"));
}

#[test]
fn test_invalid_file() {
    keystream()
        .args(["tokens", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_invalid_scale() {
    keystream()
        .args(["tokens", "--scale", "0", "a b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_help_command() {
    keystream()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("typewriter timing"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("timing.toml");

    keystream()
        .args(["generate-config", "--output"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    keystream()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"))
        .stdout(predicate::str::contains("PERIOD: 10"));

    keystream()
        .args(["type", "--no-delay", "-c"])
        .arg(&config_path)
        .arg("Hello, world.")
        .assert()
        .success()
        .stdout("Hello, world.\n");
}

#[test]
fn test_validate_reports_cli_newline_weight() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("no-newline.toml");
    fs::write(&config_path, "[timing]\nperiod = 12.0\n").unwrap();

    keystream()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("PERIOD: 12"))
        .stdout(predicate::str::contains("NEWLINE: 10"))
        .stdout(predicate::str::contains("unset").not());
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(&config_path, "letter_timing_ms = 0.0\n").unwrap();

    keystream()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"))
        .stderr(predicate::str::contains("letter_timing_ms"));
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("slow.toml");
    fs::write(&config_path, "letter_timing_ms = 250.0\n").unwrap();

    let output = keystream()
        .env("KEYSTREAM_CONFIG", &config_path)
        .args(["tokens", "-f", "json", "hi"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["letter_timing_ms"], 250.0);
}
