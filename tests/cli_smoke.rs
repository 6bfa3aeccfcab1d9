use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Run the binary with an empty config directory so no user config leaks in
fn run_brdoc(args: &[&str]) -> Output {
    let home = TempDir::new().expect("create temp home");

    Command::new(env!("CARGO_BIN_EXE_brdoc"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run brdoc")
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn valid_cpf_exits_zero() {
    let output = run_brdoc(&["111.444.777-35"]);
    assert_eq!(stdout_line(&output), "CPF is valid.");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn invalid_cnpj_exits_one() {
    let output = run_brdoc(&["11222333000182"]);
    assert_eq!(stdout_line(&output), "Invalid CNPJ.");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_length_prints_usage() {
    let output = run_brdoc(&["123"]);
    assert_eq!(stdout_line(&output), "insert a valid CPF or CNPJ");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_argument_is_a_clap_error() {
    let output = run_brdoc(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn json_output_carries_reason() {
    let output = run_brdoc(&["--format", "json", "00000000000"]);
    let report: Value = serde_json::from_str(&stdout_line(&output)).expect("json line");

    assert_eq!(report["kind"], "cpf");
    assert_eq!(report["valid"], false);
    assert_eq!(report["reason"], "all_digits_equal");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn debug_log_names_loaded_config_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("brdoc.toml");
    std::fs::write(&path, "format = \"text\"\n").expect("write config");

    let output = run_brdoc(&[
        "--log-level",
        "debug",
        "--config",
        path.to_str().expect("utf-8 temp path"),
        "11144477736",
    ]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loaded config from"), "stderr: {}", stderr);
    assert_eq!(stdout_line(&output), "Invalid CPF.");
}

#[test]
fn log_level_from_config_file_applies() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("brdoc.toml");
    std::fs::write(&path, "log_level = \"debug\"\n").expect("write config");

    let output = run_brdoc(&["--config", path.to_str().expect("utf-8 temp path"), "123"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loaded config from"), "stderr: {}", stderr);
}

#[test]
fn no_strict_overrides_strict_config() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("brdoc.toml");
    std::fs::write(&path, "strict = true\n").expect("write config");
    let path = path.to_str().expect("utf-8 temp path");

    let output = run_brdoc(&["--config", path, "CPF 111.444.777-35"]);
    assert_eq!(stdout_line(&output), "Invalid CPF.");
    assert_eq!(output.status.code(), Some(1));

    let output = run_brdoc(&["--config", path, "--no-strict", "CPF 111.444.777-35"]);
    assert_eq!(stdout_line(&output), "CPF is valid.");
    assert_eq!(output.status.code(), Some(0));
}
