mod support;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

use support::catalog::fixture_path;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("streamscout.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

/// Run the binary against the fixture catalog from an empty directory.
fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_streamscout"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--catalog")
        .arg(fixture_path("catalog.json"))
        .args(args)
        .output()
        .expect("run streamscout")
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be one JSON document")
}

#[test]
fn rank_json_prefers_cheaper_provider_on_equal_coverage() {
    let output = run(&[
        "rank",
        "--competition",
        "bundesliga",
        "--max-size",
        "1",
        "--json",
    ]);
    let doc = json_stdout(&output);

    assert_eq!(doc["command"], "rank");
    assert_eq!(doc["total"], 6);
    assert_eq!(doc["requirements"][0]["slug"], "bundesliga");

    let best = &doc["results"][0];
    assert_eq!(best["rank"], 1);
    assert_eq!(best["kind"], "single");
    assert_eq!(best["providers"][0]["slug"], "wow");
    assert_eq!(best["coverage_percent"], 87);
    assert_eq!(doc["results"][1]["providers"][0]["slug"], "sky");
}

#[test]
fn rank_limit_truncates_but_reports_total() {
    let output = run(&[
        "rank",
        "--club",
        "fc-bayern-muenchen",
        "--limit",
        "2",
        "--json",
    ]);
    let doc = json_stdout(&output);

    assert_eq!(doc["results"].as_array().unwrap().len(), 2);
    assert!(doc["total"].as_u64().unwrap() > 2);
    assert_eq!(doc["results"][0]["coverage_percent"], 89);
}

#[test]
fn providers_lists_singles_only() {
    let doc = json_stdout(&run(&["providers", "--club", "fc-bayern-muenchen", "--json"]));
    let results = doc["results"].as_array().unwrap();

    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r["kind"] == "single"));
}

#[test]
fn unreachable_threshold_reports_no_solution() {
    let output = run(&[
        "rank",
        "--club",
        "fc-bayern-muenchen",
        "--min-coverage",
        "100",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no solution found"), "stdout: {stdout}");
}

#[test]
fn unknown_slugs_warn_on_stderr() {
    let output = run(&[
        "rank",
        "--club",
        "ghost-fc",
        "--competition",
        "ghost-cup",
        "--json",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown club 'ghost-fc'"), "stderr: {stderr}");
    assert!(stderr.contains("unknown competition 'ghost-cup'"), "stderr: {stderr}");

    let doc = json_stdout(&output);
    assert_eq!(doc["total"], 0);
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[ranking]\nmax_combination_size = 9\n");

    let output = Command::new(env!("CARGO_BIN_EXE_streamscout"))
        .args(["config", "validate", "--config"])
        .arg(&path)
        .output()
        .expect("run streamscout");

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("max_combination_size"),
        "Expected error message about invalid config.\nstderr: {stderr}"
    );
}

#[test]
fn cli_returns_nonzero_on_missing_catalog() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_streamscout"))
        .current_dir(dir.path())
        .args(["rank", "--competition", "bundesliga", "--catalog", "absent.json"])
        .output()
        .expect("run streamscout");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read catalog file"), "stderr: {stderr}");
}

#[test]
fn config_show_json_includes_defaults() {
    let doc = json_stdout(&run(&["config", "show", "--json"]));
    assert_eq!(doc["command"], "config.show");
    assert_eq!(doc["config"]["ranking"]["max_combination_size"], 3);
    assert_eq!(doc["config"]["recommend"]["near_complete"], 90);
}
