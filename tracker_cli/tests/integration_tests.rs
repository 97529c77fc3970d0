//! Integration tests for the fittrack binary.
//!
//! These tests verify end-to-end behavior including:
//! - Built-in sample output
//! - Package files in every supported format
//! - Per-package failure handling and exit status
//! - Journal and CSV export

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary, isolated from the user's config
fn cli(dir: &Path) -> Command {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "").expect("Failed to write config");
    }

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fittrack"));
    cmd.arg("--config").arg(config_path);
    cmd.arg("--data-dir").arg(dir.join("data"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sensor packages"));
}

#[test]
fn test_default_prints_samples_in_order() {
    let temp_dir = setup_test_dir();
    let output = cli(temp_dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Training type: Swimming;"));
    assert!(lines[1].starts_with("Training type: Running;"));
    assert!(lines[2].starts_with("Training type: SportsWalking;"));
    assert!(lines[1].ends_with("Calories burned: 797.805."));
}

#[test]
fn test_run_json_format() {
    let temp_dir = setup_test_dir();
    let output = cli(temp_dir.path())
        .args(["run", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["training_type"], "Swimming");
    assert_eq!(first["calories_kcal"], 336.0);
}

#[test]
fn test_run_csv_input() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "RUN,15000,1,75\n").unwrap();

    cli(temp_dir.path())
        .arg("run")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km",
        ));
}

#[test]
fn test_bad_package_reported_and_others_processed() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.json");
    fs::write(
        &input,
        r#"[{"tag": "XYZ", "values": [1, 1, 1]}, {"tag": "RUN", "values": [15000, 1, 75]}]"#,
    )
    .unwrap();

    cli(temp_dir.path())
        .arg("run")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Training type: Running"))
        .stderr(predicate::str::contains(
            "error: package 0 (XYZ): Unknown activity type: XYZ",
        ));
}

#[test]
fn test_fail_fast_aborts() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.toml");
    fs::write(
        &input,
        r#"
[[package]]
tag = "RUN"
values = [15000, 0, 75]

[[package]]
tag = "SWM"
values = [720, 1, 80, 25, 40]
"#,
    )
    .unwrap();

    cli(temp_dir.path())
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--fail-fast")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Swimming").not())
        .stderr(predicate::str::contains(
            "error: package 0 (RUN): Invalid input: duration must be positive",
        ));
}

#[test]
fn test_precision_from_config() {
    let temp_dir = setup_test_dir();
    fs::write(temp_dir.path().join("config.toml"), "[output]\nprecision = 1\n").unwrap();

    cli(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories burned: 336.0."));
}

#[test]
fn test_journal_and_export() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("data");

    for _ in 0..2 {
        cli(temp_dir.path())
            .args(["run", "--journal"])
            .assert()
            .success();
    }

    let journal = fs::read_to_string(data_dir.join("journal.jsonl")).unwrap();
    assert_eq!(journal.lines().count(), 6);
    assert!(journal.contains("\"run_id\""));

    cli(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 6 summaries"));

    let reader = csv::Reader::from_path(data_dir.join("summaries.csv")).unwrap();
    assert_eq!(reader.into_records().count(), 6);
    assert!(!data_dir.join("journal.jsonl").exists());
    assert!(data_dir.join("journal.jsonl.processed").exists());

    // Nothing new journaled, so a second export adds no rows
    cli(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to export"));

    let reader = csv::Reader::from_path(data_dir.join("summaries.csv")).unwrap();
    assert_eq!(reader.into_records().count(), 6);
}

#[test]
fn test_export_without_journal() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to export"));
}
