//! Integration tests for the projkit binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCRIPT: &str = "# Description: Clean the raw data\n# Author: A. Analyst\nx <- 1\n";

const CONFIG: &str = "snapshot:\n  commands:\n    - echo interpreter 4.3.2\n";

/// A projkit command running in `dir`, isolated from the user's config and IDE.
fn projkit(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("projkit"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("PROJKIT_IDE_PROJECT")
        .env_remove("RUST_LOG");
    cmd
}

/// A project with layout, config, one script, and a matching library.
fn healthy_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    projkit(root).arg("init").assert().success();
    fs::write(root.join(".projkit/config.yml"), CONFIG).unwrap();
    fs::write(root.join("scripts/clean.R"), SCRIPT).unwrap();
    fs::write(
        root.join("renv.lock"),
        r#"{"Packages": {"tibble": {"Version": "3.2.1"}}}"#,
    )
    .unwrap();
    let pkg = root.join("renv/library/linux/R-4.3/tibble");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("DESCRIPTION"), "Package: tibble\nVersion: 3.2.1\n").unwrap();
    projkit(root).arg("snapshot").assert().success();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("projkit"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("best-practice checks"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("projkit"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_init_creates_layout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    projkit(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created scripts"));

    assert!(temp.path().join("models").is_dir());
    assert!(temp.path().join(".projkit/config.yml").is_file());
    Ok(())
}

#[test]
fn cli_check_passes_on_healthy_project() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    projkit(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory is a valid project"))
        .stdout(predicate::str::contains("All checks passed"));
    Ok(())
}

#[test]
fn cli_check_fails_on_empty_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    projkit(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FALSE: missing scripts,models"))
        .stdout(predicate::str::contains("No scripts"));
    Ok(())
}

#[test]
fn cli_check_reports_missing_field() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    fs::write(temp.path().join("scripts/plot.R"), "# Author: B\n")?;
    projkit(temp.path()).arg("snapshot").assert().success();

    projkit(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FALSE: plot.R"));
    Ok(())
}

#[test]
fn cli_check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    let output = projkit(temp.path()).args(["check", "--json"]).output()?;

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["name"], "Directory is a valid project");
    assert_eq!(rows[0]["passed"], true);
    Ok(())
}

#[test]
fn cli_check_silent_omits_progress_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    projkit(temp.path())
        .args(["check", "--silent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("....").not());
    Ok(())
}

#[test]
fn cli_check_wrong_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    let elsewhere = TempDir::new()?;
    projkit(temp.path())
        .env("PROJKIT_IDE_PROJECT", elsewhere.path())
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Wrong working directory"));
    Ok(())
}

#[test]
fn cli_check_no_ide_check_skips_directory_guard() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    let elsewhere = TempDir::new()?;
    projkit(temp.path())
        .env("PROJKIT_IDE_PROJECT", elsewhere.path())
        .args(["check", "--no-ide-check"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_check_uses_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    let elsewhere = TempDir::new()?;
    projkit(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .arg("check")
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_snapshot_writes_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    let content = fs::read_to_string(temp.path().join("session_info.txt"))?;
    assert!(content.contains("$ echo interpreter 4.3.2"));
    assert!(content.contains("interpreter 4.3.2"));
    Ok(())
}

#[test]
fn cli_snippet_search_and_copy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = healthy_project();
    let library = TempDir::new()?;
    fs::write(
        library.path().join("survival_curve.R"),
        "# Description: Kaplan-Meier curve\nsurvfit(Surv(time, status) ~ group)\n",
    )?;

    projkit(temp.path())
        .args(["snippet", "search", "survfit", "--library"])
        .arg(library.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("survival_curve.R:2:"));

    projkit(temp.path())
        .args(["snippet", "copy", "survival_curve", "--library"])
        .arg(library.path())
        .assert()
        .success();
    assert!(temp.path().join("scripts/survival_curve.R").is_file());
    Ok(())
}

#[test]
fn cli_snippet_requires_library() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    projkit(temp.path())
        .args(["snippet", "search", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No snippet library configured"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("projkit"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("projkit"));
    Ok(())
}
