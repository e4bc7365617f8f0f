//! CLI integration tests for patternbook.
//!
//! Every command runs inside a temporary directory with `HOME` pointing at it,
//! so no real configuration leaks into the results.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the patternbook binary command, isolated in `dir`.
fn patternbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("patternbook").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

/// Create a temporary directory for a test run.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// patternbook list
// ============================================================================

#[test]
fn test_list_shows_every_kind() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("gui"))
        .stdout(predicate::str::contains("Variants: win, mac"))
        .stdout(predicate::str::contains("Variants: credit, debit, pix, bankslip"))
        .stdout(predicate::str::contains("cloud"));
}

#[test]
fn test_list_json() {
    let tmp = temp_dir();

    let output = patternbook(&tmp).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds = json.as_array().unwrap();
    assert_eq!(kinds.len(), 8);
    assert_eq!(kinds[0]["kind"], "gui");
    assert_eq!(kinds[0]["variants"][1], "mac");
}

// ============================================================================
// patternbook run
// ============================================================================

#[test]
fn test_run_gui_win() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["run", "gui", "win"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Create win button"))
        .stdout(predicate::str::contains("Paint win button"))
        .stdout(predicate::str::contains("mac").not());
}

#[test]
fn test_run_normalizes_variant() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["run", "logistics", "SEA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ship deliver"));
}

#[test]
fn test_run_dialog_windows_renders_ok() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["run", "dialog", "windows"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Windows button onclick dialog event: Close",
        ))
        .stdout(predicate::str::contains("Windows button render. Type: OK"));
}

#[test]
fn test_run_json_trace() {
    let tmp = temp_dir();

    let output = patternbook(&tmp)
        .args(["run", "payment", "pix", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "payment");
    assert_eq!(json["variant"], "pix");
    assert_eq!(json["effects"][0]["operation"], "create");
    assert_eq!(json["effects"][1]["message"], "Pay with pix");
}

#[test]
fn test_run_unknown_variant_fails() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["run", "gui", "linux"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("linux"))
        .stderr(predicate::str::contains("available variants: win, mac"));
}

#[test]
fn test_run_unknown_kind_fails() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["run", "widgets", "win"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("widgets"));
}

// ============================================================================
// patternbook principle
// ============================================================================

#[test]
fn test_principle_lsp_corrected() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["principle", "lsp"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Liskov Substitution (corrected)\n"))
        .stdout(predicate::str::contains("Open doc doc1"))
        .stdout(predicate::str::contains("Save doc doc2"))
        .stdout(predicate::str::contains("Save doc doc1").not());
}

#[test]
fn test_principle_isp_violation_reports_unsupported() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["principle", "isp", "--violation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amazon create server"))
        .stdout(predicate::str::contains(
            "Violation: `dropbox` does not support `create_server`",
        ));
}

#[test]
fn test_principle_ocp_json() {
    let tmp = temp_dir();

    let output = patternbook(&tmp)
        .args(["principle", "ocp", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Open/Closed");
    assert_eq!(json["stage"], "corrected");
    assert_eq!(json["effects"].as_array().unwrap().len(), 2);
    assert!(json["violation"].is_null());
}

#[test]
fn test_principle_unknown_fails() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["principle", "kiss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown principle"));
}

// ============================================================================
// patternbook interactive
// ============================================================================

#[test]
fn test_interactive_loops_until_exit_token() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["interactive", "gui"])
        .write_stdin("win\nlinux\nmac\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paint win button"))
        .stdout(predicate::str::contains("Choose an valid option: win or mac"))
        .stdout(predicate::str::contains("Paint mac button"))
        .stdout(predicate::str::contains("Thanks for using the program!"));
}

#[test]
fn test_interactive_dialog_short_token() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["interactive", "dialog"])
        .write_stdin("w\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create Windows button"));
}

#[test]
fn test_interactive_end_of_input_exits_cleanly() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["interactive", "payment"])
        .write_stdin("debit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay with debit card"))
        .stdout(predicate::str::contains("Thanks for using the program!"));
}

#[test]
fn test_interactive_without_kind_fails() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .arg("interactive")
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no capability kind given"));
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_project_config_sets_defaults_and_aliases() {
    let tmp = temp_dir();
    let config_dir = tmp.path().join(".patternbook");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[interactive]
default_kind = "gui"
exit_token = "q"
farewell = "See you"

[aliases.gui]
osx = "mac"
"#,
    )
    .unwrap();

    patternbook(&tmp)
        .arg("interactive")
        .write_stdin("osx\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paint mac button"))
        .stdout(predicate::str::contains("See you"));
}

#[test]
fn test_explicit_config_must_exist() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["--config", "missing.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

// ============================================================================
// patternbook completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    patternbook(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patternbook"));
}
