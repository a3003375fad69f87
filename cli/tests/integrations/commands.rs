use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("pacecalc").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("server"));
}

#[test]
fn test_interactive_help() {
    // The prompt itself needs a terminal
    let mut cmd = Command::cargo_bin("pacecalc").unwrap();
    cmd.args(["interactive", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("'!'"));
}

#[test]
fn test_samples() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("pacecalc").unwrap();
    cmd.arg("--dir").arg(dir.path()).arg("samples");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5km in 25min"))
        .stdout(predicate::str::contains("5:00min/km"))
        .stdout(predicate::str::contains("4:30 for 12 min in 10 min"))
        .stdout(predicate::str::contains("3:45min/km"));
}

#[test]
fn test_calc_requires_expression() {
    let mut cmd = Command::cargo_bin("pacecalc").unwrap();
    cmd.arg("calc");

    cmd.assert().failure();
}
