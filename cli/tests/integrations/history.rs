use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pacecalc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pacecalc").unwrap();
    cmd.env_remove("PACECALC_LOG").arg("--dir").arg(dir.path());
    cmd
}

#[test]
fn test_save_and_list_history() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--save", "4:00 for 10min"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved as #1"));
    pacecalc(&dir)
        .args(["calc", "--save", "M in 3h"])
        .assert()
        .success();

    assert!(dir.path().join(".pacecalc.json").exists());

    pacecalc(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("M in 3h"))
        .stdout(predicate::str::contains("4:16min/km"))
        .stdout(predicate::str::contains("4:00min/km for 10min"))
        .stdout(predicate::str::contains("2.5km"));
}

#[test]
fn test_failed_calculation_is_not_saved() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--save", "5km in soon"])
        .assert()
        .failure();

    assert!(!dir.path().join(".pacecalc.json").exists());
    pacecalc(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout("No saved calculations\n");
}

#[test]
fn test_calculation_without_result_is_not_saved() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--save", "5km"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to save"));
}

#[test]
fn test_delete_saved_calculation() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--save", "5km * 2"])
        .assert()
        .success();

    pacecalc(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted #1: 5km * 2"));

    pacecalc(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout("No saved calculations\n");

    pacecalc(&dir)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved calculation #5"));
}

#[test]
fn test_unit_preference_is_persisted() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .arg("units")
        .assert()
        .success()
        .stdout("metric\n");

    pacecalc(&dir)
        .args(["units", "imperial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("imperial"));

    pacecalc(&dir)
        .arg("units")
        .assert()
        .success()
        .stdout("imperial\n");

    pacecalc(&dir)
        .args(["calc", "--raw", "8:00 for 1h"])
        .assert()
        .success()
        .stdout("7.5mi\n");

    pacecalc(&dir)
        .args(["calc", "--raw", "--units", "metric", "8:00 for 1h"])
        .assert()
        .success()
        .stdout("7.5km\n");
}

#[test]
fn test_unreadable_store_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".pacecalc.json"), "{not json").unwrap();

    pacecalc(&dir)
        .args(["calc", "--raw", "5km at 5:00"])
        .assert()
        .success()
        .stdout("25min\n")
        .stderr(predicate::str::contains("ignoring unreadable store"));
}
