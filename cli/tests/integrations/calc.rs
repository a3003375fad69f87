use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pacecalc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pacecalc").unwrap();
    cmd.env_remove("PACECALC_LOG").arg("--dir").arg(dir.path());
    cmd
}

#[test]
fn test_calc_prints_tokens_and_result() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "5km in 20min"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5km"))
        .stdout(predicate::str::contains("20min"))
        .stdout(predicate::str::contains("4:00min/km"));
}

#[test]
fn test_calc_joins_separate_arguments() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--raw", "4:00", "for", "10min"])
        .assert()
        .success()
        .stdout("2.5km\n");
}

#[test]
fn test_calc_raw_imperial() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--units", "imperial", "--raw", "1mi in 8min"])
        .assert()
        .success()
        .stdout("8:00min/mi\n");
}

#[test]
fn test_calc_json() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--json", "4:00 for 4min"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"SecondsPerKm\": 240.0"))
        .stdout(predicate::str::contains("\"Meters\": 1000.0"));
}

#[test]
fn test_calc_unreadable_expression() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "5km in 20 weeks"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not read '20weeks'"));
}

#[test]
fn test_calc_unsupported_operation() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--raw", "5km in 5km"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unknown operation"));
}

#[test]
fn test_calc_rejects_unknown_units() {
    let dir = TempDir::new().unwrap();

    pacecalc(&dir)
        .args(["calc", "--units", "nautical", "5km"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nautical"));
}
