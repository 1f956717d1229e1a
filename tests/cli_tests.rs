use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn help_lists_config_flag() {
    Command::cargo_bin("flightdeck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn invalid_config_exits_nonzero() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[service]\nbase_url = \"ftp://planner\"\n")
        .unwrap();

    Command::cargo_bin("flightdeck")
        .unwrap()
        .env_remove("FLIGHTDECK_SERVICE_URL")
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn malformed_config_exits_nonzero() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not = [valid").unwrap();

    Command::cargo_bin("flightdeck")
        .unwrap()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
