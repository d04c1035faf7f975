mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("zinsrechner_offline").unwrap();
    cmd.env_remove("ZINSRECHNER_ROOT").env("RUST_LOG", "off");
    cmd
}

#[test]
fn interest_prints_simple_calculation() {
    cli()
        .args(["interest", "--principal", "10'000", "--from", "2024-01-01", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("360-day year"))
        .stdout(predicate::str::contains("Interest:   CHF 41.67"))
        .stdout(predicate::str::contains("Total:      CHF 10’041.67"));
}

#[test]
fn interest_json_output() {
    let output = cli()
        .args([
            "interest",
            "--principal",
            "100000",
            "--from",
            "2024-01-01",
            "--to",
            "2024-02-06",
            "--rate",
            "5",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["days"], 36);
    assert_eq!(json["interest"], "500.00");
    assert_eq!(json["method"], "360-day year");
}

#[test]
fn interest_rejects_reversed_dates() {
    cli()
        .args(["interest", "--principal", "100", "--from", "2024-02-01", "--to", "2024-01-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn no_arguments_in_empty_directory_completes() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0/4 offline bundles created in offline"));
    assert!(dir.path().join("offline").is_dir());
}

#[test]
fn packages_fixture_site() {
    let site = common::full_site();
    let out = tempfile::tempdir().unwrap();
    cli()
        .arg("--root")
        .arg(site.path())
        .arg("--output")
        .arg(out.path())
        .args(["--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("verzugszins-de.zip"))
        .stdout(predicate::str::contains("4/4 offline bundles created in"));
    assert!(out.path().join("zinseszins-fr.zip").is_file());
}

#[test]
fn bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("offline.toml");
    std::fs::write(&config, "unknown_key = 1").unwrap();
    cli()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load bundle config"));
}
