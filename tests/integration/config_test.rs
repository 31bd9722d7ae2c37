//! Configuration loading through the binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_config_file_changes_currency_suffix() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[display]\ncurrency_suffix = \"円\"\ncolor = \"never\""
    )
    .unwrap();

    Command::cargo_bin("etf-divergence")
        .unwrap()
        .arg("--config")
        .arg(file.path())
        .args([
            "calc",
            "--futures-price",
            "9800",
            "--forward-rate",
            "0.1",
            "--grams-per-unit",
            "1",
            "--etf-price",
            "9750",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("9790.21 円"));
}

#[test]
fn test_missing_config_file_fails() {
    Command::cargo_bin("etf-divergence")
        .unwrap()
        .args(["--config", "/nonexistent/etf-divergence.toml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load config"));
}

#[test]
fn test_config_command_shows_defaults() {
    Command::cargo_bin("etf-divergence")
        .unwrap()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("currency_suffix = \"JPY\""));
}
