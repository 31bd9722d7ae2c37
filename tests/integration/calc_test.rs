//! End-to-end tests for the calc command

use assert_cmd::Command;
use predicates::prelude::*;

fn calc() -> Command {
    let mut cmd = Command::cargo_bin("etf-divergence").unwrap();
    cmd.env_remove("RUST_LOG").arg("calc");
    cmd
}

#[test]
fn test_calc_gold_etf_discount() {
    calc()
        .args([
            "--futures-price",
            "9800",
            "--forward-rate",
            "0.1",
            "--grams-per-unit",
            "1.0",
            "--etf-price",
            "9750",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theoretical ETF value: 9790.21 JPY"))
        .stdout(predicate::str::contains("-0.411 %"));
}

#[test]
fn test_calc_missing_input_prints_nothing() {
    calc()
        .args(["--futures-price", "9800", "--forward-rate", "0.1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_calc_negative_hundred_rate() {
    calc()
        .args([
            "--futures-price",
            "9800",
            "--forward-rate",
            "-100",
            "--grams-per-unit",
            "1",
            "--etf-price",
            "9750",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Infinity JPY"))
        .stdout(predicate::str::contains("NaN %"));
}

#[test]
fn test_calc_json_output() {
    let output = calc()
        .args([
            "--futures-price",
            "15000",
            "--forward-rate",
            "2",
            "--grams-per-unit",
            "0.5",
            "--etf-price",
            "7500",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let divergence = value["result"]["divergence"].as_f64().unwrap();
    assert!((divergence - 2.0).abs() < 1e-9);
    assert_eq!(value["inputs"]["grams_per_unit"], serde_json::json!(0.5));
}

#[test]
fn test_calc_rejects_non_number() {
    calc()
        .args(["--etf-price", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a number"));
}

#[test]
fn test_about() {
    Command::cargo_bin("etf-divergence")
        .unwrap()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("grams per unit"));
}

#[test]
fn test_calc_forced_color() {
    calc()
        .env("CLICOLOR_FORCE", "1")
        .env_remove("NO_COLOR")
        .args([
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
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_calc_midpoint_rounds_up() {
    calc()
        .args([
            "--futures-price",
            "9800.125",
            "--forward-rate",
            "0",
            "--grams-per-unit",
            "1",
            "--etf-price",
            "9800.125",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("9800.13 JPY"));
}
