//! Interactive session tests

use assert_cmd::Command;
use etf_divergence::cli::Session;
use etf_divergence::config::{ColorMode, Config, DisplayConfig};
use etf_divergence::form::InputState;
use predicates::prelude::*;
use std::io::Cursor;

fn plain_config() -> Config {
    Config {
        display: DisplayConfig {
            currency_suffix: "JPY".to_string(),
            color: ColorMode::Never,
        },
        ..Config::default()
    }
}

#[test]
fn test_session_recomputes_on_every_change() {
    let script = "futures 9800\nrate 0.1\ngrams 1\netf 9750\netf 9800\n";
    let mut output = Vec::new();
    let mut session = Session::new(
        Cursor::new(script),
        &mut output,
        InputState::new(),
        &plain_config(),
    );
    session.run().unwrap();
    drop(session);

    let out = String::from_utf8(output).unwrap();
    assert_eq!(out.matches("Divergence:").count(), 2);
    assert!(out.contains("-0.411 %"));
    // 9800 / 9790.2098 - 1 = +0.1%
    assert!(out.contains("+0.100 %"));
}

#[test]
fn test_session_prefilled_from_flags() {
    Command::cargo_bin("etf-divergence")
        .unwrap()
        .args([
            "interactive",
            "--futures-price",
            "9800",
            "--forward-rate",
            "0.1",
            "--grams-per-unit",
            "1",
        ])
        .write_stdin("etf 9750\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-0.411 %"));
}
