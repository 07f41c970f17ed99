//! Integration tests for the `alea` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn alea() -> Command {
    Command::cargo_bin("alea").unwrap()
}

fn store_arg(dir: &TempDir) -> String {
    dir.path().join("alea.json").display().to_string()
}

// ---------------------------------------------------------------------------
// roll / flip / draw
// ---------------------------------------------------------------------------

#[test]
fn roll_uses_default_sides() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["roll", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("(6 faces)"));
}

#[test]
fn roll_with_override_sides() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["roll", "--sides", "1", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (1 faces)"));
}

#[test]
fn roll_clamps_zero_sides() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["roll", "--sides", "0", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (1 faces)"));
}

#[test]
fn flip_shows_default_labels() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["flip", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::is_match("heads|tails").unwrap());
}

#[test]
fn flip_shows_configured_labels() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    alea()
        .args(["config", "--store", &store, "coin", "pile", "face"])
        .assert()
        .success();
    alea()
        .args(["flip", "--store", &store])
        .assert()
        .success()
        .stdout(predicate::str::is_match("pile|face").unwrap());
}

#[test]
fn draw_produces_a_standard_card() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["draw", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::is_match("[♠♥♦♣]").unwrap());
}

#[test]
fn draw_custom_without_cards_fails() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["draw", "--custom", "--store", &store_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no custom cards"));
}

#[test]
fn draw_custom_uses_configured_cards() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    alea()
        .args(["config", "--store", &store, "card-add", "Joker"])
        .assert()
        .success();
    alea()
        .args(["draw", "--custom", "--store", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joker"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_show_lists_defaults() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["config", "--store", &store_arg(&dir), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("die faces"))
        .stdout(predicate::str::contains("6"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn config_die_persists() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    alea()
        .args(["config", "--store", &store, "die", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Die faces set to 12."));
    alea()
        .args(["config", "--store", &store, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12"));
}

#[test]
fn config_die_zero_clamped() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["config", "--store", &store_arg(&dir), "die", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Die faces set to 1."));
}

#[test]
fn config_coin_rejects_blank_label() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["config", "--store", &store_arg(&dir), "coin", " ", "tails"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn config_card_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    alea()
        .args(["config", "--store", &store, "card-add", "Joker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card added: Joker"));
    alea()
        .args(["config", "--store", &store, "card-add", "Joker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card already present: Joker"));
    alea()
        .args(["config", "--store", &store, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joker"));
    alea()
        .args(["config", "--store", &store, "card-remove", "Joker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card removed: Joker"));
    alea()
        .args(["config", "--store", &store, "card-clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 custom cards."));
}

// ---------------------------------------------------------------------------
// best
// ---------------------------------------------------------------------------

#[test]
fn best_defaults_to_zero() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["best", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best streak: 0"));
}

#[test]
fn best_reset() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["best", "--reset", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best streak reset to 0."));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_cleanly() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["play", "--store", &store_arg(&dir)])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_session_persists_best_streak() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    alea()
        .args(["play", "--store", &store])
        .write_stdin("set die 1\npredict\nguess 1\nroll\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct! Streak: 1"));
    alea()
        .args(["best", "--store", &store])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best streak: 1"));
}

#[test]
fn play_session_persists_settings() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    alea()
        .args(["play", "--store", &store])
        .write_stdin("set die 9\nquit\n")
        .assert()
        .success();
    alea()
        .args(["config", "--store", &store, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9"));
}

#[test]
fn play_reports_bad_commands_without_exiting() {
    let dir = TempDir::new().unwrap();
    alea()
        .args(["play", "--store", &store_arg(&dir)])
        .write_stdin("frobnicate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command"))
        .stdout(predicate::str::contains("Goodbye!"));
}
