//! Integration tests for the koen CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn koen() -> Command {
    Command::cargo_bin("koen").unwrap()
}

// ---------------------------------------------------------------------------
// archetypes
// ---------------------------------------------------------------------------

#[test]
fn archetypes_table() {
    koen()
        .arg("archetypes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goblin"))
        .stdout(predicate::str::contains("Zombie Army"))
        .stdout(predicate::str::contains("Experience"));
}

#[test]
fn archetypes_json() {
    let output = koen().args(["archetypes", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0]["name"], "Goblin");
    assert_eq!(list[5]["exp_reward"], 200);
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_stats_then_exit() {
    koen()
        .args(["play", "--name", "Aria", "--seed", "1"])
        .write_stdin("3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Aria's Stats ==="))
        .stdout(predicate::str::contains("Health: 100/100"))
        .stdout(predicate::str::contains("Thanks, young adventurer!"));
}

#[test]
fn play_prompts_for_name() {
    koen()
        .args(["play", "--seed", "1"])
        .write_stdin("Bran\nstats\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your character's name:"))
        .stdout(predicate::str::contains("=== Bran's Stats ==="));
}

#[test]
fn play_without_name_input_fails() {
    koen()
        .arg("play")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no character name given"));
}

#[test]
fn play_reports_invalid_choice_and_continues() {
    koen()
        .args(["play", "--name", "Aria", "--seed", "1"])
        .write_stdin("9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid choice: 9"))
        .stdout(predicate::str::contains("Thanks, young adventurer!"));
}

#[test]
fn play_gives_up_after_repeated_invalid_input() {
    koen()
        .args(["play", "--name", "Aria", "--seed", "1"])
        .write_stdin("9\n9\n9\n9\n9\n6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many invalid inputs"));
}

#[test]
fn play_shop_without_gold() {
    koen()
        .args(["play", "--name", "Aria", "--seed", "1"])
        .write_stdin("2\n1\n6\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Shop ==="))
        .stdout(predicate::str::contains("not enough koen: need 50, have 0"))
        .stdout(predicate::str::contains("You leave the Shop."));
}

#[test]
fn play_rest_at_full_health() {
    koen()
        .args(["play", "--name", "Aria", "--seed", "1"])
        .write_stdin("5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Aria, you are already at full health!",
        ));
}

#[test]
fn play_ends_quietly_on_eof() {
    koen()
        .args(["play", "--name", "Aria"])
        .write_stdin("3\n")
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_summary() {
    koen()
        .args(["simulate", "--encounters", "3", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encounters:"))
        .stdout(predicate::str::contains("Level:"));
}

#[test]
fn simulate_verbose_lists_encounters() {
    koen()
        .args(["simulate", "--encounters", "2", "--seed", "7", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"));
}

#[test]
fn simulate_is_deterministic() {
    let run = || {
        koen()
            .args(["simulate", "--encounters", "5", "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
