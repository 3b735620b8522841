//! End-to-end tests for the `tally` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn tally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tally"))
}

#[test]
fn shows_help() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("coin"));
}

#[test]
fn counts_default_input_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("word_count.tst"), "a b\nc\n").unwrap();

    tally()
        .current_dir(dir.path())
        .arg("count")
        .assert()
        .success()
        .stdout("File has 3 lines, 3 words, 4 characters\n");
}

#[test]
fn empty_file_is_one_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    tally()
        .arg("count")
        .arg(&path)
        .assert()
        .success()
        .stdout("File has 1 lines, 0 words, 0 characters\n");
}

#[test]
fn missing_file_fails_instead_of_printing_zero() {
    let dir = TempDir::new().unwrap();

    tally()
        .current_dir(dir.path())
        .arg("count")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("word_count.tst"));
}

#[test]
fn several_files_report_a_total() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "one two\n").unwrap();
    fs::write(&b, "three").unwrap();

    tally()
        .arg("count")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "total: File has 3 lines, 3 words, 12 characters",
        ));
}

#[test]
fn reads_stdin_with_dash() {
    tally()
        .args(["count", "-"])
        .write_stdin("  spaced    out\twords \n")
        .assert()
        .success()
        .stdout("File has 2 lines, 3 words, 22 characters\n");
}

#[test]
fn json_output_lists_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.txt");
    fs::write(&path, "alpha beta\ngamma").unwrap();

    let assert = tally()
        .args(["count", "--format", "json"])
        .arg(&path)
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["files"][0]["lines"], 2);
    assert_eq!(json["files"][0]["words"], 3);
    assert_eq!(json["files"][0]["chars"], 15);
    assert_eq!(json["total"]["words"], 3);
}

#[test]
fn partial_failure_still_prints_successes() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    fs::write(&good, "x").unwrap();

    tally()
        .arg("count")
        .arg(&good)
        .arg(dir.path().join("gone.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.txt: File has 1 lines"))
        .stdout(predicate::str::contains("total: File has 1 lines, 1 words, 1 characters"))
        .stderr(predicate::str::contains("Error processing"));
}

#[test]
fn repeated_stdin_is_rejected() {
    tally()
        .args(["count", "-", "-"])
        .write_stdin("a b\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("stdin given 2 times"));
}

#[test]
fn seeded_coin_is_reproducible() {
    let run = || {
        let out = tally()
            .args(["coin", "--seed", "11", "ten"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).unwrap()
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.split_whitespace().count(), 10);
    assert!(
        first
            .split_whitespace()
            .all(|face| face == "heads" || face == "tails")
    );
}

#[test]
fn coin_count_json_adds_up() {
    let assert = tally()
        .args(["coin", "--seed", "5", "count", "100", "--format", "json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["kind"], "faces");
    let heads = json["heads"].as_u64().unwrap();
    let tails = json["tails"].as_u64().unwrap();
    assert_eq!(heads + tails, 100);
}

#[test]
fn head_streak_reports_flip_count() {
    tally()
        .args(["coin", "--seed", "1", "head-streak", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("heads in a row"));
}
