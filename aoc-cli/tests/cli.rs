//! End-to-end tests for the `aoc` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PIPE_MAZE: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

fn aoc() -> Command {
    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.env_remove("AOC_INPUT_DIR").env_remove("RUST_LOG");
    cmd
}

fn input_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2023_day10.txt"), PIPE_MAZE).unwrap();
    temp
}

#[test]
fn solves_pipe_maze_from_input_dir() {
    let temp = input_dir();
    aoc()
        .args(["--year", "2023", "--day", "10", "--input-dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2023/10 Part 1: 8 (parse: "))
        .stdout(predicate::str::contains("2023/10 Part 2: 1 (solve: "))
        .stdout(predicate::str::contains("Parts: 2 solved, 0 failed"));
}

#[test]
fn quiet_mode_prints_only_answers() {
    let temp = input_dir();
    aoc()
        .args(["-q", "-y", "2023", "-d", "10", "--input-dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("8\n1\n");
}

#[test]
fn input_dir_is_read_from_the_environment() {
    let temp = input_dir();
    aoc()
        .env("AOC_INPUT_DIR", temp.path())
        .args(["-q", "-d", "10", "-p", "1"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn explicit_input_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("maze.txt");
    fs::write(&file, ".....\n.S-7.\n.|.|.\n.L-J.\n.....\n").unwrap();

    aoc()
        .args(["-q", "--day", "10", "--input"])
        .arg(&file)
        .assert()
        .success()
        .stdout("4\n1\n");
}

#[test]
fn missing_input_fails_each_part() {
    let temp = TempDir::new().unwrap();
    aoc()
        .args(["--year", "2023", "--day", "10", "--input-dir"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("2023/10 Part 1: Error - Input file not found"))
        .stderr(predicate::str::contains("2023/10 Part 2: Error - Input file not found"))
        .stderr(predicate::str::contains("2 of 2 part(s) failed"));
}

#[test]
fn malformed_maze_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2023_day10.txt"), ".....\n.F-7.\n.L-J.\n").unwrap();

    aoc()
        .args(["-d", "10", "--input-dir"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2023/10 Part 1: Error - "))
        .stderr(predicate::str::contains("start"));
}

#[test]
fn input_without_day_is_rejected() {
    aoc()
        .args(["--input", "maze.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--day"));
}

#[test]
fn unmatched_tags_run_nothing() {
    aoc()
        .args(["--tags", "no-such-tag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No solvers found"));
}

#[test]
fn debug_logging_renders_the_loop() {
    let temp = input_dir();
    aoc()
        .args(["-q", "-vv", "-d", "10", "-p", "2", "--input-dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("┌"));
}
