//! End-to-end tests of the `generator` binary.

use assert_cmd::cargo;
use assert_cmd::Command;
use matchstick::validate::is_valid_solution;
use matchstick::Puzzle;
use predicates::prelude::*;

fn run_generator(args: &[&str]) -> assert_cmd::assert::Assert {
    Command::new(cargo::cargo_bin!("generator"))
        .args(args)
        .env_remove("RUST_LOG")
        .assert()
}

fn stdout_of(args: &[&str]) -> String {
    let output = run_generator(args).success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn prints_one_line() {
    let stdout = stdout_of(&["3", "--seed", "5"]);
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].matches('=').count(), 1);
    assert!(!lines[0].contains('?'));
}

#[test]
fn fixed_seed_is_reproducible() {
    assert_eq!(stdout_of(&["4", "--seed", "1234"]), stdout_of(&["4", "--seed", "1234"]));
}

#[test]
fn default_size_is_three() {
    assert_eq!(stdout_of(&["--seed", "9"]), stdout_of(&["3", "--seed", "9"]));
}

#[test]
fn solution_on_second_line() {
    let stdout = stdout_of(&["3", "--seed", "77", "--solution"]);
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], stdout_of(&["3", "--seed", "77"]).trim_end());

    // a solution never holds an eleven or an empty digit, so its text reads back exactly
    let solution = lines[1].parse::<Puzzle>().unwrap();
    assert_eq!(solution.to_string(), lines[1]);
    assert!(is_valid_solution(&solution));
}

#[test]
fn renders_matchsticks() {
    run_generator(&["3", "--seed", "3", "--render"])
        .success()
        .stdout(predicate::str::contains("Move a match puzzle!"))
        .stdout(predicate::str::contains("#####"));
}

#[test]
fn rejects_small_size() {
    run_generator(&["2"])
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("puzzle size must be between 3 and 8, got 2"));
}

#[test]
fn rejects_large_size() {
    run_generator(&["9"])
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_explains_size_cap() {
    run_generator(&["--help"])
        .success()
        .stdout(predicate::str::contains("3 to 8"))
        .stdout(predicate::str::contains("true equations get rarer"));
}

#[test]
fn rejects_non_numeric_size() {
    run_generator(&["three"])
        .failure()
        .stdout(predicate::str::is_empty());
}
