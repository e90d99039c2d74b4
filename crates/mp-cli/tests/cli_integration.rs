//! Integration tests for the driver binaries, run as actual
//! subprocesses (grounded in the teacher's `fibrust-cli`
//! `cli_integration.rs`: `assert_cmd` + `predicates`, one binary fetched
//! per helper).

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(bin: &str) -> Command {
    Command::cargo_bin(bin).unwrap()
}

#[test]
fn pi_prints_leading_three_point_one_four() {
    cmd("pi")
        .args(["-d", "20"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3.14159"));
}

#[test]
fn ln2_prints_leading_zero_point_six_nine() {
    cmd("ln2")
        .args(["-d", "20"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.69314"));
}

#[test]
fn gamma_of_six_is_120() {
    cmd("gamma")
        .args(["-d", "20", "-x", "6"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("120"));
}

#[test]
fn bessel_j0_of_zero_is_one() {
    cmd("bessel")
        .args(["-d", "20", "-n", "0", "-x", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with('1'));
}

#[test]
fn mptest_reports_all_checks_passing() {
    cmd("mptest")
        .args(["-d", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checks passed"))
        .stdout(predicate::str::contains("FAIL").not());
}
