//! Integration tests for the complex_demo binary
//!
//! Runs the built binary and checks stdout, stderr and the exit status

use assert_cmd::Command;
use predicates::prelude::*;

fn complex_demo() -> Command {
    let mut cmd = Command::cargo_bin("complex_demo").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Fixed Demonstration
// =============================================================================

#[test]
fn test_demo_without_arguments() {
    complex_demo().assert().success().stdout(
        "(1, 2)\n\
         (3, 4)\n\
         Magnitude of c1: 2.23607\n\
         Angle of c1: 63.4349\n\
         Addition: (4, 6)\n\
         Subtraction: (-2, -2)\n\
         Multiplication: (-5, 10)\n\
         Division: (0.44, 0.08)\n",
    );
}

// =============================================================================
// Positional Inputs
// =============================================================================

#[test]
fn test_inputs_are_described() {
    complex_demo()
        .args(["(3,4)", "(2 > 90)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("input:     (3,4)"))
        .stdout(predicate::str::contains("value:     (3, 4)"))
        .stdout(predicate::str::contains("magnitude: 5"))
        .stdout(predicate::str::contains("input:     (2 > 90)"))
        .stdout(predicate::str::contains("Magnitude of c1").not());
}

#[test]
fn test_parse_failure_exits_with_failure() {
    complex_demo()
        .args(["(3,4)", "(1,"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("value:     (3, 4)"))
        .stdout(predicate::str::contains("input:     (1,").not())
        .stderr(predicate::str::contains("failed to parse \"(1,\""))
        .stderr(predicate::str::contains("expected imaginary part"))
        .stderr(predicate::str::contains("  1 | (1,"))
        .stderr(predicate::str::contains("^"));
}

#[test]
fn test_unrecognized_format_exits_with_failure() {
    complex_demo()
        .arg("abc")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid string format"));
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn test_captured_stderr_has_no_color_codes() {
    complex_demo()
        .arg("(a,b)")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_verbose_reports_summary() {
    complex_demo()
        .args(["-v", "(3,4)"])
        .assert()
        .success()
        .stderr(predicate::str::contains("processed inputs"));

    complex_demo()
        .arg("(3,4)")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
