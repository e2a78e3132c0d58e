//! End-to-end tests running the `lpi` binary and checking the report
//! format against the output contract.

use assert_cmd::Command;
use predicates::prelude::*;

fn lpi_cmd() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("lpi").unwrap()
}

#[test]
fn reference_run_report() {
    let output = lpi_cmd().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "expected exactly three lines:\n{stdout}");

    // 10 decimals, and the digits the remainder bound (~2e-8) pins down
    let pi_re = regex_match(r"^π ≈ 3\.1415926\d{3}$");
    assert!(pi_re.eval(lines[0]), "bad π line: {}", lines[0]);

    assert_eq!(lines[1], "Iterations: 100000000");

    let time_re = regex_match(r"^Time: \d+\.\d{6} seconds$");
    assert!(time_re.eval(lines[2]), "bad time line: {}", lines[2]);
}

#[test]
fn verbose_logs_to_stderr_only() {
    lpi_cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("π ≈ 3.1415926"))
        .stderr(predicate::str::contains("Leibniz terms"));
}

#[test]
fn quiet_run_keeps_stderr_empty() {
    lpi_cmd()
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn rejects_unknown_arguments() {
    lpi_cmd().arg("--iterations").assert().failure();
    lpi_cmd().arg("12345").assert().failure();
}

fn regex_match(re: &str) -> predicates::str::RegexPredicate {
    predicate::str::is_match(re).unwrap()
}
