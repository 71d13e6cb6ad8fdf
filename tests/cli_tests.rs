//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("org-loc"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("org-loc"));
}

#[test]
fn test_cli_help_describes_the_org_argument() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("org-loc"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Count lines of code"))
        .stdout(predicate::str::contains("ORG"));
}

#[test]
fn test_missing_org_argument_is_a_usage_error() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("org-loc"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("ORG"));
}

#[test]
fn test_extra_positional_argument_is_rejected() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("org-loc"));
    cmd.args(["acme", "extra"]);
    cmd.assert().failure().code(1).stderr(predicate::str::contains("Usage"));
}
