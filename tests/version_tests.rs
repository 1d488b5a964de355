use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn hello_ci_version_reports_build_metadata() {
    let mut cmd = Command::cargo_bin("hello-ci").unwrap();
    cmd.arg("--version");
    // Clap prints the long_version when --version is used; ensure key fields exist
    cmd.assert().success().stdout(
        predicate::str::contains("version: 1.0.0")
            .and(predicate::str::contains("git sha:"))
            .and(predicate::str::contains("build time (UTC):"))
            .and(predicate::str::contains("target:")),
    );
}

#[test]
fn unknown_flags_are_rejected() {
    let mut cmd = Command::cargo_bin("hello-ci").unwrap();
    cmd.arg("--output").arg("x.json");
    cmd.assert().failure();
}
