use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn cli_help_lists_surface() {
    let mut cmd = Command::cargo_bin("cpp-call-explorer").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--exclude-names"))
        .stdout(predicate::str::contains("--exclude-paths"))
        .stdout(predicate::str::contains("--edit"))
        .stdout(predicate::str::contains("--attribute"));
}

#[test]
fn cli_requires_an_input() {
    let mut cmd = Command::cargo_bin("cpp-call-explorer").unwrap();
    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn cli_rejects_malformed_compilation_database() {
    // The database is validated before libclang is even loaded, so this
    // path is exercisable without a clang installation.
    let mut db = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    db.write_all(b"{ not json ]").unwrap();

    let mut cmd = Command::cargo_bin("cpp-call-explorer").unwrap();
    cmd.arg(db.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid compilation database"));
}
