//! CLI integration tests for `portclippy`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn portclippy_cmd() -> Command {
    Command::cargo_bin("portclippy").expect("failed to find portclippy binary")
}

#[test]
fn unknown_variable_is_reported_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "TOTALLY_MADE_UP_VAR=\tfoo\n").unwrap();

    portclippy_cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unknown variable"))
        .stdout(predicate::str::contains("TOTALLY_MADE_UP_VAR"));
}

#[test]
fn clean_port_exits_zero_with_no_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTNAME=\tfoo\nPORTVERSION=\t1.0\n").unwrap();

    portclippy_cmd()
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn duplicate_command_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "post-install:\n\techo hi\n\techo hi\n").unwrap();

    portclippy_cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("duplicate of the command"));
}

#[test]
fn unsorted_uses_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "USES=\tgmake cmake\n").unwrap();

    portclippy_cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not sorted"));
}

#[test]
fn commented_out_portrevision_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "#PORTREVISION=\t1\n").unwrap();

    portclippy_cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("should be deleted"));
}

#[test]
fn nonexistent_file_reports_an_error() {
    portclippy_cmd()
        .arg("/nonexistent/path/Makefile")
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn multiple_files_are_each_reported() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.mk");
    let b = dir.path().join("b.mk");
    fs::write(&a, "MADE_UP_A=\tfoo\n").unwrap();
    fs::write(&b, "MADE_UP_B=\tfoo\n").unwrap();

    portclippy_cmd()
        .arg(&a)
        .arg(&b)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MADE_UP_A"))
        .stdout(predicate::str::contains("MADE_UP_B"));
}
