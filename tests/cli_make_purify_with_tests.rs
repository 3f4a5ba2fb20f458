//! CLI integration tests for `portedit`'s programmatic edits
//! (`bump-revision`, `bump-epoch`, `set-version`, `merge`, `get`,
//! `apply`, `unknown-vars`, `unknown-targets`).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn portedit_cmd() -> Command {
    Command::cargo_bin("portedit").expect("failed to find portedit binary")
}

#[test]
fn bump_revision_inserts_when_absent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTNAME=\tfoo\nPORTVERSION=\t1.0\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("bump-revision")
        .assert()
        .success()
        .stdout(predicate::str::contains("PORTREVISION=\t1"));
}

#[test]
fn bump_revision_increments_existing_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTVERSION=\t1.0\nPORTREVISION=\t3\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("bump-revision")
        .assert()
        .success()
        .stdout(predicate::str::contains("PORTREVISION=\t4"));
}

#[test]
fn set_version_clears_portrevision() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTVERSION=\t1.0\nPORTREVISION=\t3\n").unwrap();

    let output = portedit_cmd()
        .arg(&path)
        .arg("set-version")
        .arg("2.0")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("PORTVERSION=\t2.0"));
    assert!(!text.contains("PORTREVISION"));
}

#[test]
fn merge_adds_values_without_duplicating() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "USES=\tcmake\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("merge")
        .arg("-e")
        .arg("USES=gmake cmake")
        .assert()
        .success()
        .stdout(predicate::str::contains("USES=\tcmake gmake"));
}

#[test]
fn in_place_flag_rewrites_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTVERSION=\t1.0\n").unwrap();

    portedit_cmd()
        .arg("-i")
        .arg(&path)
        .arg("bump-revision")
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("PORTREVISION=\t1"));
}

#[test]
fn set_version_without_a_version_assignment_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTNAME=\tfoo\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("set-version")
        .arg("2.0")
        .assert()
        .code(1);
}

#[test]
fn bump_epoch_inserts_when_absent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTVERSION=\t1.0\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("bump-epoch")
        .assert()
        .success()
        .stdout(predicate::str::contains("PORTEPOCH=\t1"));
}

#[test]
fn get_prints_matching_variables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTNAME=\tfoo\nMAINTAINER=\tports@FreeBSD.org\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("get")
        .arg("^PORT")
        .assert()
        .success()
        .stdout(predicate::str::contains("PORTNAME"))
        .stdout(predicate::str::contains("MAINTAINER").not());
}

#[test]
fn apply_list_prints_the_available_pass_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTNAME=\tfoo\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("apply")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dedup-tokens"));
}

#[test]
fn apply_unknown_edit_name_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTNAME=\tfoo\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("apply")
        .arg("not-a-real-pass")
        .assert()
        .code(1);
}

#[test]
fn unknown_vars_reports_findings_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "TOTALLY_MADE_UP_VAR=\tfoo\n").unwrap();

    portedit_cmd()
        .arg(&path)
        .arg("unknown-vars")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("TOTALLY_MADE_UP_VAR"));
}
