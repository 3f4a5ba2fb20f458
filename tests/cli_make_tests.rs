//! CLI integration tests for `portscan`, the recursive ports-tree linter.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn portscan_cmd() -> Command {
    Command::cargo_bin("portscan").expect("failed to find portscan binary")
}

#[test]
fn scans_a_single_clean_makefile() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Makefile"), "PORTNAME=\tfoo\n").unwrap();

    portscan_cmd()
        .args(["-p"])
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("scanned 1 origin(s), 0 finding(s)"));
}

#[test]
fn recurses_into_category_and_port_directories() {
    let dir = TempDir::new().unwrap();
    let port_a = dir.path().join("devel/porta");
    let port_b = dir.path().join("www/portb");
    fs::create_dir_all(&port_a).unwrap();
    fs::create_dir_all(&port_b).unwrap();
    fs::write(port_a.join("Makefile"), "PORTNAME=\tfoo\n").unwrap();
    fs::write(port_b.join("Makefile"), "TOTALLY_MADE_UP=\tbar\n").unwrap();

    portscan_cmd()
        .args(["-p"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("scanned 2 origin(s)"))
        .stdout(predicate::str::contains("TOTALLY_MADE_UP"));
}

#[test]
fn ignores_files_not_named_makefile() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Makefile"), "PORTNAME=\tfoo\n").unwrap();
    fs::write(dir.path().join("README"), "not a makefile\n").unwrap();
    fs::write(dir.path().join("pkg-descr"), "description\n").unwrap();

    portscan_cmd()
        .args(["-p"])
        .arg(dir.path())
        .assert()
        .stdout(predicate::str::contains("scanned 1 origin(s)"));
}

#[test]
fn single_file_argument_is_accepted_directly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "PORTNAME=\tfoo\n").unwrap();

    portscan_cmd()
        .args(["-p"])
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("scanned 1 origin(s)"));
}

#[test]
fn empty_tree_reports_zero_makefiles() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    portscan_cmd()
        .args(["-p"])
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("scanned 0 origin(s)"));
}

#[test]
fn query_regex_filters_origins() {
    let dir = TempDir::new().unwrap();
    let port_a = dir.path().join("devel/porta");
    let port_b = dir.path().join("www/portb");
    fs::create_dir_all(&port_a).unwrap();
    fs::create_dir_all(&port_b).unwrap();
    fs::write(port_a.join("Makefile"), "PORTNAME=\tfoo\n").unwrap();
    fs::write(port_b.join("Makefile"), "PORTNAME=\tbar\n").unwrap();

    portscan_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["-q", "^devel/"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("scanned 1 origin(s)"));
}

#[test]
fn logdir_persists_a_log_file_and_latest_symlink() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Makefile"), "PORTNAME=\tfoo\n").unwrap();
    let logdir = TempDir::new().unwrap();

    portscan_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["-l"])
        .arg(logdir.path())
        .assert()
        .code(0);

    assert!(logdir.path().join("portscan-latest").exists());
    let entries: Vec<_> = fs::read_dir(logdir.path()).unwrap().collect();
    assert!(entries.len() >= 2);
}
