//! Integration tests for the full pipeline: parse a port `Makefile`
//! tree from disk, resolve its local `.include`s, then reformat the
//! spliced result.

#![allow(clippy::unwrap_used)]

use portfmt::builder::parse_str;
use portfmt::format::print;
use portfmt::include::{resolve_includes, IncludeSearchPath};
use portfmt::settings::ParserSettings;
use std::fs;
use tempfile::TempDir;

#[test]
fn local_include_body_is_spliced_before_printing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Makefile.inc"), "EXTRA_PATCHES=\tpatch-foo\n").unwrap();
    let main = dir.path().join("Makefile");
    fs::write(&main, "PORTNAME=\tfoo\n.include \"Makefile.inc\"\n").unwrap();

    let text = fs::read_to_string(&main).unwrap();
    let mut ast = parse_str(&text).unwrap();
    let search = IncludeSearchPath::for_file(&main);
    resolve_includes(&mut ast, &search, 8).unwrap();

    let output = print(&ast, &ParserSettings::default());
    assert!(output.contains("EXTRA_PATCHES=\tpatch-foo"));
}

#[test]
fn system_includes_are_left_as_bare_directives() {
    let dir = TempDir::new().unwrap();
    let main = dir.path().join("Makefile");
    fs::write(&main, "PORTNAME=\tfoo\n\n.include <bsd.port.mk>\n").unwrap();

    let text = fs::read_to_string(&main).unwrap();
    let mut ast = parse_str(&text).unwrap();
    let search = IncludeSearchPath::for_file(&main);
    resolve_includes(&mut ast, &search, 8).unwrap();

    let output = print(&ast, &ParserSettings::default());
    assert!(output.contains(".include <bsd.port.mk>"));
}

#[test]
fn masterdir_relative_include_resolves_against_the_assigned_variable() {
    let dir = TempDir::new().unwrap();
    let master = dir.path().join("master");
    fs::create_dir_all(&master).unwrap();
    fs::write(master.join("Makefile.inc"), "SHARED=\tvalue\n").unwrap();

    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    let main = sub.join("Makefile");
    fs::write(
        &main,
        format!(
            "MASTERDIR=\t{}\n.include \"${{MASTERDIR}}/Makefile.inc\"\n",
            master.display()
        ),
    )
    .unwrap();

    let text = fs::read_to_string(&main).unwrap();
    let mut ast = parse_str(&text).unwrap();
    let search = IncludeSearchPath::for_file(&main);
    resolve_includes(&mut ast, &search, 8).unwrap();

    let output = print(&ast, &ParserSettings::default());
    assert!(output.contains("SHARED=\tvalue"));
}

#[test]
fn nested_includes_resolve_transitively() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("c.mk"), "LEAF=\tvalue\n").unwrap();
    fs::write(dir.path().join("b.mk"), ".include \"c.mk\"\n").unwrap();
    let main = dir.path().join("a.mk");
    fs::write(&main, ".include \"b.mk\"\n").unwrap();

    let text = fs::read_to_string(&main).unwrap();
    let mut ast = parse_str(&text).unwrap();
    let search = IncludeSearchPath::for_file(&main);
    resolve_includes(&mut ast, &search, 8).unwrap();

    let output = print(&ast, &ParserSettings::default());
    assert!(output.contains("LEAF=\tvalue"));
}
