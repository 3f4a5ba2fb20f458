//! Regression tests for `lint_bsd_port` false positives: variables and
//! targets that are only "known" in combination with another
//! assignment in the same file (an `OPTIONS_DEFINE` entry, a `FLAVORS`
//! entry, a `.PHONY`-style special target) must not be flagged just
//! because they aren't in the static knowledge base by themselves.

#![allow(clippy::unwrap_used)]

use portfmt::builder::parse_str;
use portfmt::edit::lint_bsd_port;

fn unknown_messages(text: &str) -> Vec<String> {
    let ast = parse_str(text).unwrap();
    lint_bsd_port(&ast)
        .into_iter()
        .map(|f| f.message)
        .collect()
}

#[test]
fn options_helper_variable_is_not_flagged() {
    let text = "OPTIONS_DEFINE=\tDOCS\nDOCS_DESC=\tBuild documentation\n";
    let findings = unknown_messages(text);
    assert!(
        findings.iter().all(|m| !m.contains("DOCS_DESC")),
        "unexpected findings: {findings:?}"
    );
}

#[test]
fn flavors_helper_variable_is_not_flagged() {
    let text = "FLAVORS=\tpy39\npy39_PLIST_FILES=\tbin/foo\n";
    let findings = unknown_messages(text);
    assert!(
        findings.iter().all(|m| !m.contains("py39_PLIST_FILES")),
        "unexpected findings: {findings:?}"
    );
}

#[test]
fn cabal_datadir_variable_is_not_flagged_when_cabal_is_used() {
    let text = "USES=\tcabal\nCABAL_DATADIR_VARS=\tmy-exe:MY_DATADIR\n";
    let findings = unknown_messages(text);
    assert!(
        findings.iter().all(|m| !m.contains("CABAL_DATADIR_VARS")),
        "unexpected findings: {findings:?}"
    );
}

#[test]
fn special_target_is_not_flagged_as_unknown() {
    let text = ".PHONY: dummy\n";
    let findings = unknown_messages(text);
    assert!(
        findings.iter().all(|m| !m.contains(".PHONY")),
        "unexpected findings: {findings:?}"
    );
}

#[test]
fn target_with_variable_substitution_source_is_not_flagged() {
    let text = "${PORTNAME}-install:\n\techo hi\n";
    let findings = unknown_messages(text);
    assert!(findings.is_empty(), "unexpected findings: {findings:?}");
}

#[test]
fn genuinely_unknown_variable_is_still_flagged() {
    let text = "NOT_A_REAL_OPTION_HELPER=\tbar\n";
    let findings = unknown_messages(text);
    assert!(findings.iter().any(|m| m.contains("NOT_A_REAL_OPTION_HELPER")));
}
