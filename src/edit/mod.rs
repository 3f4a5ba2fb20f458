//! Edit passes (C6): a `Pass` runs once over an [`Ast`], either
//! rewriting it in place (mandatory sanitizing passes, optional
//! programmatic edits) or only reporting findings (lint-only passes).
//!
//! Mandatory passes always run before printing; optional and lint-only
//! passes are selected by the `portedit`/`portclippy` binaries.

mod lint;
mod refactor;

pub use lint::{
    lint_bsd_port, lint_clones, lint_commented_portrevision, lint_order, Finding, Severity,
};
pub use refactor::{
    edit_bump_epoch, edit_bump_revision, edit_merge, edit_set_version,
    refactor_collapse_adjacent_variables, refactor_dedup_tokens,
    refactor_remove_consecutive_empty_lines, refactor_sanitize_append_modifier,
    refactor_sanitize_cmake_args, refactor_sanitize_comments,
};

use crate::ast::Ast;
use crate::error::Result;

/// A pass that rewrites an [`Ast`] in place. Mandatory passes return
/// `Ok(true)` when they changed anything, so callers can decide whether
/// a re-parse or re-print is warranted; lint passes never mutate and
/// always return `Ok(false)`.
pub trait Pass {
    fn name(&self) -> &'static str;
    fn run(&self, ast: &mut Ast) -> Result<bool>;
}

/// Runs every mandatory sanitizing pass, in the fixed order the
/// reformatter depends on: comments first, then `-D`/Meson-arg fusion,
/// then collapsing adjacent variables into a single node (so the append
/// sanitizer and dedup see the final merged word list rather than each
/// pre-merge fragment), then append-modifier downgrading, then dedup,
/// then blank-line collapsing.
pub fn run_mandatory_passes(ast: &mut Ast) -> Result<()> {
    refactor_sanitize_comments(ast)?;
    refactor_sanitize_cmake_args(ast)?;
    refactor_collapse_adjacent_variables(ast)?;
    refactor_sanitize_append_modifier(ast)?;
    refactor_dedup_tokens(ast)?;
    refactor_remove_consecutive_empty_lines(ast)?;
    Ok(())
}

macro_rules! pass {
    ($ty:ident, $name:literal, $func:path) => {
        /// A [`Pass`] wrapper so `portedit apply` can dispatch to one
        /// mandatory sanitizing pass by name.
        pub struct $ty;

        impl Pass for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn run(&self, ast: &mut Ast) -> Result<bool> {
                let before = ast.clone();
                $func(ast)?;
                Ok(*ast != before)
            }
        }
    };
}

pass!(SanitizeComments, "sanitize-comments", refactor_sanitize_comments);
pass!(SanitizeCmakeArgs, "sanitize-cmake-args", refactor_sanitize_cmake_args);
pass!(
    CollapseAdjacentVariables,
    "collapse-adjacent-variables",
    refactor_collapse_adjacent_variables
);
pass!(
    SanitizeAppendModifier,
    "sanitize-append-modifier",
    refactor_sanitize_append_modifier
);
pass!(DedupTokens, "dedup-tokens", refactor_dedup_tokens);
pass!(
    RemoveConsecutiveEmptyLines,
    "remove-consecutive-empty-lines",
    refactor_remove_consecutive_empty_lines
);

/// Every [`Pass`] `portedit apply list` enumerates and `portedit apply
/// <edit>` can dispatch to by name, in the same order [`run_mandatory_passes`]
/// runs them.
pub fn available_passes() -> Vec<Box<dyn Pass>> {
    vec![
        Box::new(SanitizeComments),
        Box::new(SanitizeCmakeArgs),
        Box::new(CollapseAdjacentVariables),
        Box::new(SanitizeAppendModifier),
        Box::new(DedupTokens),
        Box::new(RemoveConsecutiveEmptyLines),
    ]
}

/// Looks up a pass by the name [`available_passes`] lists it under.
pub fn find_pass(name: &str) -> Option<Box<dyn Pass>> {
    available_passes().into_iter().find(|p| p.name() == name)
}

#[cfg(test)]
mod pass_tests {
    use super::*;
    use crate::builder::parse_str;

    #[test]
    fn find_pass_resolves_a_known_name() {
        assert!(find_pass("dedup-tokens").is_some());
        assert!(find_pass("not-a-real-pass").is_none());
    }

    #[test]
    fn applying_a_pass_by_name_mutates_the_tree() {
        let mut ast = parse_str("USES=\tgmake cmake cmake\n").unwrap();
        let pass = find_pass("dedup-tokens").unwrap();
        let changed = pass.run(&mut ast).unwrap();
        assert!(changed);
        let crate::ast::Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["gmake".to_string(), "cmake".to_string()]);
    }

    #[test]
    fn available_passes_lists_every_mandatory_pass() {
        assert_eq!(available_passes().len(), 6);
    }
}
