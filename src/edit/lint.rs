//! Lint-only passes (`portclippy`): read-only checks that report
//! [`Finding`]s instead of mutating the tree.

use crate::ast::{Node, VarModifier};
use crate::compare;
use crate::kb;
use crate::metadata::Metadata;
use crate::span::LineRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub range: LineRange,
    pub message: String,
}

impl Finding {
    fn new(severity: Severity, range: LineRange, message: impl Into<String>) -> Self {
        Self {
            severity,
            range,
            message: message.into(),
        }
    }
}

/// Flags assignments to variables the knowledge base doesn't recognize
/// and unknown target names, the two checks `bsd.port.mk`'s own `make
/// -V` reflection can't catch before submission.
pub fn lint_bsd_port(ast: &crate::ast::Ast) -> Vec<Finding> {
    let mut findings = Vec::new();
    let meta = Metadata::new(ast);
    let options: Vec<String> = meta.options().to_vec();
    let flavors: Vec<String> = meta.flavors().to_vec();
    let uses: Vec<String> = meta.uses().to_vec();

    ast.walk(|node| {
        match node {
            Node::Variable(v) => {
                if !kb::is_known_variable(&v.name)
                    && kb::is_options_helper(&v.name, &options).is_none()
                    && kb::is_flavors_helper(&v.name, &flavors).is_none()
                    && kb::is_shebang_lang(&v.name, &[]).is_none()
                    && kb::is_cabal_datadir_vars(&v.name, &uses).is_none()
                {
                    findings.push(Finding::new(
                        Severity::Warning,
                        v.header.line,
                        format!("unknown variable `{}`", v.name),
                    ));
                }
            }
            Node::Target(t) => {
                for source in &t.sources {
                    if !kb::is_known_target_with_option_suffix(source)
                        && !kb::is_special_target(source)
                        && !source.contains('$')
                    {
                        findings.push(Finding::new(
                            Severity::Warning,
                            t.header.line,
                            format!("unknown target `{source}`"),
                        ));
                    }
                }
            }
            _ => {}
        }
        true
    });
    findings
}

/// Finds target command lines that are byte-identical to another
/// command in the same target, a common copy-paste mistake.
pub fn lint_clones(ast: &crate::ast::Ast) -> Vec<Finding> {
    let mut findings = Vec::new();
    ast.walk(|node| {
        if let Node::Target(t) = node {
            let mut seen: Vec<(&Vec<String>, LineRange)> = Vec::new();
            for child in &t.body {
                if let Node::TargetCommand(cmd) = child {
                    if let Some((_, first_range)) =
                        seen.iter().find(|(words, _)| **words == cmd.words)
                    {
                        findings.push(Finding::new(
                            Severity::Warning,
                            cmd.header.line,
                            format!(
                                "duplicate of the command at line {}",
                                first_range.start
                            ),
                        ));
                    } else {
                        seen.push((&cmd.words, cmd.header.line));
                    }
                }
            }
        }
        true
    });
    findings
}

/// `PORTREVISION`/`PORTEPOCH` commented out rather than deleted are a
/// common stale-metadata smell; `.undef`-style removal is preferred.
pub fn lint_commented_portrevision(ast: &crate::ast::Ast) -> Vec<Finding> {
    let mut findings = Vec::new();
    ast.walk(|node| {
        if let Node::Comment(c) = node {
            for line in &c.lines {
                let body = line.trim_start_matches('#').trim_start();
                if body.starts_with("PORTREVISION")
                    || body.starts_with("PORTEPOCH")
                {
                    findings.push(Finding::new(
                        Severity::Warning,
                        c.header.line,
                        "commented-out PORTREVISION/PORTEPOCH should be deleted, not disabled",
                    ));
                }
            }
        }
        true
    });
    findings
}

/// Reports every variable assignment whose values are not already in
/// the order [`compare::compare`] would produce, for variables the
/// knowledge base flags [`kb::VarFlags::SORTED`].
pub fn lint_order(ast: &crate::ast::Ast) -> Vec<Finding> {
    let mut findings = Vec::new();
    ast.walk(|node| {
        if let Node::Variable(v) = node {
            let (_, flags, _) = kb::lookup_variable_resolved(&v.name);
            if v.modifier != VarModifier::Shell
                && flags.sorted()
                && !compare::is_sorted(&v.name, &v.words)
            {
                findings.push(Finding::new(
                    Severity::Warning,
                    v.header.line,
                    format!("values of `{}` are not sorted", v.name),
                ));
            }
        }
        true
    });
    findings
}
