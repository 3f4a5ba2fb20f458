//! Mandatory sanitizing passes plus the optional, spec-driven edits
//! (`portedit --bump-revision`, `--set-version`, `--merge`).

use crate::ast::{Node, VarModifier};
use crate::error::{ParserError, Result, SourceLocation};
use crate::kb::{self, VarFlags};

fn sanitize_comment_text(raw: &str) -> String {
    let trimmed = raw.trim_end();
    let body = trimmed.trim_start_matches('#');
    if body.is_empty() {
        "#".to_string()
    } else if body.starts_with(' ') {
        format!("#{body}")
    } else {
        format!("# {}", body.trim_start())
    }
}

/// Normalizes every comment's leading `# ` spacing and strips trailing
/// whitespace, for both standalone comment lines and trailing
/// end-of-line comments on variables/conditionals/target commands.
pub fn refactor_sanitize_comments(ast: &mut crate::ast::Ast) -> Result<()> {
    ast.walk_mut(|node| {
        match node {
            Node::Comment(c) => {
                for line in &mut c.lines {
                    *line = sanitize_comment_text(line);
                }
            }
            Node::Variable(v) => {
                if let Some(c) = &mut v.comment {
                    *c = sanitize_comment_text(c);
                }
            }
            Node::If(n) => {
                if let Some(c) = &mut n.comment {
                    *c = sanitize_comment_text(c);
                }
            }
            Node::For(n) => {
                if let Some(c) = &mut n.comment {
                    *c = sanitize_comment_text(c);
                }
            }
            Node::TargetCommand(cmd) => {
                if let Some(c) = &mut cmd.comment {
                    *c = sanitize_comment_text(c);
                }
            }
            Node::Include(inc) => {
                if let Some(c) = &mut inc.comment {
                    *c = sanitize_comment_text(c);
                }
            }
            Node::Expr(e) => {
                if let Some(c) = &mut e.comment {
                    *c = sanitize_comment_text(c);
                }
            }
            _ => {}
        }
        true
    });
    Ok(())
}

/// `true` for `CMAKE_ARGS`/`MESON_ARGS` and their `CMAKE_ON`/`CMAKE_OFF`/
/// `MESON_ON`/`MESON_OFF` option-helper forms (§4.6 pass 2).
fn is_cmake_or_meson_args_variable(name: &str) -> bool {
    if matches!(name, "CMAKE_ARGS" | "MESON_ARGS" | "CMAKE_ON" | "CMAKE_OFF" | "MESON_ON" | "MESON_OFF") {
        return true;
    }
    matches!(
        kb::is_options_helper(name, &[]),
        Some((_, "CMAKE_ON" | "CMAKE_OFF" | "MESON_ON" | "MESON_OFF", _))
    )
}

/// Fuses a standalone `-D` token with the word that follows it
/// (`-D` `FOO` → `-DFOO`); words already joined (`-DFOO`) are untouched.
fn fuse_dash_d_tokens(words: &mut Vec<String>) {
    let mut out = Vec::with_capacity(words.len());
    let mut iter = std::mem::take(words).into_iter().peekable();
    while let Some(word) = iter.next() {
        if word == "-D" {
            if let Some(next) = iter.next() {
                out.push(format!("-D{next}"));
                continue;
            }
        }
        out.push(word);
    }
    *words = out;
}

/// `CMAKE_ARGS`/`MESON_ARGS` (and their option-helper `CMAKE_ON`/
/// `CMAKE_OFF`/`MESON_ON`/`MESON_OFF` forms) fuse a standalone `-D`/
/// `-D<opt>` token with the word that follows it into one token,
/// matching the form `cmake.mk`/`meson.mk` expect.
pub fn refactor_sanitize_cmake_args(ast: &mut crate::ast::Ast) -> Result<()> {
    ast.walk_mut(|node| {
        if let Node::Variable(v) = node {
            if is_cmake_or_meson_args_variable(&v.name) {
                fuse_dash_d_tokens(&mut v.words);
            }
        }
        true
    });
    Ok(())
}

const APPEND_MODIFIER_EXEMPT: &[&str] = &["CFLAGS", "CXXFLAGS", "LDFLAGS", "RUSTFLAGS"];

fn is_port_mk_include(path: &str) -> bool {
    let base = path.rsplit('/').next().unwrap_or(path);
    base.starts_with("bsd.port") && base.ends_with(".mk")
}

/// The first assignment to a name keeps its modifier; every subsequent
/// `Append` of the same name (other than [`APPEND_MODIFIER_EXEMPT`]) is
/// downgraded to `Assign`, unless it lives inside an `If`/`For` body
/// (where it may only run conditionally, so a prior top-level assignment
/// doesn't make it redundant). Stops at the first `bsd.port*.mk` include,
/// since variables assigned after that point are overriding framework
/// defaults rather than building up a single port-local value.
pub fn refactor_sanitize_append_modifier(ast: &mut crate::ast::Ast) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    sanitize_append_modifier_run(&mut ast.root, &mut seen, false);
    Ok(())
}

/// Returns `true` once a `bsd.port*.mk` include was reached, telling the
/// caller to stop visiting any further sibling nodes.
fn sanitize_append_modifier_run(
    nodes: &mut [Node],
    seen: &mut std::collections::HashSet<String>,
    in_conditional: bool,
) -> bool {
    for node in nodes.iter_mut() {
        match node {
            Node::Include(inc) => {
                if is_port_mk_include(&inc.path) {
                    return true;
                }
                if sanitize_append_modifier_run(&mut inc.body, seen, in_conditional) {
                    return true;
                }
            }
            Node::Variable(v) => {
                if v.modifier == VarModifier::Append
                    && !in_conditional
                    && !APPEND_MODIFIER_EXEMPT.contains(&v.name.as_str())
                    && seen.contains(&v.name)
                {
                    v.modifier = VarModifier::Assign;
                    v.trailing_plus = false;
                }
                if !in_conditional {
                    seen.insert(v.name.clone());
                }
            }
            Node::If(n) => {
                if sanitize_append_modifier_run(&mut n.body, seen, true) {
                    return true;
                }
                if sanitize_append_modifier_run(&mut n.orelse, seen, true) {
                    return true;
                }
            }
            Node::For(n) => {
                if sanitize_append_modifier_run(&mut n.body, seen, true) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// `true` for `USES`/`USES_OFF` and their `<OPT>_USES`/`<OPT>_USES_OFF`
/// option-helper forms, the one family with a component:args dedup key
/// instead of a whole-word one.
fn is_uses_variable(name: &str) -> bool {
    if matches!(name, "USES" | "USES_OFF") {
        return true;
    }
    matches!(kb::is_options_helper(name, &[]), Some((_, "USES" | "USES_OFF", _)))
}

/// Removes duplicate words, keeping the first occurrence. `USES`
/// components are deduped on the part before `:` (`dedup_tokens.c`'s
/// colon-prefix-first-wins rule), so `cmake:noninja cmake:insource`
/// drops the second entry rather than treating the two as distinct.
fn dedup_words(name: &str, words: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    if is_uses_variable(name) {
        words.retain(|w| {
            let key = w.split_once(':').map_or(w.as_str(), |(prefix, _)| prefix);
            seen.insert(key.to_string())
        });
    } else {
        words.retain(|w| seen.insert(w.clone()));
    }
}

/// Removes duplicate words from every variable the knowledge base marks
/// [`VarFlags::SORTED`] or [`VarFlags::DEDUP`] (`rules.c`'s
/// `skip_dedup = !sorted && !DEDUP`, i.e. dedup applies whenever either
/// flag is set), resolving option/flavor helper suffixes first.
pub fn refactor_dedup_tokens(ast: &mut crate::ast::Ast) -> Result<()> {
    ast.walk_mut(|node| {
        if let Node::Variable(v) = node {
            let (_, flags, _) = kb::lookup_variable_resolved(&v.name);
            if flags.sorted() || flags.contains(VarFlags::DEDUP) {
                dedup_words(&v.name, &mut v.words);
            }
        }
        true
    });
    Ok(())
}

/// Merges a run of consecutive `VAR+=` assignments (or consecutive
/// plain `VAR=` assignments that the builder would otherwise print as
/// separate lines) into the first node, tombstoning the rest.
pub fn refactor_collapse_adjacent_variables(ast: &mut crate::ast::Ast) -> Result<()> {
    collapse_run(&mut ast.root);
    ast.walk_mut(|node| {
        match node {
            Node::If(n) => {
                collapse_run(&mut n.body);
                collapse_run(&mut n.orelse);
            }
            Node::For(n) => collapse_run(&mut n.body),
            Node::Include(inc) => collapse_run(&mut inc.body),
            _ => {}
        }
        true
    });
    Ok(())
}

fn collapse_run(nodes: &mut Vec<Node>) {
    let mut i = 0;
    while i < nodes.len() {
        let Node::Variable(_) = &nodes[i] else {
            i += 1;
            continue;
        };
        let mut j = i + 1;
        while j < nodes.len() {
            // Any Assign-then-Append or Append-then-Append run of the same
            // name merges into the first node, which keeps its own
            // modifier; a trailing Append can never start a run.
            let can_merge = match (&nodes[i], &nodes[j]) {
                (Node::Variable(a), Node::Variable(b)) => {
                    a.name == b.name && b.modifier == VarModifier::Append
                }
                _ => false,
            };
            if !can_merge {
                break;
            }
            let extra = match &nodes[j] {
                Node::Variable(b) => b.words.clone(),
                _ => unreachable!(),
            };
            let extra_range = nodes[j].header().map(|h| h.line);
            if let Node::Variable(a) = &mut nodes[i] {
                a.words.extend(extra);
                if let Some(r) = extra_range {
                    a.header.line = a.header.line.join(r);
                }
            }
            let tombstone_header = nodes[j].header().cloned().unwrap_or_default();
            nodes[j] = Node::Deleted(tombstone_header);
            j += 1;
        }
        i = j;
    }
    nodes.retain(|n| !n.is_deleted());
}

/// Collapses runs of more than one consecutive blank-comment node
/// (an empty source line) down to a single blank line.
pub fn refactor_remove_consecutive_empty_lines(ast: &mut crate::ast::Ast) -> Result<()> {
    dedup_blank_runs(&mut ast.root);
    ast.walk_mut(|node| {
        match node {
            Node::If(n) => {
                dedup_blank_runs(&mut n.body);
                dedup_blank_runs(&mut n.orelse);
            }
            Node::For(n) => dedup_blank_runs(&mut n.body),
            Node::Include(inc) => dedup_blank_runs(&mut inc.body),
            _ => {}
        }
        true
    });
    Ok(())
}

fn is_blank_comment(node: &Node) -> bool {
    matches!(node, Node::Comment(c) if c.lines.iter().all(|l| l.trim().is_empty()))
}

fn dedup_blank_runs(nodes: &mut Vec<Node>) {
    let mut out = Vec::with_capacity(nodes.len());
    let mut prev_blank = false;
    for node in nodes.drain(..) {
        let blank = is_blank_comment(&node);
        if blank && prev_blank {
            continue;
        }
        prev_blank = blank;
        out.push(node);
    }
    *nodes = out;
}

/// Bumps `PORTREVISION` by one, inserting `PORTREVISION= 1` directly
/// after `PORTVERSION`/`DISTVERSION` if it isn't already present.
pub fn edit_bump_revision(ast: &mut crate::ast::Ast) -> Result<()> {
    if let Some(Node::Variable(v)) = find_variable_mut(&mut ast.root, "PORTREVISION") {
        let current: u64 = v
            .words
            .first()
            .and_then(|w| w.parse().ok())
            .unwrap_or(0);
        v.words = vec![(current + 1).to_string()];
        return Ok(());
    }
    insert_after_version(&mut ast.root, "PORTREVISION", "1")
}

/// Bumps `PORTEPOCH` by one, inserting `PORTEPOCH= 1` directly after
/// `PORTVERSION`/`DISTVERSION` if it isn't already present.
pub fn edit_bump_epoch(ast: &mut crate::ast::Ast) -> Result<()> {
    if let Some(Node::Variable(v)) = find_variable_mut(&mut ast.root, "PORTEPOCH") {
        let current: u64 = v
            .words
            .first()
            .and_then(|w| w.parse().ok())
            .unwrap_or(0);
        v.words = vec![(current + 1).to_string()];
        return Ok(());
    }
    insert_after_version(&mut ast.root, "PORTEPOCH", "1")
}

/// Sets `PORTVERSION` (or `DISTVERSION`, whichever is present) to
/// `new_version` and clears any existing `PORTREVISION`, matching the
/// upstream convention that a version bump resets the revision.
pub fn edit_set_version(ast: &mut crate::ast::Ast, new_version: &str) -> Result<()> {
    let mut set_any = false;
    for name in ["PORTVERSION", "DISTVERSION"] {
        if let Some(Node::Variable(v)) = find_variable_mut(&mut ast.root, name) {
            v.words = vec![new_version.to_string()];
            set_any = true;
        }
    }
    if !set_any {
        return Err(ParserError::EditFailed {
            location: SourceLocation::new(),
            message: "no PORTVERSION or DISTVERSION assignment found".to_string(),
        });
    }
    remove_variable(&mut ast.root, "PORTREVISION");
    Ok(())
}

/// Adds `values` to `var`, deduping against what's already assigned and
/// re-sorting if the knowledge base marks the variable as sorted. If no
/// assignment exists, a new `VAR=   value value...` node is appended at
/// the end of the tree.
pub fn edit_merge(ast: &mut crate::ast::Ast, var: &str, values: &[String]) -> Result<()> {
    if let Some(Node::Variable(v)) = find_variable_mut(&mut ast.root, var) {
        for value in values {
            if !v.words.iter().any(|w| w == value) {
                v.words.push(value.clone());
            }
        }
        let (_, flags, _) = kb::lookup_variable_resolved(var);
        if flags.sorted() {
            crate::compare::sort(var, &mut v.words);
        }
        return Ok(());
    }

    let header = crate::ast::NodeHeader::new(crate::span::LineRange::single(
        ast.root.last().and_then(|n| n.header()).map_or(1, |h| h.line.end),
    ));
    ast.root.push(Node::Variable(crate::ast::Variable {
        header,
        name: var.to_string(),
        trailing_plus: false,
        modifier: VarModifier::Assign,
        words: values.to_vec(),
        comment: None,
    }));
    Ok(())
}

fn find_variable_mut<'a>(nodes: &'a mut [Node], name: &str) -> Option<&'a mut Node> {
    nodes
        .iter_mut()
        .find(|n| matches!(n, Node::Variable(v) if v.name == name))
}

fn remove_variable(nodes: &mut Vec<Node>, name: &str) {
    for node in nodes.iter_mut() {
        if matches!(node, Node::Variable(v) if v.name == name) {
            let header = node.header().cloned().unwrap_or_default();
            *node = Node::Deleted(header);
        }
    }
    nodes.retain(|n| !n.is_deleted());
}

fn insert_after_version(nodes: &mut Vec<Node>, name: &str, value: &str) -> Result<()> {
    let pos = nodes.iter().position(
        |n| matches!(n, Node::Variable(v) if v.name == "PORTVERSION" || v.name == "DISTVERSION"),
    );
    let Some(pos) = pos else {
        return Err(ParserError::EditFailed {
            location: SourceLocation::new(),
            message: "no PORTVERSION or DISTVERSION assignment found".to_string(),
        });
    };
    let header = crate::ast::NodeHeader::new(
        nodes[pos].header().map_or_else(crate::span::LineRange::default, |h| h.line),
    );
    nodes.insert(
        pos + 1,
        Node::Variable(crate::ast::Variable {
            header,
            name: name.to_string(),
            trailing_plus: false,
            modifier: VarModifier::Assign,
            words: vec![value.to_string()],
            comment: None,
        }),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_str;

    #[test]
    fn sanitize_comments_normalizes_spacing() {
        let mut ast = parse_str("#comment\n").unwrap();
        refactor_sanitize_comments(&mut ast).unwrap();
        let Node::Comment(c) = &ast.root[0] else {
            panic!("expected Comment");
        };
        assert_eq!(c.lines[0], "# comment");
    }

    #[test]
    fn dedup_tokens_removes_duplicate_sorted_entries() {
        let mut ast = parse_str("USES=\tcmake cmake gmake\n").unwrap();
        refactor_dedup_tokens(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["cmake".to_string(), "gmake".to_string()]);
    }

    #[test]
    fn dedup_tokens_keeps_first_uses_component_by_colon_prefix() {
        let mut ast = parse_str("USES=\tpython:3.9 python:3.10\n").unwrap();
        refactor_dedup_tokens(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["python:3.9".to_string()]);
    }

    #[test]
    fn dedup_tokens_resolves_option_helper_suffix() {
        let mut ast = parse_str("DOCS_USES=\tcmake cmake\n").unwrap();
        refactor_dedup_tokens(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["cmake".to_string()]);
    }

    #[test]
    fn sanitize_append_modifier_downgrades_second_assignment() {
        let mut ast = parse_str("USES+=\tcmake\nUSES+=\tgmake\n").unwrap();
        refactor_sanitize_append_modifier(&mut ast).unwrap();
        let modifiers: Vec<VarModifier> = ast
            .root
            .iter()
            .filter_map(|n| match n {
                Node::Variable(v) => Some(v.modifier),
                _ => None,
            })
            .collect();
        assert_eq!(modifiers, [VarModifier::Append, VarModifier::Assign]);
    }

    #[test]
    fn sanitize_append_modifier_exempts_flags_variables() {
        let mut ast = parse_str("CFLAGS+=\t-O2\nCFLAGS+=\t-Wall\n").unwrap();
        refactor_sanitize_append_modifier(&mut ast).unwrap();
        let modifiers: Vec<VarModifier> = ast
            .root
            .iter()
            .filter_map(|n| match n {
                Node::Variable(v) => Some(v.modifier),
                _ => None,
            })
            .collect();
        assert_eq!(modifiers, [VarModifier::Append, VarModifier::Append]);
    }

    #[test]
    fn sanitize_append_modifier_exempts_conditional_body() {
        let mut ast =
            parse_str("USES+=\tcmake\n.if ${X}\nUSES+=\tgmake\n.endif\n").unwrap();
        refactor_sanitize_append_modifier(&mut ast).unwrap();
        let Node::If(n) = &ast.root[1] else {
            panic!("expected If");
        };
        let Node::Variable(v) = &n.body[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.modifier, VarModifier::Append);
    }

    #[test]
    fn sanitize_append_modifier_stops_at_bsd_port_include() {
        let mut ast =
            parse_str("USES+=\tcmake\n.include <bsd.port.mk>\nUSES+=\tgmake\n").unwrap();
        refactor_sanitize_append_modifier(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[2] else {
            panic!("expected Variable");
        };
        assert_eq!(v.modifier, VarModifier::Append);
    }

    #[test]
    fn sanitize_cmake_args_fuses_standalone_dash_d_token() {
        let mut ast = parse_str("CMAKE_ARGS=\t-D FOO=bar -DBAZ\n").unwrap();
        refactor_sanitize_cmake_args(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["-DFOO=bar".to_string(), "-DBAZ".to_string()]);
    }

    #[test]
    fn sanitize_meson_args_fuses_standalone_dash_d_token() {
        let mut ast = parse_str("MESON_ARGS=\t-D buildtype=release\n").unwrap();
        refactor_sanitize_cmake_args(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["-Dbuildtype=release".to_string()]);
    }

    #[test]
    fn sanitize_cmake_args_fuses_option_helper_form() {
        let mut ast = parse_str("DOCS_CMAKE_ON=\t-D WITH_DOCS:BOOL=ON\n").unwrap();
        refactor_sanitize_cmake_args(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["-DWITH_DOCS:BOOL=ON".to_string()]);
    }

    #[test]
    fn collapse_adjacent_append_merges_into_first() {
        let mut ast = parse_str("USES=\tcmake\nUSES+=\tgmake\nUSES+=\tpkgconfig\n").unwrap();
        refactor_collapse_adjacent_variables(&mut ast).unwrap();
        assert_eq!(ast.root.len(), 1);
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.modifier, VarModifier::Assign);
        assert_eq!(
            v.words,
            vec!["cmake".to_string(), "gmake".to_string(), "pkgconfig".to_string()]
        );
    }

    #[test]
    fn mandatory_passes_dedup_after_merging_duplicate_appends() {
        let mut ast = parse_str("USES+=\tfoo\nUSES+=\tfoo\n").unwrap();
        crate::edit::run_mandatory_passes(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["foo".to_string()]);
    }

    #[test]
    fn bump_revision_inserts_when_absent() {
        let mut ast = parse_str("PORTVERSION=\t1.0\n").unwrap();
        edit_bump_revision(&mut ast).unwrap();
        assert_eq!(ast.root.len(), 2);
        let Node::Variable(v) = &ast.root[1] else {
            panic!("expected Variable");
        };
        assert_eq!(v.name, "PORTREVISION");
        assert_eq!(v.words, vec!["1".to_string()]);
    }

    #[test]
    fn bump_revision_increments_existing() {
        let mut ast = parse_str("PORTVERSION=\t1.0\nPORTREVISION=\t2\n").unwrap();
        edit_bump_revision(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[1] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["3".to_string()]);
    }

    #[test]
    fn bump_epoch_inserts_when_absent() {
        let mut ast = parse_str("PORTVERSION=\t1.0\n").unwrap();
        edit_bump_epoch(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[1] else {
            panic!("expected Variable");
        };
        assert_eq!(v.name, "PORTEPOCH");
        assert_eq!(v.words, vec!["1".to_string()]);
    }

    #[test]
    fn bump_epoch_increments_existing() {
        let mut ast = parse_str("PORTVERSION=\t1.0\nPORTEPOCH=\t1\n").unwrap();
        edit_bump_epoch(&mut ast).unwrap();
        let Node::Variable(v) = &ast.root[1] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["2".to_string()]);
    }

    #[test]
    fn set_version_clears_portrevision() {
        let mut ast = parse_str("PORTVERSION=\t1.0\nPORTREVISION=\t2\n").unwrap();
        edit_set_version(&mut ast, "2.0").unwrap();
        assert_eq!(ast.root.len(), 1);
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["2.0".to_string()]);
    }

    #[test]
    fn merge_adds_new_values_without_duplicating() {
        let mut ast = parse_str("USES=\tcmake\n").unwrap();
        edit_merge(&mut ast, "USES", &["gmake".to_string(), "cmake".to_string()]).unwrap();
        let Node::Variable(v) = &ast.root[0] else {
            panic!("expected Variable");
        };
        assert_eq!(v.words, vec!["cmake".to_string(), "gmake".to_string()]);
    }
}
