//! Reformatter (C5): prints an [`Ast`] back to canonical source text.
//!
//! Printing follows the knowledge base's per-variable flags for wrap
//! policy and sort order, lines up the text following each
//! `VARNAME=` operator at a shared goal column within a run of adjacent
//! variables, and wraps long value and target-command lines the way
//! `bsd.port.mk`-era Makefiles do: a trailing backslash, continued on an
//! indented line.

use crate::ast::{
    For, If, IfKind, Include, IncludeKind, Node, Target, TargetCommand, TargetKind, Variable,
};
use crate::compare;
use crate::kb;
use crate::settings::ParserSettings;

/// Minimum column a value may start at after the `=`, even if the
/// variable name itself is short; matches the upstream goal-column rule
/// of rounding up to the next multiple of 8 with at least one space.
fn goal_column(name_len: usize, modifier_len: usize) -> usize {
    let used = name_len + modifier_len;
    ((used / 8) + 1) * 8
}

/// Current column within the last (possibly unterminated) line of `buf`.
fn current_column(buf: &str) -> usize {
    match buf.rfind('\n') {
        Some(pos) => buf.len() - pos - 1,
        None => buf.len(),
    }
}

/// Pads `buf`'s current line out to column `goalcol` using real tab
/// characters on 8-column stops, matching the upstream goal-column
/// alignment rule. Falls back to a single space when the current
/// column has already passed the goal (an overlong variable name).
fn pad_to(buf: &mut String, goalcol: usize) {
    let mut col = current_column(buf);
    if col >= goalcol {
        buf.push(' ');
        return;
    }
    while col < goalcol {
        buf.push('\t');
        col = (col / 8 + 1) * 8;
    }
}

/// Prints `ast` to canonical text under `settings`.
pub fn print(ast: &crate::ast::Ast, settings: &ParserSettings) -> String {
    let mut out = String::new();
    print_nodes(&ast.root, settings, &mut out, 0);
    out
}

fn print_nodes(nodes: &[Node], settings: &ParserSettings, out: &mut String, indent: usize) {
    let mut i = 0;
    while i < nodes.len() {
        // Run adjacent variables with the same name through a shared
        // goal column and the knowledge base's sort order.
        if let Node::Variable(_) = &nodes[i] {
            let mut j = i;
            while j < nodes.len() && matches!(&nodes[j], Node::Variable(v) if same_run(v, &nodes[i])) {
                j += 1;
            }
            print_variable_run(&nodes[i..j], settings, out);
            i = j;
            continue;
        }
        print_node(&nodes[i], settings, out, indent);
        i += 1;
    }
}

fn same_run(a: &Variable, first: &Node) -> bool {
    matches!(first, Node::Variable(f) if f.name == a.name)
}

fn print_variable_run(run: &[Node], settings: &ParserSettings, out: &mut String) {
    let Node::Variable(first) = &run[0] else {
        return;
    };
    let (block, flags, _) = kb::lookup_variable_resolved(&first.name);
    let use_helper = is_option_use_helper(&first.name);

    let mut words = first.words.clone();
    if use_helper {
        words = words.iter().map(|w| canonicalize_option_use_word(w)).collect();
    }
    if flags.sorted() && run.len() == 1 {
        compare::sort(&first.name, &mut words);
    }

    if flags.contains(kb::VarFlags::PRINT_AS_NEWLINES) {
        for (idx, v) in run.iter().enumerate() {
            let Node::Variable(v) = v else { continue };
            let mut vwords = v.words.clone();
            if use_helper {
                vwords = vwords.iter().map(|w| canonicalize_option_use_word(w)).collect();
            }
            if flags.sorted() {
                compare::sort(&v.name, &mut vwords);
            }
            for word in &vwords {
                print_variable_header(v, idx == 0, out);
                out.push_str(word);
                out.push('\n');
            }
            if vwords.is_empty() {
                print_variable_header(v, idx == 0, out);
                out.push('\n');
            }
        }
        return;
    }

    for (idx, v) in run.iter().enumerate() {
        let Node::Variable(v) = v else { continue };
        let mut vwords = v.words.clone();
        if use_helper {
            vwords = vwords.iter().map(|w| canonicalize_option_use_word(w)).collect();
        }
        if flags.sorted() {
            compare::sort(&v.name, &mut vwords);
        }
        print_variable_header(v, idx == 0, out);
        let goalcol = if block == kb::Block::Unknown && settings.unknown_var_goal_col == Some(false) {
            current_column(out) + 1
        } else {
            goal_column(v.name.len(), v.modifier.as_str().len())
        };
        print_wrapped_words(&vwords, settings.wrapcol, goalcol, out);
        if let Some(comment) = &v.comment {
            out.push(' ');
            out.push_str(comment);
        }
        out.push('\n');
    }
}

/// `true` for `<OPT>_USE`/`<OPT>_USE_OFF` (§4.3 option-helper forms of
/// `USE`), the only helper variables whose individual words need the
/// `PREFIX[+]=v1,v2,…` canonicalization below.
fn is_option_use_helper(name: &str) -> bool {
    matches!(kb::is_options_helper(name, &[]), Some((_, "USE" | "USE_OFF", _)))
}

/// Canonicalizes one `<OPT>_USE`/`<OPT>_USE_OFF` word: uppercases the
/// `PREFIX` before `=`/`+=`, then sorts its comma-separated values with
/// the synthetic `USE_<PREFIX>` comparator (desktop-stack component
/// order where one is known, lexicographic otherwise).
fn canonicalize_option_use_word(word: &str) -> String {
    let (prefix, sep, rest) = if let Some(idx) = word.find("+=") {
        (&word[..idx], "+=", &word[idx + 2..])
    } else if let Some(idx) = word.find('=') {
        (&word[..idx], "=", &word[idx + 1..])
    } else {
        return word.to_string();
    };
    if prefix.is_empty() {
        return word.to_string();
    }
    let prefix_upper = prefix.to_ascii_uppercase();
    let comparator = format!("USE_{prefix_upper}");
    let mut values: Vec<String> = rest.split(',').map(str::to_string).collect();
    values.sort_by(|a, b| compare::compare(&comparator, a, b));
    format!("{prefix_upper}{sep}{}", values.join(","))
}

fn print_variable_header(v: &Variable, _first_in_run: bool, out: &mut String) {
    out.push_str(&v.name);
    if v.trailing_plus {
        out.push_str(" +");
    }
    out.push_str(v.modifier.as_str());
}

fn print_wrapped_words(words: &[String], wrapcol: usize, goalcol: usize, out: &mut String) {
    pad_to(out, goalcol);
    if words.is_empty() {
        return;
    }
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            if current_column(out) + 1 + word.len() > wrapcol {
                out.push_str(" \\\n");
                pad_to(out, goalcol);
            } else {
                out.push(' ');
            }
        }
        out.push_str(word);
    }
}

fn print_node(node: &Node, settings: &ParserSettings, out: &mut String, indent: usize) {
    match node {
        Node::Comment(c) => {
            for line in &c.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        Node::Expr(e) => {
            out.push('.');
            out.push_str(expr_directive(e.kind));
            for word in &e.words {
                out.push(' ');
                out.push_str(word);
            }
            if let Some(c) = &e.comment {
                out.push(' ');
                out.push_str(c);
            }
            out.push('\n');
        }
        Node::Include(inc) => print_include(inc, settings, out, indent),
        Node::If(n) => print_if(n, settings, out, indent),
        Node::For(n) => print_for(n, settings, out, indent),
        Node::Target(t) => print_target(t, settings, out),
        Node::TargetCommand(cmd) => print_target_command(cmd, settings, out),
        Node::Variable(_) => unreachable!("variables are printed in runs by print_nodes"),
        Node::Deleted(_) => {}
        Node::Root(children) => print_nodes(children, settings, out, indent),
    }
}

fn expr_directive(kind: crate::ast::ExprKind) -> &'static str {
    use crate::ast::ExprKind::*;
    match kind {
        Error => "error",
        Warning => "warning",
        Info => "info",
        Export => "export",
        ExportEnv => "export-env",
        ExportLiteral => "export-literal",
        Unexport => "unexport",
        UnexportEnv => "unexport-env",
        Undef => "undef",
    }
}

fn print_include(inc: &Include, settings: &ParserSettings, out: &mut String, indent: usize) {
    let directive = match inc.kind {
        IncludeKind::Bmake => ".include",
        IncludeKind::BmakeOptional => ".sinclude",
        IncludeKind::Posix => "include",
        IncludeKind::PosixOptional => "-include",
    };
    out.push_str(&" ".repeat(indent));
    out.push_str(directive);
    out.push(' ');
    if inc.sys {
        out.push('<');
        out.push_str(&inc.path);
        out.push('>');
    } else {
        out.push('"');
        out.push_str(&inc.path);
        out.push('"');
    }
    if let Some(c) = &inc.comment {
        out.push(' ');
        out.push_str(c);
    }
    out.push('\n');
    if inc.loaded {
        print_nodes(&inc.body, settings, out, indent);
    }
}

fn if_directive(kind: IfKind) -> &'static str {
    match kind {
        IfKind::If => "if",
        IfKind::Def => "ifdef",
        IfKind::Ndef => "ifndef",
        IfKind::Make => "ifmake",
        IfKind::Nmake => "ifnmake",
        IfKind::Else => "else",
    }
}

fn elif_directive(kind: IfKind) -> &'static str {
    match kind {
        IfKind::If => "elif",
        IfKind::Def => "elifdef",
        IfKind::Ndef => "elifndef",
        IfKind::Make => "elifmake",
        IfKind::Nmake => "elifnmake",
        IfKind::Else => "else",
    }
}

fn print_if(n: &If, settings: &ParserSettings, out: &mut String, indent: usize) {
    let directive = if n.is_elif_chained {
        elif_directive(n.kind)
    } else {
        if_directive(n.kind)
    };
    out.push('.');
    out.push_str(&" ".repeat(n.indent));
    out.push_str(directive);
    for word in &n.test {
        out.push(' ');
        out.push_str(word);
    }
    if let Some(c) = &n.comment {
        out.push(' ');
        out.push_str(c);
    }
    out.push('\n');

    print_nodes(&n.body, settings, out, indent);

    match n.orelse.split_first() {
        Some((Node::If(next), _)) => print_if(next, settings, out, indent),
        _ => {
            out.push_str(".endif");
            if let Some(c) = &n.end_comment {
                out.push(' ');
                out.push_str(c);
            }
            out.push('\n');
        }
    }
}

fn print_for(n: &For, settings: &ParserSettings, out: &mut String, indent: usize) {
    out.push('.');
    out.push_str(&" ".repeat(n.indent));
    out.push_str("for");
    for b in &n.bindings {
        out.push(' ');
        out.push_str(b);
    }
    out.push_str(" in");
    for w in &n.words {
        out.push(' ');
        out.push_str(w);
    }
    if let Some(c) = &n.comment {
        out.push(' ');
        out.push_str(c);
    }
    out.push('\n');
    print_nodes(&n.body, settings, out, indent);
    out.push_str(".endfor");
    if let Some(c) = &n.end_comment {
        out.push(' ');
        out.push_str(c);
    }
    out.push('\n');
}

fn print_target(t: &Target, settings: &ParserSettings, out: &mut String) {
    if t.kind == TargetKind::Named {
        out.push_str(&t.sources.join(" "));
        out.push(':');
        for dep in &t.dependencies {
            out.push(' ');
            out.push_str(dep);
        }
        out.push('\n');
    }
    for node in &t.body {
        print_node(node, settings, out, 0);
    }
}

fn print_target_command(cmd: &TargetCommand, settings: &ParserSettings, out: &mut String) {
    out.push('\t');
    if cmd.flags.contains(crate::ast::TargetCommandFlags::SILENT) {
        out.push('@');
    }
    if cmd.flags.contains(crate::ast::TargetCommandFlags::IGNORE_ERROR) {
        out.push('-');
    }
    if cmd.flags.contains(crate::ast::TargetCommandFlags::ALWAYS_EXEC) {
        out.push('+');
    }

    let threshold = settings.target_command_format_threshold;
    let wrapcol = settings.target_command_format_wrapcol;
    if cmd.words.len() >= threshold {
        for (idx, word) in cmd.words.iter().enumerate() {
            if idx > 0 {
                out.push_str(" \\\n\t\t");
            }
            out.push_str(word);
            let _ = wrapcol;
        }
    } else {
        out.push_str(&cmd.words.join(" "));
    }
    if let Some(c) = &cmd.comment {
        out.push(' ');
        out.push_str(c);
    }
    out.push('\n');
}

/// A minimal unified-diff renderer between the original text and the
/// reformatted output, using a classic longest-common-subsequence
/// alignment. Used by `portfmt -D`.
pub fn unified_diff(original: &str, formatted: &str, context: usize) -> String {
    let a: Vec<&str> = original.lines().collect();
    let b: Vec<&str> = formatted.lines().collect();
    let ops = lcs_diff(&a, &b);
    render_unified(&a, &b, &ops, context)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiffOp {
    Equal(usize, usize),
    Delete(usize),
    Insert(usize),
}

fn lcs_diff(a: &[&str], b: &[&str]) -> Vec<DiffOp> {
    let n = a.len();
    let m = b.len();
    let mut table = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            ops.push(DiffOp::Equal(i, j));
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            ops.push(DiffOp::Delete(i));
            i += 1;
        } else {
            ops.push(DiffOp::Insert(j));
            j += 1;
        }
    }
    while i < n {
        ops.push(DiffOp::Delete(i));
        i += 1;
    }
    while j < m {
        ops.push(DiffOp::Insert(j));
        j += 1;
    }
    ops
}

fn render_unified(a: &[&str], b: &[&str], ops: &[DiffOp], context: usize) -> String {
    let mut out = String::new();
    let mut idx = 0;
    while idx < ops.len() {
        if matches!(ops[idx], DiffOp::Equal(..)) {
            idx += 1;
            continue;
        }
        let hunk_start = idx.saturating_sub(context);
        let mut hunk_end = idx;
        while hunk_end < ops.len() {
            if matches!(ops[hunk_end], DiffOp::Equal(..)) {
                let mut lookahead = hunk_end;
                let mut run = 0;
                while lookahead < ops.len() && matches!(ops[lookahead], DiffOp::Equal(..)) {
                    lookahead += 1;
                    run += 1;
                    if run > context * 2 {
                        break;
                    }
                }
                if run > context * 2 || lookahead == ops.len() {
                    break;
                }
                hunk_end = lookahead;
            } else {
                hunk_end += 1;
            }
        }
        out.push_str("@@\n");
        for op in &ops[hunk_start..hunk_end.min(ops.len())] {
            match op {
                DiffOp::Equal(i, _) => {
                    out.push(' ');
                    out.push_str(a[*i]);
                    out.push('\n');
                }
                DiffOp::Delete(i) => {
                    out.push('-');
                    out.push_str(a[*i]);
                    out.push('\n');
                }
                DiffOp::Insert(j) => {
                    out.push('+');
                    out.push_str(b[*j]);
                    out.push('\n');
                }
            }
        }
        idx = hunk_end.max(idx + 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_str;

    #[test]
    fn prints_simple_variable_with_tab_goal_column() {
        let ast = parse_str("PORTNAME=\tfoo\n").unwrap();
        let text = print(&ast, &ParserSettings::default());
        assert_eq!(text, "PORTNAME=\tfoo\n");
    }

    #[test]
    fn sorted_variable_is_reordered_on_print() {
        let ast = parse_str("USES=\tgmake cmake\n").unwrap();
        let text = print(&ast, &ParserSettings::default());
        assert_eq!(text, "USES=\tcmake gmake\n");
    }

    #[test]
    fn round_trips_a_target_with_command() {
        let ast = parse_str("all:\n\techo hi\n").unwrap();
        let text = print(&ast, &ParserSettings::default());
        assert_eq!(text, "all:\n\techo hi\n");
    }

    #[test]
    fn no_diff_for_identical_text() {
        assert_eq!(unified_diff("a\nb\n", "a\nb\n", 3), "");
    }

    #[test]
    fn diff_reports_a_changed_line() {
        let diff = unified_diff("PORTNAME=\tfoo\n", "PORTNAME=\tbar\n", 3);
        assert!(diff.contains("-PORTNAME=\tfoo"));
        assert!(diff.contains("+PORTNAME=\tbar"));
    }

    #[test]
    fn option_use_word_is_canonicalized_and_sorted() {
        let ast = parse_str("DOCS_USE=\tgnome=gtk30,cairo\n").unwrap();
        let text = print(&ast, &ParserSettings::default());
        assert_eq!(text, "DOCS_USE=\tGNOME=cairo,gtk30\n");
    }

    #[test]
    fn option_use_off_preserves_append_separator() {
        let ast = parse_str("DOCS_USE_OFF=\tgnome+=gtk30,cairo\n").unwrap();
        let text = print(&ast, &ParserSettings::default());
        assert_eq!(text, "DOCS_USE_OFF=\tGNOME+=cairo,gtk30\n");
    }

    #[test]
    fn unknown_variable_keeps_goal_column_by_default() {
        let ast = parse_str("TOTALLY_MADE_UP_VAR=\tfoo\n").unwrap();
        let text = print(&ast, &ParserSettings::default());
        assert_eq!(text, "TOTALLY_MADE_UP_VAR=\tfoo\n");
    }

    #[test]
    fn unknown_variable_goal_column_disabled_with_flag() {
        let ast = parse_str("TOTALLY_MADE_UP_VAR=\tfoo\n").unwrap();
        let mut settings = ParserSettings::default();
        settings.unknown_var_goal_col = Some(false);
        let text = print(&ast, &settings);
        assert_eq!(text, "TOTALLY_MADE_UP_VAR= foo\n");
    }
}
