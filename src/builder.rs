//! AST builder (C3): folds the token stream produced by the tokenizer
//! into a typed tree, balancing `.if/.elif/.else/.endif` and
//! `.for/.endfor` and attaching buffered comments.

use crate::ast::{
    Ast, Comment, CommentKind, Expr, ExprKind, For, If, IfKind, Include, IncludeKind, Node,
    NodeHeader, Target, TargetCommand, TargetCommandFlags, TargetKind, VarModifier, Variable,
};
use crate::error::{ParserError, Result, SourceLocation};
use crate::span::LineRange;
use crate::tokenizer::{Token, TokenKind, Tokenizer};

pub fn parse_str(text: &str) -> Result<Ast> {
    let mut tokenizer = Tokenizer::new();
    for line in text.split_inclusive('\n') {
        tokenizer.feed_line(line.trim_end_matches('\n'))?;
    }
    let tokens = tokenizer.finish()?;
    let mut pos = 0;
    let root = parse_block(&tokens, &mut pos, &|_, _| false)?;
    if pos != tokens.len() {
        return Err(orphan_control_error(&tokens, pos));
    }
    Ok(Ast {
        root,
        raw_lines: text.lines().map(str::to_string).collect(),
    })
}

fn orphan_control_error(tokens: &[Token], pos: usize) -> ParserError {
    let directive = tokens
        .get(pos + 1)
        .and_then(|t| t.conditional_directive.clone())
        .unwrap_or_default();
    ParserError::AstBuildFailed {
        location: SourceLocation::new().with_range(tokens[pos].range),
        message: format!("unexpected `.{directive}` with no matching opening directive"),
    }
}

/// `true` when the upcoming token is a `ConditionalStart` whose directive
/// is one of the control-flow closers that should end the *current*
/// block without being consumed by it.
fn is_block_closer(tokens: &[Token], pos: usize) -> bool {
    if tokens.get(pos).map(|t| &t.kind) != Some(&TokenKind::ConditionalStart) {
        return false;
    }
    matches!(
        tokens
            .get(pos + 1)
            .and_then(|t| t.conditional_directive.as_deref()),
        Some("elif" | "elifdef" | "elifndef" | "elifmake" | "elifnmake" | "else" | "endif" | "endfor")
    )
}

struct ConditionalPayload {
    directive: String,
    indent: usize,
    words: Vec<String>,
    range: LineRange,
    comment: Option<String>,
}

fn consume_conditional(tokens: &[Token], pos: &mut usize) -> Result<ConditionalPayload> {
    let start = &tokens[*pos];
    let indent = start.indent;
    let mut range = start.range;
    *pos += 1;

    let dir_tok = tokens.get(*pos).ok_or_else(|| ParserError::ExpectedToken {
        location: SourceLocation::new(),
    })?;
    let directive = dir_tok
        .conditional_directive
        .clone()
        .unwrap_or_else(|| dir_tok.data.clone());
    *pos += 1;

    let mut words = Vec::new();
    while tokens.get(*pos).map(|t| &t.kind) == Some(&TokenKind::ConditionalToken) {
        words.push(tokens[*pos].data.clone());
        range = range.join(tokens[*pos].range);
        *pos += 1;
    }

    let end = tokens.get(*pos).ok_or_else(|| ParserError::ExpectedToken {
        location: SourceLocation::new(),
    })?;
    if end.kind != TokenKind::ConditionalEnd {
        return Err(ParserError::AstBuildFailed {
            location: SourceLocation::new().with_range(end.range),
            message: "malformed conditional line".to_string(),
        });
    }
    let comment = end.trailing_comment.clone();
    *pos += 1;

    Ok(ConditionalPayload {
        directive,
        indent,
        words,
        range,
        comment,
    })
}

fn if_kind(directive: &str) -> IfKind {
    match directive {
        "ifdef" | "elifdef" => IfKind::Def,
        "ifndef" | "elifndef" => IfKind::Ndef,
        "ifmake" | "elifmake" => IfKind::Make,
        "ifnmake" | "elifnmake" => IfKind::Nmake,
        "else" => IfKind::Else,
        _ => IfKind::If,
    }
}

/// Parses one `If` node plus its entire `.elif`/`.else` chain, which is
/// represented as a right-leaning nest of `If` nodes in `orelse`.
fn parse_if_chain(
    tokens: &[Token],
    pos: &mut usize,
    payload: ConditionalPayload,
    is_elif_chained: bool,
) -> Result<Node> {
    let body = parse_block(tokens, pos, &is_block_closer)?;

    if tokens.get(*pos).is_none() {
        return Err(ParserError::AstBuildFailed {
            location: SourceLocation::new().with_range(payload.range),
            message: "unterminated `.if`: missing `.endif`".to_string(),
        });
    }
    let closer_directive = tokens
        .get(*pos + 1)
        .and_then(|t| t.conditional_directive.clone())
        .unwrap_or_default();

    let (orelse, end_comment, line_end) = if closer_directive == "endif" {
        let end = consume_conditional(tokens, pos)?;
        (Vec::new(), end.comment, end.range.end)
    } else {
        let nested_payload = consume_conditional(tokens, pos)?;
        let nested_range = nested_payload.range;
        let nested = parse_if_chain(tokens, pos, nested_payload, true)?;
        (vec![nested], None, nested_range.end)
    };

    let mut header = NodeHeader::new(LineRange::new(payload.range.start, line_end));
    header.edited = false;
    Ok(Node::If(If {
        header,
        kind: if_kind(&payload.directive),
        test: payload.words,
        body,
        orelse,
        indent: payload.indent,
        comment: payload.comment,
        end_comment,
        is_elif_chained,
    }))
}

fn parse_for(tokens: &[Token], pos: &mut usize, payload: ConditionalPayload) -> Result<Node> {
    let split = payload.words.iter().position(|w| w == "in");
    let (bindings, words) = match split {
        Some(idx) => (
            payload.words[..idx].to_vec(),
            payload.words[idx + 1..].to_vec(),
        ),
        None => (Vec::new(), payload.words.clone()),
    };

    let body = parse_block(tokens, pos, &is_block_closer)?;

    let closer_directive = tokens
        .get(*pos + 1)
        .and_then(|t| t.conditional_directive.clone());
    if closer_directive.as_deref() != Some("endfor") {
        return Err(ParserError::AstBuildFailed {
            location: SourceLocation::new().with_range(payload.range),
            message: "unterminated `.for`: missing `.endfor`".to_string(),
        });
    }
    let end = consume_conditional(tokens, pos)?;

    let header = NodeHeader::new(LineRange::new(payload.range.start, end.range.end));
    Ok(Node::For(For {
        header,
        bindings,
        words,
        body,
        indent: payload.indent,
        comment: payload.comment,
        end_comment: end.comment,
    }))
}

fn parse_include(payload: ConditionalPayload) -> Result<Node> {
    let raw = payload.words.join(" ");
    let kind = match payload.directive.as_str() {
        "include" => IncludeKind::Posix,
        "-include" => IncludeKind::PosixOptional,
        ".include" => IncludeKind::Bmake,
        _ => IncludeKind::BmakeOptional, // sinclude, dinclude
    };
    let (sys, path) = if let Some(inner) = raw.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        (true, inner.to_string())
    } else if let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        (false, inner.to_string())
    } else if kind == IncludeKind::Posix || kind == IncludeKind::PosixOptional {
        (false, raw.clone())
    } else {
        return Err(ParserError::AstBuildFailed {
            location: SourceLocation::new().with_range(payload.range),
            message: format!("invalid include path: {raw:?}"),
        });
    };

    Ok(Node::Include(Include {
        header: NodeHeader::new(payload.range),
        kind,
        path,
        sys,
        indent: payload.indent,
        comment: payload.comment,
        body: Vec::new(),
        loaded: false,
    }))
}

fn expr_kind(directive: &str) -> Option<ExprKind> {
    Some(match directive {
        "error" => ExprKind::Error,
        "warning" => ExprKind::Warning,
        "info" => ExprKind::Info,
        "export" => ExprKind::Export,
        "export-env" => ExprKind::ExportEnv,
        "export-literal" => ExprKind::ExportLiteral,
        "unexport" => ExprKind::Unexport,
        "unexport-env" => ExprKind::UnexportEnv,
        "undef" => ExprKind::Undef,
        _ => return None,
    })
}

fn is_include_directive(directive: &str) -> bool {
    matches!(
        directive,
        "include" | ".include" | "sinclude" | "-include" | "dinclude"
    )
}

fn parse_variable(tokens: &[Token], pos: &mut usize) -> Result<Node> {
    let start = &tokens[*pos];
    let name = start.variable_name.clone().ok_or_else(|| ParserError::ExpectedToken {
        location: SourceLocation::new().with_range(start.range),
    })?;
    let trailing_plus = start.variable_trailing_plus;
    let modifier = match start.variable_modifier {
        Some('+') => VarModifier::Append,
        Some(':') => VarModifier::Expand,
        Some('?') => VarModifier::Optional,
        Some('!') => VarModifier::Shell,
        _ => VarModifier::Assign,
    };
    let mut range = start.range;
    *pos += 1;

    let mut words = Vec::new();
    while tokens.get(*pos).map(|t| &t.kind) == Some(&TokenKind::VariableToken) {
        words.push(tokens[*pos].data.clone());
        range = range.join(tokens[*pos].range);
        *pos += 1;
    }

    let end = tokens.get(*pos).ok_or_else(|| ParserError::ExpectedToken {
        location: SourceLocation::new().with_range(range),
    })?;
    let comment = end.trailing_comment.clone();
    range = range.join(end.range);
    *pos += 1;

    Ok(Node::Variable(Variable {
        header: NodeHeader::new(range),
        name,
        trailing_plus,
        modifier,
        words,
        comment,
    }))
}

fn parse_target_command(tokens: &[Token], pos: &mut usize) -> Result<Node> {
    let start = &tokens[*pos];
    let mut range = start.range;
    let mut flags = TargetCommandFlags::empty();
    *pos += 1;

    let mut words = Vec::new();
    let mut first = true;
    while tokens.get(*pos).map(|t| &t.kind) == Some(&TokenKind::TargetCommandToken) {
        let word = tokens[*pos].data.clone();
        range = range.join(tokens[*pos].range);
        if first {
            let mut rest = word.as_str();
            loop {
                match rest.chars().next() {
                    Some('@') => flags |= TargetCommandFlags::SILENT,
                    Some('-') => flags |= TargetCommandFlags::IGNORE_ERROR,
                    Some('+') => flags |= TargetCommandFlags::ALWAYS_EXEC,
                    _ => break,
                }
                rest = &rest[1..];
            }
            if !rest.is_empty() {
                words.push(rest.to_string());
            }
            first = false;
        } else {
            words.push(word);
        }
        *pos += 1;
    }

    let end = tokens.get(*pos).ok_or_else(|| ParserError::ExpectedToken {
        location: SourceLocation::new().with_range(range),
    })?;
    let comment = end.trailing_comment.clone();
    range = range.join(end.range);
    *pos += 1;

    Ok(Node::TargetCommand(TargetCommand {
        header: NodeHeader::new(range),
        flags,
        words,
        comment,
    }))
}

fn parse_target_header(name_line: &str) -> (Vec<String>, Vec<String>) {
    let sep = name_line.find(':').unwrap_or(name_line.len());
    let sources: Vec<String> = name_line[..sep]
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let dependencies: Vec<String> = name_line
        .get(sep + 1..)
        .unwrap_or("")
        .trim_start_matches(':')
        .split_whitespace()
        .map(str::to_string)
        .collect();
    (sources, dependencies)
}

fn parse_target(tokens: &[Token], pos: &mut usize, kind: TargetKind, header_line: &str, start_range: LineRange) -> Result<Node> {
    let (sources, dependencies) = if kind == TargetKind::Named {
        parse_target_header(header_line)
    } else {
        (Vec::new(), Vec::new())
    };

    let mut body = Vec::new();
    let mut range = start_range;
    loop {
        match tokens.get(*pos).map(|t| &t.kind) {
            Some(TokenKind::TargetEnd) => {
                range = range.join(tokens[*pos].range);
                *pos += 1;
                break;
            }
            Some(TokenKind::TargetCommandStart) => {
                let node = parse_target_command(tokens, pos)?;
                if let Some(h) = node.header() {
                    range = range.join(h.line);
                }
                body.push(node);
            }
            Some(TokenKind::Comment) => {
                let node = parse_comment_run(tokens, pos);
                if let Some(h) = node.header() {
                    range = range.join(h.line);
                }
                body.push(node);
            }
            None => break,
            _ => break,
        }
    }

    Ok(Node::Target(Target {
        header: NodeHeader::new(range),
        kind,
        sources,
        dependencies,
        body,
        comment: None,
    }))
}

fn parse_comment_run(tokens: &[Token], pos: &mut usize) -> Node {
    let start_range = tokens[*pos].range;
    let mut lines = Vec::new();
    let mut range = start_range;
    while tokens.get(*pos).map(|t| &t.kind) == Some(&TokenKind::Comment) {
        lines.push(tokens[*pos].data.clone());
        range = range.join(tokens[*pos].range);
        *pos += 1;
    }
    Node::Comment(Comment {
        header: NodeHeader::new(range),
        kind: CommentKind::Line,
        lines,
    })
}

/// Parses nodes until `stop(tokens, pos)` returns true or the stream ends.
fn parse_block(
    tokens: &[Token],
    pos: &mut usize,
    stop: &dyn Fn(&[Token], usize) -> bool,
) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    while *pos < tokens.len() {
        if stop(tokens, *pos) {
            break;
        }
        match tokens[*pos].kind {
            TokenKind::Comment => nodes.push(parse_comment_run(tokens, pos)),
            TokenKind::VariableStart => nodes.push(parse_variable(tokens, pos)?),
            TokenKind::TargetStart => {
                let range = tokens[*pos].range;
                let header_line = tokens[*pos].data.clone();
                *pos += 1;
                nodes.push(parse_target(tokens, pos, TargetKind::Named, &header_line, range)?);
            }
            TokenKind::TargetCommandStart => {
                let range = tokens[*pos].range;
                nodes.push(parse_target(tokens, pos, TargetKind::Unassociated, "", range)?);
            }
            TokenKind::ConditionalStart => {
                let directive = tokens
                    .get(*pos + 1)
                    .and_then(|t| t.conditional_directive.clone())
                    .unwrap_or_default();
                match directive.as_str() {
                    "if" | "ifdef" | "ifndef" | "ifmake" | "ifnmake" => {
                        let payload = consume_conditional(tokens, pos)?;
                        nodes.push(parse_if_chain(tokens, pos, payload, false)?);
                    }
                    "for" => {
                        let payload = consume_conditional(tokens, pos)?;
                        nodes.push(parse_for(tokens, pos, payload)?);
                    }
                    d if is_include_directive(d) => {
                        let payload = consume_conditional(tokens, pos)?;
                        nodes.push(parse_include(payload)?);
                    }
                    d if expr_kind(d).is_some() => {
                        let payload = consume_conditional(tokens, pos)?;
                        let range = payload.range;
                        nodes.push(Node::Expr(Expr {
                            header: NodeHeader::new(range),
                            kind: expr_kind(d).unwrap(),
                            indent: payload.indent,
                            words: payload.words,
                            comment: payload.comment,
                        }));
                    }
                    "elif" | "elifdef" | "elifndef" | "elifmake" | "elifnmake" | "else" => {
                        return Err(ParserError::AstBuildFailed {
                            location: SourceLocation::new().with_range(tokens[*pos].range),
                            message: format!("`.{directive}` with no matching `.if`"),
                        });
                    }
                    "endif" => {
                        return Err(ParserError::AstBuildFailed {
                            location: SourceLocation::new().with_range(tokens[*pos].range),
                            message: "`.endif` with no matching `.if`".to_string(),
                        });
                    }
                    "endfor" => {
                        return Err(ParserError::AstBuildFailed {
                            location: SourceLocation::new().with_range(tokens[*pos].range),
                            message: "`.endfor` with no matching `.for`".to_string(),
                        });
                    }
                    other => {
                        return Err(ParserError::Unspecified(format!(
                            "unknown directive `.{other}`"
                        )));
                    }
                }
            }
            TokenKind::TargetEnd => {
                // An orphan TargetEnd can appear at root if a file starts
                // with a TAB-indented line before any content; skip it.
                *pos += 1;
            }
            _ => {
                return Err(ParserError::AstBuildFailed {
                    location: SourceLocation::new().with_range(tokens[*pos].range),
                    message: "unexpected token in this context".to_string(),
                });
            }
        }
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_variable() {
        let ast = parse_str("PORTNAME=\tfoo\n").unwrap();
        assert_eq!(ast.root.len(), 1);
        match &ast.root[0] {
            Node::Variable(v) => {
                assert_eq!(v.name, "PORTNAME");
                assert_eq!(v.words, vec!["foo".to_string()]);
            }
            other => panic!("expected Variable, got {other:?}"),
        }
    }

    #[test]
    fn parses_target_with_command() {
        let ast = parse_str("all:\n\techo hi\n").unwrap();
        assert_eq!(ast.root.len(), 1);
        match &ast.root[0] {
            Node::Target(t) => {
                assert_eq!(t.sources, vec!["all".to_string()]);
                assert_eq!(t.body.len(), 1);
            }
            other => panic!("expected Target, got {other:?}"),
        }
    }

    #[test]
    fn parses_elif_chain_into_right_leaning_tree() {
        let src = ".if X\nA=1\n.elif Y\nA=2\n.else\nA=3\n.endif\n";
        let ast = parse_str(src).unwrap();
        assert_eq!(ast.root.len(), 1);
        let Node::If(outer) = &ast.root[0] else {
            panic!("expected If");
        };
        assert_eq!(outer.test, vec!["X".to_string()]);
        assert_eq!(outer.orelse.len(), 1);
        let Node::If(middle) = &outer.orelse[0] else {
            panic!("expected nested If");
        };
        assert!(middle.is_elif_chained);
        assert_eq!(middle.test, vec!["Y".to_string()]);
        assert_eq!(middle.orelse.len(), 1);
        let Node::If(last) = &middle.orelse[0] else {
            panic!("expected final Else");
        };
        assert_eq!(last.kind, IfKind::Else);
    }

    #[test]
    fn endif_without_if_is_an_error() {
        let err = parse_str(".endif\n").unwrap_err();
        assert!(matches!(err, ParserError::AstBuildFailed { .. }));
    }

    #[test]
    fn parses_for_loop() {
        let src = ".for f in a b c\nUSE_IT=\t${f}\n.endfor\n";
        let ast = parse_str(src).unwrap();
        let Node::For(for_node) = &ast.root[0] else {
            panic!("expected For");
        };
        assert_eq!(for_node.bindings, vec!["f".to_string()]);
        assert_eq!(for_node.words, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(for_node.body.len(), 1);
    }

    #[test]
    fn parses_sys_include() {
        let ast = parse_str(".include <bsd.port.mk>\n").unwrap();
        let Node::Include(inc) = &ast.root[0] else {
            panic!("expected Include");
        };
        assert!(inc.sys);
        assert_eq!(inc.path, "bsd.port.mk");
    }

    #[test]
    fn target_command_flags_are_parsed() {
        let ast = parse_str("all:\n\t@-echo hi\n").unwrap();
        let Node::Target(t) = &ast.root[0] else {
            panic!("expected Target");
        };
        let Node::TargetCommand(cmd) = &t.body[0] else {
            panic!("expected TargetCommand");
        };
        assert!(cmd.flags.contains(TargetCommandFlags::SILENT));
        assert!(cmd.flags.contains(TargetCommandFlags::IGNORE_ERROR));
        assert_eq!(cmd.words, vec!["echo".to_string(), "hi".to_string()]);
    }
}
