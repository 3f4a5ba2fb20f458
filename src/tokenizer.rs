//! Line-oriented tokenizer (C2): turns physical source lines into a
//! typed token stream consumed by the AST builder (C3).

use crate::error::{ParserError, Result, SourceLocation};
use crate::span::LineRange;

/// The neutralized-dollar marker substituted for a `$\` line-continuation
/// so downstream scans never mistake it for a variable reference.
pub const NEUTRALIZED_DOLLAR: char = '\u{1}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    ConditionalStart,
    ConditionalToken,
    ConditionalEnd,
    TargetStart,
    TargetEnd,
    TargetCommandStart,
    TargetCommandToken,
    TargetCommandEnd,
    VariableStart,
    VariableToken,
    VariableEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub data: String,
    pub range: LineRange,
    pub variable_name: Option<String>,
    pub variable_modifier: Option<char>,
    pub variable_trailing_plus: bool,
    pub conditional_directive: Option<String>,
    pub target_name: Option<String>,
    pub indent: usize,
    /// Set on an `*End` token when the line carried an inline `#` comment.
    pub trailing_comment: Option<String>,
}

impl Token {
    fn new(kind: TokenKind, data: impl Into<String>, range: LineRange) -> Self {
        Self {
            kind,
            data: data.into(),
            range,
            variable_name: None,
            variable_modifier: None,
            variable_trailing_plus: false,
            conditional_directive: None,
            target_name: None,
            indent: 0,
            trailing_comment: None,
        }
    }
}

const CONDITIONAL_KEYWORDS: &[&str] = &[
    "ifdef",
    "ifndef",
    "ifmake",
    "ifnmake",
    "elifdef",
    "elifndef",
    "elifmake",
    "elifnmake",
    "elif",
    "if",
    "else",
    "endif",
    "for",
    "endfor",
    "include",
    "sinclude",
    "-include",
    "dinclude",
    "error",
    "warning",
    "info",
    "export-env",
    "export-literal",
    "export",
    "unexport-env",
    "unexport",
    "undef",
];

/// Streams tokens as lines are fed in. The builder owns the emitted
/// `Vec<Token>`; this type only knows about lexical state (open target
/// context, pending continuation).
pub struct Tokenizer {
    tokens: Vec<Token>,
    in_target: bool,
    pending: String,
    pending_start_line: usize,
    line_no: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            in_target: false,
            pending: String::new(),
            pending_start_line: 1,
            line_no: 0,
        }
    }

    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;
        if self.pending.is_empty() {
            self.pending_start_line = self.line_no;
        }

        if let Some(continued) = strip_continuation(line) {
            self.pending.push_str(&continued);
            return Ok(());
        }

        self.pending.push_str(line);
        let joined = std::mem::take(&mut self.pending);
        let range = LineRange::new(self.pending_start_line, self.line_no + 1);
        self.classify_line(&joined, range)
    }

    pub fn finish(mut self) -> Result<Vec<Token>> {
        if !self.pending.is_empty() {
            let joined = std::mem::take(&mut self.pending);
            let range = LineRange::new(self.pending_start_line, self.line_no + 1);
            self.classify_line(&joined, range)?;
        }
        if self.in_target {
            self.tokens.push(Token::new(
                TokenKind::TargetEnd,
                "",
                LineRange::single(self.line_no + 1),
            ));
        }
        Ok(self.tokens)
    }

    fn classify_line(&mut self, line: &str, range: LineRange) -> Result<()> {
        let trimmed_end = line.trim_end();

        if trimmed_end.trim_start().is_empty() || trimmed_end.trim_start().starts_with('#') {
            if self.in_target {
                self.tokens.push(Token::new(TokenKind::TargetEnd, "", range));
                self.in_target = false;
            }
            self.tokens
                .push(Token::new(TokenKind::Comment, trimmed_end, range));
            return Ok(());
        }

        if let Some(rest) = trimmed_end.strip_prefix('.') {
            let leading_ws = rest.len() - rest.trim_start().len();
            let rest = rest.trim_start();
            if let Some((directive, payload)) = split_directive(rest) {
                if CONDITIONAL_KEYWORDS.contains(&directive) {
                    if self.in_target {
                        self.tokens.push(Token::new(TokenKind::TargetEnd, "", range));
                        self.in_target = false;
                    }
                    // `.include` is bmake's own spelling; tag it distinctly
                    // from the bare POSIX `include` directive handled below,
                    // since both would otherwise collapse to "include".
                    let tagged = if directive == "include" { ".include" } else { directive };
                    return self.emit_conditional(tagged, payload, leading_ws, range);
                }
            }
            return Err(ParserError::Unspecified(format!(
                "{}: unknown directive after '.'",
                SourceLocation::new().with_range(range)
            )));
        }

        if trimmed_end.starts_with("include") && starts_with_word_boundary(trimmed_end, "include")
        {
            let payload = trimmed_end["include".len()..].trim_start();
            if self.in_target {
                self.tokens.push(Token::new(TokenKind::TargetEnd, "", range));
                self.in_target = false;
            }
            return self.emit_conditional("include", payload, 0, range);
        }

        if line.starts_with('\t') {
            if !self.in_target {
                // Synthesize an implicit target context; the AST builder
                // (C3) is responsible for turning this into an
                // `Unassociated` target node.
                self.in_target = true;
            }
            return self.emit_target_command(&line[1..], range);
        }

        if let Some(eq_pos) = find_assignment(trimmed_end) {
            if self.in_target {
                self.tokens.push(Token::new(TokenKind::TargetEnd, "", range));
                self.in_target = false;
            }
            return self.emit_variable(trimmed_end, eq_pos, range);
        }

        if self.in_target {
            self.tokens.push(Token::new(TokenKind::TargetEnd, "", range));
            self.in_target = false;
        }
        self.emit_target_header(trimmed_end, range)
    }

    fn emit_conditional(
        &mut self,
        directive: &str,
        payload: &str,
        indent: usize,
        range: LineRange,
    ) -> Result<()> {
        let mut start = Token::new(TokenKind::ConditionalStart, "", range);
        start.indent = indent;
        self.tokens.push(start);

        let mut directive_tok = Token::new(TokenKind::ConditionalToken, directive, range);
        directive_tok.conditional_directive = Some(directive.to_string());
        self.tokens.push(directive_tok);

        let (words, comment) = split_words(payload)?;
        for word in words {
            self.tokens
                .push(Token::new(TokenKind::ConditionalToken, word, range));
        }

        let mut end = Token::new(TokenKind::ConditionalEnd, "", range);
        end.trailing_comment = comment;
        self.tokens.push(end);
        Ok(())
    }

    fn emit_target_command(&mut self, rest: &str, range: LineRange) -> Result<()> {
        self.tokens
            .push(Token::new(TokenKind::TargetCommandStart, "", range));
        let (words, comment) = split_words(rest)?;
        for word in words {
            self.tokens
                .push(Token::new(TokenKind::TargetCommandToken, word, range));
        }
        let mut end = Token::new(TokenKind::TargetCommandEnd, "", range);
        end.trailing_comment = comment;
        self.tokens.push(end);
        Ok(())
    }

    fn emit_variable(&mut self, line: &str, eq_pos: usize, range: LineRange) -> Result<()> {
        let (name_part, rhs) = line.split_at(eq_pos);
        let (name, modifier, trailing_plus) = parse_variable_head(name_part)?;

        let mut start = Token::new(TokenKind::VariableStart, "", range);
        start.variable_name = Some(name.clone());
        start.variable_modifier = Some(modifier);
        start.variable_trailing_plus = trailing_plus;
        self.tokens.push(start);

        let (words, comment) = split_words(rhs.trim_start())?;
        for word in words {
            self.tokens
                .push(Token::new(TokenKind::VariableToken, word, range));
        }

        let mut end = Token::new(TokenKind::VariableEnd, "", range);
        end.trailing_comment = comment;
        self.tokens.push(end);
        Ok(())
    }

    fn emit_target_header(&mut self, line: &str, range: LineRange) -> Result<()> {
        let sep = line
            .find(':')
            .or_else(|| line.find('!'))
            .ok_or_else(|| ParserError::AstBuildFailed {
                location: SourceLocation::new().with_range(range),
                message: "line is neither an assignment, a conditional, nor a target header"
                    .to_string(),
            })?;
        self.tokens.push(Token::new(TokenKind::TargetStart, line, range));
        self.in_target = true;
        let _ = sep;
        Ok(())
    }
}

fn strip_continuation(line: &str) -> Option<String> {
    if line.ends_with("\\\\") {
        // an escaped backslash, not a continuation
        return None;
    }
    let stripped = line.strip_suffix('\\')?;
    let mut out = stripped.to_string();
    if let Some(before) = stripped.chars().last() {
        if before == '$' {
            out.pop();
            out.push(NEUTRALIZED_DOLLAR);
        } else if !before.is_whitespace() {
            out.push(' ');
        }
    } else {
        out.push(' ');
    }
    Some(out)
}

fn split_directive(rest: &str) -> Option<(&str, &str)> {
    let end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    let (directive, payload) = rest.split_at(end);
    if directive.is_empty() {
        return None;
    }
    Some((directive, payload.trim_start()))
}

fn starts_with_word_boundary(line: &str, word: &str) -> bool {
    line.as_bytes()
        .get(word.len())
        .map(|&b| b == b' ' || b == b'\t')
        .unwrap_or(true)
}

/// Finds the byte offset of an assignment operator (`= += := ?= !=`) at
/// the top nesting level, respecting `${...}`/`$(...)` grouping so that
/// e.g. `FOO:= ${BAR:M*}` is not confused by the inner `:`.
fn find_assignment(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut depth = 0i32;
    let mut i = 0;
    let mut seen_non_space = false;
    while i < bytes.len() {
        match bytes[i] {
            b'$' if i + 1 < bytes.len() && (bytes[i + 1] == b'{' || bytes[i + 1] == b'(') => {
                depth += 1;
                i += 2;
                continue;
            }
            b'}' | b')' if depth > 0 => {
                depth -= 1;
            }
            b' ' | b'\t' if depth == 0 => {}
            b'=' if depth == 0 && seen_non_space => {
                return Some(i + 1);
            }
            c if depth == 0 && matches!(c, b'+' | b'!' | b'?' | b':') => {
                if bytes.get(i + 1) == Some(&b'=') {
                    return Some(i + 2);
                }
            }
            _ => {}
        }
        if depth == 0 && !bytes[i].is_ascii_whitespace() {
            seen_non_space = true;
        }
        i += 1;
    }
    None
}

fn parse_variable_head(name_part: &str) -> Result<(String, char, bool)> {
    let name_part = name_part.trim_end();
    let (name_part, modifier) = if let Some(s) = name_part.strip_suffix("+=") {
        (s, '+')
    } else if let Some(s) = name_part.strip_suffix(":=") {
        (s, ':')
    } else if let Some(s) = name_part.strip_suffix("?=") {
        (s, '?')
    } else if let Some(s) = name_part.strip_suffix("!=") {
        (s, '!')
    } else if let Some(s) = name_part.strip_suffix('=') {
        (s, '=')
    } else {
        return Err(ParserError::ExpectedToken {
            location: SourceLocation::new(),
        });
    };
    let name_part = name_part.trim_end();
    let trailing_plus = name_part.ends_with('+') && modifier != '+';
    let name = if trailing_plus {
        name_part[..name_part.len() - 1].trim_end().to_string()
    } else {
        name_part.to_string()
    };
    if name.is_empty() {
        return Err(ParserError::ExpectedToken {
            location: SourceLocation::new(),
        });
    }
    Ok((name, modifier, trailing_plus))
}

/// Splits an RHS/payload string into whitespace-separated words, keeping
/// `${...}`, `$(...)`, quoted, and backtick groups intact, and cutting
/// the line short at an unquoted `#` (the remainder becomes a trailing
/// comment, represented here by simply stopping — callers that need the
/// comment text re-scan the raw line).
fn split_words(s: &str) -> Result<(Vec<String>, Option<String>)> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    let mut comment = None;
    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                i += 1;
            }
            '#' => {
                comment = Some(chars[i..].iter().collect::<String>());
                break;
            }
            '$' => {
                current.push(c);
                i += 1;
                if i < chars.len() && chars[i] == '$' {
                    current.push(chars[i]);
                    i += 1;
                } else if i < chars.len() && (chars[i] == '{' || chars[i] == '(') {
                    let close = if chars[i] == '{' { '}' } else { ')' };
                    let open = chars[i];
                    let mut depth = 1;
                    current.push(chars[i]);
                    i += 1;
                    while i < chars.len() && depth > 0 {
                        if chars[i] == open {
                            depth += 1;
                        } else if chars[i] == close {
                            depth -= 1;
                        }
                        current.push(chars[i]);
                        i += 1;
                    }
                    if depth > 0 {
                        return Err(ParserError::ExpectedChar {
                            location: SourceLocation::new(),
                            want: close,
                        });
                    }
                } else if i < chars.len() {
                    current.push(chars[i]);
                    i += 1;
                }
            }
            '"' | '\'' | '`' => {
                let quote = c;
                current.push(c);
                i += 1;
                while i < chars.len() && chars[i] != quote {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        current.push(chars[i]);
                        i += 1;
                    }
                    current.push(chars[i]);
                    i += 1;
                }
                if i < chars.len() {
                    current.push(chars[i]);
                    i += 1;
                }
            }
            _ => {
                current.push(c);
                i += 1;
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    Ok((words, comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(lines: &[&str]) -> Vec<Token> {
        let mut tok = Tokenizer::new();
        for line in lines {
            tok.feed_line(line).unwrap();
        }
        tok.finish().unwrap()
    }

    #[test]
    fn comment_line_emits_single_token() {
        let tokens = tokenize(&["# hello"]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
    }

    #[test]
    fn variable_assignment_emits_start_tokens_end() {
        let tokens = tokenize(&["PORTNAME=\tfoo"]);
        assert_eq!(tokens[0].kind, TokenKind::VariableStart);
        assert_eq!(tokens[0].variable_name.as_deref(), Some("PORTNAME"));
        assert_eq!(tokens[1].kind, TokenKind::VariableToken);
        assert_eq!(tokens[1].data, "foo");
        assert_eq!(tokens[2].kind, TokenKind::VariableEnd);
    }

    #[test]
    fn conditional_line_splits_directive_and_words() {
        let tokens = tokenize(&[".if ${FOO} == bar"]);
        assert_eq!(tokens[0].kind, TokenKind::ConditionalStart);
        assert_eq!(tokens[1].conditional_directive.as_deref(), Some("if"));
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::ConditionalToken && t.data == "${FOO}"));
    }

    #[test]
    fn target_command_requires_tab() {
        let tokens = tokenize(&["all:", "\techo hi"]);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::TargetStart));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::TargetCommandStart));
    }

    #[test]
    fn grouped_variable_reference_stays_one_word() {
        let tokens = tokenize(&["FOO=\t${BAR:S/a/b/}"]);
        let word = tokens
            .iter()
            .find(|t| t.kind == TokenKind::VariableToken)
            .unwrap();
        assert_eq!(word.data, "${BAR:S/a/b/}");
    }

    #[test]
    fn unterminated_group_is_an_error() {
        let mut tok = Tokenizer::new();
        let err = tok.feed_line("FOO=\t${BAR").unwrap_err();
        assert!(matches!(err, ParserError::ExpectedChar { .. }));
    }
}
