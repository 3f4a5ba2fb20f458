//! AST for the Ports `Makefile` dialect.
//!
//! Node ownership is a plain tree (`Vec`/`Box`, no arena indices) — see
//! DESIGN.md for why this diverges from the upstream pool-per-parser
//! model. Non-owning references (`If::ifparent`, `TargetCommand`'s
//! enclosing target) are resolved by walking the tree rather than stored
//! as raw pointers, so the whole crate stays free of `unsafe`.

use crate::span::LineRange;

/// Shared header carried by every node below `Root`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeHeader {
    pub line: LineRange,
    pub edited: bool,
    pub goalcol: Option<usize>,
}

impl NodeHeader {
    pub fn new(line: LineRange) -> Self {
        Self {
            line,
            edited: false,
            goalcol: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub header: NodeHeader,
    pub kind: CommentKind,
    pub lines: Vec<String>,
}

/// A flat directive with no body: `.error`, `.warning`, `.info`,
/// `.export[-env|-literal]`, `.unexport[-env]`, `.undef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprKind {
    Error,
    Warning,
    Info,
    Export,
    ExportEnv,
    ExportLiteral,
    Unexport,
    UnexportEnv,
    Undef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub header: NodeHeader,
    pub kind: ExprKind,
    pub indent: usize,
    pub words: Vec<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeKind {
    /// bmake `.include`
    Bmake,
    /// bmake optional: `-include` spelled as a directive, `dinclude`, `sinclude`
    BmakeOptional,
    /// POSIX `include`
    Posix,
    /// POSIX optional `-include`
    PosixOptional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    pub header: NodeHeader,
    pub kind: IncludeKind,
    pub path: String,
    /// `<path>` vs `"path"`.
    pub sys: bool,
    pub indent: usize,
    pub comment: Option<String>,
    /// Spliced contents once the include loader (C8) has resolved the path.
    pub body: Vec<Node>,
    pub loaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfKind {
    If,
    Def,
    Else,
    Make,
    Ndef,
    Nmake,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    pub header: NodeHeader,
    pub kind: IfKind,
    pub test: Vec<String>,
    pub body: Vec<Node>,
    /// Either empty, or begins with a nested `If` representing `.elif`/`.else`.
    pub orelse: Vec<Node>,
    pub indent: usize,
    pub comment: Option<String>,
    pub end_comment: Option<String>,
    /// Set on the node appended to another `If`'s `orelse`, set by the builder.
    pub is_elif_chained: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct For {
    pub header: NodeHeader,
    pub bindings: Vec<String>,
    pub words: Vec<String>,
    pub body: Vec<Node>,
    pub indent: usize,
    pub comment: Option<String>,
    pub end_comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Named,
    /// Synthesized when a target command precedes any target header.
    Unassociated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub header: NodeHeader,
    pub kind: TargetKind,
    pub sources: Vec<String>,
    pub dependencies: Vec<String>,
    pub body: Vec<Node>,
    pub comment: Option<String>,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TargetCommandFlags: u8 {
        const SILENT        = 0b001; // @
        const IGNORE_ERROR  = 0b010; // -
        const ALWAYS_EXEC   = 0b100; // +
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCommand {
    pub header: NodeHeader,
    pub flags: TargetCommandFlags,
    pub words: Vec<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarModifier {
    Assign,
    Append,
    Expand,
    Optional,
    Shell,
}

impl VarModifier {
    pub fn as_str(self) -> &'static str {
        match self {
            VarModifier::Assign => "=",
            VarModifier::Append => "+=",
            VarModifier::Expand => ":=",
            VarModifier::Optional => "?=",
            VarModifier::Shell => "!=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub header: NodeHeader,
    pub name: String,
    /// Preserved trailing `+` before the modifier, e.g. `FOO+ =`.
    pub trailing_plus: bool,
    pub modifier: VarModifier,
    pub words: Vec<String>,
    pub comment: Option<String>,
}

/// A node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(Vec<Node>),
    Comment(Comment),
    Expr(Expr),
    Include(Include),
    If(If),
    For(For),
    Target(Target),
    TargetCommand(TargetCommand),
    Variable(Variable),
    /// Tombstone; kept so walks over sibling indices remain stable.
    Deleted(NodeHeader),
}

impl Node {
    pub fn header(&self) -> Option<&NodeHeader> {
        match self {
            Node::Root(_) => None,
            Node::Comment(n) => Some(&n.header),
            Node::Expr(n) => Some(&n.header),
            Node::Include(n) => Some(&n.header),
            Node::If(n) => Some(&n.header),
            Node::For(n) => Some(&n.header),
            Node::Target(n) => Some(&n.header),
            Node::TargetCommand(n) => Some(&n.header),
            Node::Variable(n) => Some(&n.header),
            Node::Deleted(h) => Some(h),
        }
    }

    pub fn header_mut(&mut self) -> Option<&mut NodeHeader> {
        match self {
            Node::Root(_) => None,
            Node::Comment(n) => Some(&mut n.header),
            Node::Expr(n) => Some(&mut n.header),
            Node::Include(n) => Some(&mut n.header),
            Node::If(n) => Some(&mut n.header),
            Node::For(n) => Some(&mut n.header),
            Node::Target(n) => Some(&mut n.header),
            Node::TargetCommand(n) => Some(&mut n.header),
            Node::Variable(n) => Some(&mut n.header),
            Node::Deleted(h) => Some(h),
        }
    }

    pub fn mark_edited(&mut self) {
        if let Some(h) = self.header_mut() {
            h.edited = true;
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Node::Deleted(_))
    }

    /// Children in source order, for read-only walks. `If::orelse` is
    /// visited after `If::body`, matching the upstream walker contract.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Root(c) => c.iter().collect(),
            Node::Include(n) => n.body.iter().collect(),
            Node::If(n) => n.body.iter().chain(n.orelse.iter()).collect(),
            Node::For(n) => n.body.iter().collect(),
            Node::Target(n) => n.body.iter().collect(),
            _ => Vec::new(),
        }
    }

    pub fn children_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Node::Root(c) => c.iter_mut().collect(),
            Node::Include(n) => n.body.iter_mut().collect(),
            Node::If(n) => n.body.iter_mut().chain(n.orelse.iter_mut()).collect(),
            Node::For(n) => n.body.iter_mut().collect(),
            Node::Target(n) => n.body.iter_mut().collect(),
            _ => Vec::new(),
        }
    }
}

/// A complete parsed Makefile. Owns every node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    pub root: Vec<Node>,
    /// Raw source lines, kept for raw-line fallback printing and diff mode.
    pub raw_lines: Vec<String>,
}

impl Ast {
    pub fn empty() -> Self {
        Self {
            root: Vec::new(),
            raw_lines: Vec::new(),
        }
    }

    /// Depth-first pre-order walk. The callback returns `true` to continue
    /// descending into a node's children, `false` to skip them (but
    /// siblings are still visited).
    pub fn walk(&self, mut visit: impl FnMut(&Node) -> bool) {
        fn go<'a>(nodes: impl Iterator<Item = &'a Node>, visit: &mut impl FnMut(&Node) -> bool) {
            for node in nodes {
                if visit(node) {
                    go(node.children().into_iter(), visit);
                }
            }
        }
        go(self.root.iter(), &mut visit);
    }

    pub fn walk_mut(&mut self, mut visit: impl FnMut(&mut Node) -> bool) {
        fn go_one(node: &mut Node, visit: &mut impl FnMut(&mut Node) -> bool) {
            if visit(node) {
                for child in node.children_mut() {
                    go_one(child, visit);
                }
            }
        }
        for node in self.root.iter_mut() {
            go_one(node, &mut visit);
        }
    }
}
