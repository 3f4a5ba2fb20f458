//! # portfmt - formatter, linter and editor for FreeBSD Ports Makefiles
//!
//! This crate parses the `Makefile`/`Makefile.local`/category `Makefile`
//! dialect used by the FreeBSD Ports tree into a typed tree, and provides
//! passes over that tree for reformatting, linting and programmatic
//! editing (revision bumps, version bumps, `Uses`/`OPTIONS` merges).
//!
//! ## Pipeline
//!
//! ```text
//! source text -> Tokenizer (C2) -> AST builder (C3) -> edit passes (C6) -> Reformatter (C5)
//! ```
//!
//! [`parse`] runs the first two stages and returns an [`ast::Ast`]; the
//! four `port*` binaries in `src/bin/` wire the rest of the pipeline
//! together for their respective command-line surfaces.

/// Typed tree produced by the builder and consumed by every pass.
pub mod ast;
/// AST builder (C3): folds a token stream into an [`ast::Ast`].
pub mod builder;
/// Shared plumbing for the `port*` binaries (C10).
pub mod cli;
/// Value comparator (C4) for sort-order-sensitive variables.
pub mod compare;
/// Edit passes (C6): the `Pass` trait plus the mandatory, optional and
/// lint-only passes that walk an [`ast::Ast`] in place.
pub mod edit;
/// Structured error types shared by every stage.
pub mod error;
/// Reformatter (C5): prints an [`ast::Ast`] back to source text.
pub mod format;
/// Include loader (C8): resolves and splices `.include` targets.
pub mod include;
/// Ports knowledge base (C1): static variable/target/block tables.
pub mod kb;
/// Per-parser metadata cache (C7): `USES`, `OPTIONS`, `SUBPACKAGES`, etc.
pub mod metadata;
/// Parser configuration (C11): wrap columns, thresholds, diff context.
pub mod settings;
/// Line ranges shared by tokens and AST nodes.
pub mod span;
/// Line-oriented tokenizer (C2).
pub mod tokenizer;

pub use ast::Ast;
pub use error::{ParserError, Result, SourceLocation};
pub use settings::ParserSettings;

/// Parses `text` with the default [`ParserSettings`].
///
/// This runs the tokenizer and AST builder only; callers that need
/// `.include` resolution or edit/format passes should use
/// [`settings::ParserSettings::parse`] directly.
pub fn parse(text: &str) -> Result<Ast> {
    builder::parse_str(text)
}
