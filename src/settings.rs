//! Parser configuration (C11).
//!
//! Settings are resolved in priority order: CLI flag > config file >
//! built-in default. The config file itself uses the degenerate
//! `KEY=value` Makefile dialect so it can be parsed with the same
//! tokenizer as everything else.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParserError, Result};

/// Column the reformatter wraps variable values at.
const DEFAULT_WRAPCOL: usize = 80;
/// Column target-command argument wrapping aims for.
const DEFAULT_TARGET_COMMAND_FORMAT_WRAPCOL: usize = 65;
/// Minimum number of words before target-command wrapping kicks in.
const DEFAULT_TARGET_COMMAND_FORMAT_THRESHOLD: usize = 8;
/// Lines of context `portfmt -D` shows around a hunk.
const DEFAULT_DIFF_CONTEXT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub wrapcol: usize,
    pub target_command_format_wrapcol: usize,
    pub target_command_format_threshold: usize,
    pub diff_context: usize,
    /// Treat the input as a category `Makefile` (`SUBDIR+=` listing)
    /// rather than a port `Makefile`.
    pub category_makefile: bool,
    /// Variables the reformatter leaves untouched even if the knowledge
    /// base would otherwise reorder or wrap them.
    pub ignore_wrap_col: Vec<String>,
    /// Goal-column alignment for variables the knowledge base doesn't
    /// recognize (`Block::Unknown`). `None` keeps the default (aligned,
    /// same as every other variable); `Some(false)`/`Some(true)` are
    /// `portfmt -u`/`-U`.
    #[serde(skip)]
    pub unknown_var_goal_col: Option<bool>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            wrapcol: DEFAULT_WRAPCOL,
            target_command_format_wrapcol: DEFAULT_TARGET_COMMAND_FORMAT_WRAPCOL,
            target_command_format_threshold: DEFAULT_TARGET_COMMAND_FORMAT_THRESHOLD,
            diff_context: DEFAULT_DIFF_CONTEXT,
            category_makefile: false,
            ignore_wrap_col: Vec::new(),
            unknown_var_goal_col: None,
        }
    }
}

impl ParserSettings {
    /// Loads settings from a `.portfmt.conf`-style file at `path`,
    /// layered on top of [`ParserSettings::default`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut settings = Self::default();
        let ast = crate::builder::parse_str(&text)?;
        for node in &ast.root {
            let crate::ast::Node::Variable(var) = node else {
                continue;
            };
            let value = var.words.join(" ");
            settings.apply(&var.name, &value)?;
        }
        Ok(settings)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "wrapcol" => self.wrapcol = parse_usize(key, value)?,
            "target_command_format_wrapcol" => {
                self.target_command_format_wrapcol = parse_usize(key, value)?;
            }
            "target_command_format_threshold" => {
                self.target_command_format_threshold = parse_usize(key, value)?;
            }
            "diff_context" => self.diff_context = parse_usize(key, value)?,
            "category_makefile" => self.category_makefile = value == "yes" || value == "1",
            "ignore_wrap_col" => {
                self.ignore_wrap_col = value.split_whitespace().map(str::to_string).collect();
            }
            _ => {
                return Err(ParserError::InvalidArgument {
                    location: Default::default(),
                    message: format!("unknown setting `{key}`"),
                });
            }
        }
        Ok(())
    }

    /// Tokenizes and builds `text` into an [`crate::ast::Ast`]. Does not
    /// resolve `.include` directives; callers that need the included
    /// files' contents call [`crate::include::resolve_includes`]
    /// themselves with a search path, since that step touches the
    /// filesystem and this method doesn't have one to offer.
    pub fn parse(&self, text: &str) -> Result<crate::ast::Ast> {
        crate::builder::parse_str(text)
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| ParserError::ExpectedInt {
        location: Default::default(),
        found: format!("{key}={value}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_constants() {
        let settings = ParserSettings::default();
        assert_eq!(settings.wrapcol, 80);
        assert_eq!(settings.target_command_format_wrapcol, 65);
        assert_eq!(settings.target_command_format_threshold, 8);
        assert_eq!(settings.diff_context, 3);
    }

    #[test]
    fn from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfmt.conf");
        std::fs::write(&path, "wrapcol=\t100\ndiff_context=\t5\n").unwrap();
        let settings = ParserSettings::from_file(&path).unwrap();
        assert_eq!(settings.wrapcol, 100);
        assert_eq!(settings.diff_context, 5);
        assert_eq!(settings.target_command_format_wrapcol, 65);
    }

    #[test]
    fn unknown_setting_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfmt.conf");
        std::fs::write(&path, "bogus=\tvalue\n").unwrap();
        assert!(ParserSettings::from_file(&path).is_err());
    }
}
