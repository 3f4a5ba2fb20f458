//! Structured error types for the parser, editor and reformatter.
//!
//! Mirrors the upstream `ParserError` taxonomy one-to-one, but adds a
//! source-location-aware note/help pair so CLI front-ends can print
//! actionable diagnostics instead of a bare message.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::span::LineRange;

/// Where an error occurred: a path (if parsing a file) plus an optional
/// line range within it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub file: Option<PathBuf>,
    pub range: Option<LineRange>,
}

impl SourceLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_range(mut self, range: LineRange) -> Self {
        self.range = Some(range);
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string());
        match self.range {
            Some(range) => write!(f, "{file}:{}", range.start),
            None => write!(f, "{file}"),
        }
    }
}

/// Typed error model for the core (§4.9, C9). Every fallible entry point
/// returns `Result<T, ParserError>`; once a parser step fails, callers are
/// expected to discard the in-progress tree rather than continue.
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("{location}: expected {want:?}")]
    ExpectedChar { location: SourceLocation, want: char },

    #[error("{location}: expected a token")]
    ExpectedToken { location: SourceLocation },

    #[error("{location}: expected an integer, found {found:?}")]
    ExpectedInt {
        location: SourceLocation,
        found: String,
    },

    #[error("{location}: invalid argument: {message}")]
    InvalidArgument {
        location: SourceLocation,
        message: String,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{location}: {message}")]
    AstBuildFailed {
        location: SourceLocation,
        message: String,
    },

    #[error("{location}: edit failed: {message}")]
    EditFailed {
        location: SourceLocation,
        message: String,
    },

    #[error("differences found")]
    DifferencesFound,

    #[error("{0}")]
    Unspecified(String),
}

impl ParserError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::ExpectedChar { location, .. }
            | Self::ExpectedToken { location }
            | Self::ExpectedInt { location, .. }
            | Self::InvalidArgument { location, .. }
            | Self::AstBuildFailed { location, .. }
            | Self::EditFailed { location, .. } => Some(location.clone()),
            Self::Io(_) | Self::DifferencesFound | Self::Unspecified(_) => None,
        }
    }

    /// A one-line explanation of what class of mistake this is, independent
    /// of the specific input that triggered it.
    pub fn note(&self) -> &'static str {
        match self {
            Self::ExpectedChar { .. } => "a group opened with ${ or $( was never closed",
            Self::ExpectedToken { .. } => "a directive or assignment was missing its payload",
            Self::ExpectedInt { .. } => {
                "PORTREVISION and PORTEPOCH must hold a single decimal integer"
            }
            Self::InvalidArgument { .. } => "the edit was invoked with incompatible arguments",
            Self::Io(_) => "the operation could not complete because of a filesystem error",
            Self::AstBuildFailed { .. } => {
                "the token stream could not be folded into a balanced tree"
            }
            Self::EditFailed { .. } => "an edit pass could not be applied to the tree",
            Self::DifferencesFound => "the reformatted output differs from the input",
            Self::Unspecified(_) => "an unclassified parser error occurred",
        }
    }

    /// Recovery hint for the CLI to print after `note()`.
    pub fn help(&self) -> String {
        match self {
            Self::ExpectedChar { want, .. } => format!("insert the missing {want:?}"),
            Self::ExpectedToken { .. } => "add a value after the operator".to_string(),
            Self::ExpectedInt { .. } => "set the variable to a bare number, e.g. `1`".to_string(),
            Self::InvalidArgument { .. } => {
                "check that a sub-parser was supplied where required".to_string()
            }
            Self::Io(e) => format!("{e}"),
            Self::AstBuildFailed { .. } => {
                "check that every .if/.for has a matching .endif/.endfor".to_string()
            }
            Self::EditFailed { message, .. } => message.clone(),
            Self::DifferencesFound => "run with -i to apply the reformat".to_string(),
            Self::Unspecified(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
