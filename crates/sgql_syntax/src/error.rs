//! Error types for lexing, parsing and visiting.

use miette::Diagnostic;
use sgql_core::{Position, Span};
use thiserror::Error;

/// What went wrong while lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unexpected character {0:?}")]
    InvalidCharacter(char),

    #[error("unterminated string")]
    UnterminatedString,

    #[error("unterminated block string")]
    UnterminatedBlockString,

    #[error("invalid escape sequence {0}")]
    InvalidEscape(String),

    #[error("invalid unicode escape sequence {0}")]
    InvalidUnicodeEscape(String),

    #[error("invalid number: {0}")]
    MalformedNumber(String),

    #[error("unexpected \".\", did you mean \"...\"?")]
    InvalidSpread,
}

/// A lexing failure at a byte offset.
///
/// For unterminated strings the offset is the opening quote; for every other
/// kind it is the first offending byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: u32,
}

impl LexError {
    #[must_use]
    pub const fn new(kind: LexErrorKind, offset: u32) -> Self {
        Self { kind, offset }
    }
}

/// A syntax error. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("{position}: {error}")]
    #[diagnostic(code(sgql::syntax::lex))]
    Lex {
        error: LexError,
        #[label("here")]
        span: Span,
        position: Position,
    },

    #[error("{position}: expected {expected}, found {found}")]
    #[diagnostic(code(sgql::syntax::unexpected_token))]
    UnexpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token")]
        span: Span,
        position: Position,
    },
}

impl ParseError {
    /// Byte offset where the error starts.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.span().start
    }

    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Lex { span, .. } | Self::UnexpectedToken { span, .. } => *span,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Lex { position, .. } | Self::UnexpectedToken { position, .. } => *position,
        }
    }

    /// Returns the underlying lex error, if the failure happened in the lexer.
    #[must_use]
    pub fn as_lex_error(&self) -> Option<&LexError> {
        match self {
            Self::Lex { error, .. } => Some(error),
            Self::UnexpectedToken { .. } => None,
        }
    }
}

/// Errors from the visitor's fragment collection pass.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum VisitError {
    #[error("fragment name cannot be empty")]
    #[diagnostic(code(sgql::visit::missing_fragment_name))]
    MissingFragmentName {
        #[label("unnamed fragment")]
        span: Span,
    },

    #[error("fragment \"{name}\" is defined more than once")]
    #[diagnostic(code(sgql::visit::duplicate_fragment))]
    DuplicateFragment {
        name: String,
        #[label("first defined here")]
        first: Span,
        #[label("defined again here")]
        second: Span,
    },
}
