//! Token kinds and structures.

use sgql_core::Span;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a lexical token.
///
/// Keywords such as `query`, `fragment` or `true` are not kinds of their own:
/// they are [`TokenKind::Name`] tokens that the parser compares by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // Special tokens
    /// Virtual token preceding the first real token of a source.
    Sof,
    Eof,
    /// Part of the closed kind set; the lexer skips comments and never
    /// produces this kind.
    Comment,

    // Punctuation
    Bang,
    Dollar,
    ParenL,
    ParenR,
    Spread,
    Colon,
    Equals,
    At,
    BracketL,
    BracketR,
    BraceL,
    Pipe,
    BraceR,

    // Names and literals
    Name,
    Int,
    Float,
    String,
    BlockString,
}

impl TokenKind {
    #[must_use]
    pub const fn is_punctuator(self) -> bool {
        matches!(
            self,
            Self::Bang
                | Self::Dollar
                | Self::ParenL
                | Self::ParenR
                | Self::Spread
                | Self::Colon
                | Self::Equals
                | Self::At
                | Self::BracketL
                | Self::BracketR
                | Self::BraceL
                | Self::Pipe
                | Self::BraceR
        )
    }

    /// Returns true for token kinds that carry a value.
    #[must_use]
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Int | Self::Float | Self::String | Self::BlockString
        )
    }

    /// Human-readable description used in parse error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sof => "<SOF>",
            Self::Eof => "<EOF>",
            Self::Comment => "Comment",
            Self::Bang => "\"!\"",
            Self::Dollar => "\"$\"",
            Self::ParenL => "\"(\"",
            Self::ParenR => "\")\"",
            Self::Spread => "\"...\"",
            Self::Colon => "\":\"",
            Self::Equals => "\"=\"",
            Self::At => "\"@\"",
            Self::BracketL => "\"[\"",
            Self::BracketR => "\"]\"",
            Self::BraceL => "\"{\"",
            Self::Pipe => "\"|\"",
            Self::BraceR => "\"}\"",
            Self::Name => "Name",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::BlockString => "BlockString",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its kind, optional value and source span.
///
/// Name and number values borrow from the source text. String values are
/// cooked (escapes resolved, block strings dedented) and only allocate when
/// the literal needed rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: Option<Cow<'a, str>>,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[must_use]
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            value: None,
            span,
        }
    }

    #[must_use]
    #[inline]
    pub fn with_value(kind: TokenKind, value: impl Into<Cow<'a, str>>, span: Span) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            span,
        }
    }

    /// The virtual start-of-file token the lexer starts pulling from.
    #[must_use]
    #[inline]
    pub const fn start_of_file() -> Self {
        Self::new(TokenKind::Sof, Span::empty(0))
    }

    #[must_use]
    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the token value, or an empty string for punctuators.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Returns true if this is a name token spelled `keyword`.
    #[must_use]
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.value() == keyword
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} \"{}\"", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}
