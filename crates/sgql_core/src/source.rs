//! Document text and offset-to-position mapping.

use crate::span::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 1-based line/column pair. Columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The text of one document plus an optional name used in diagnostics.
///
/// A `Source` never changes after construction; spans produced by the lexer
/// and parser index into [`Source::body`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    body: String,
    name: Option<String>,
}

impl Source {
    /// Creates an unnamed source.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: None,
        }
    }

    /// Creates a source with a name, typically a file path.
    #[must_use]
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: Some(name.into()),
        }
    }

    #[must_use]
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the text covered by `span`, or `None` if the span does not
    /// fall on character boundaries of the body.
    #[must_use]
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.body.get(span.range())
    }

    /// Maps a byte offset to its line and column.
    ///
    /// Lines are counted by scanning for `\n`; offsets past the end of the
    /// body clamp to the end.
    #[must_use]
    pub fn locate(&self, offset: u32) -> Position {
        let bytes = self.body.as_bytes();
        let offset = (offset as usize).min(bytes.len());
        let prefix = &bytes[..offset];

        let newlines = memchr::memchr_iter(b'\n', prefix).count();
        let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |i| i + 1);

        Position {
            line: u32::try_from(newlines + 1).unwrap_or(u32::MAX),
            column: u32::try_from(offset - line_start + 1).unwrap_or(u32::MAX),
        }
    }

    /// Builds a `miette` source for rendering diagnostics against this text.
    #[must_use]
    pub fn to_named_source(&self) -> miette::NamedSource<String> {
        miette::NamedSource::new(self.name().unwrap_or("<input>"), self.body.clone())
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_first_line() {
        let source = Source::new("query { a }");
        assert_eq!(source.locate(0), Position::new(1, 1));
        assert_eq!(source.locate(6), Position::new(1, 7));
    }

    #[test]
    fn test_locate_after_newlines() {
        let source = Source::new("{\n  a\n  b\n}");
        // `b` is at offset 8
        assert_eq!(source.locate(8), Position::new(3, 3));
        // the newline itself belongs to the line it ends
        assert_eq!(source.locate(1), Position::new(1, 2));
        assert_eq!(source.locate(2), Position::new(2, 1));
    }

    #[test]
    fn test_locate_clamps_past_end() {
        let source = Source::new("ab\ncd");
        assert_eq!(source.locate(100), Position::new(2, 3));
    }

    #[test]
    fn test_name_and_slice() {
        let source = Source::with_name("{ hero }", "hero.graphql");
        assert_eq!(source.name(), Some("hero.graphql"));
        assert_eq!(source.slice(Span::new(2, 6)), Some("hero"));
        assert_eq!(Source::new("x").name(), None);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }
}
