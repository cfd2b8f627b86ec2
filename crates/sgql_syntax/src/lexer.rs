//! Pull-based lexer.
//!
//! The lexer is driven by its consumer: every call to [`Lexer::next_token`]
//! receives the previously returned token and scans the next one after it,
//! starting from [`Token::start_of_file`]. Whitespace, commas, comments and a
//! leading byte-order mark are insignificant and never surface from it;
//! [`comments`] collects the comments separately.

use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};
use sgql_core::{Source, Span};
use std::borrow::Cow;

/// A lexer over one [`Source`].
pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer.
    pub fn new(source: &'a Source) -> Self {
        let text = source.body();
        Self {
            source: text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// Scans the token following `previous`.
    ///
    /// Once EOF has been returned, every further call returns EOF again.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the text after `previous` does not start with
    /// a valid token.
    pub fn next_token(&mut self, previous: &Token<'_>) -> Result<Token<'a>, LexError> {
        if previous.is_eof() {
            return Ok(Token::new(TokenKind::Eof, Span::empty(previous.span.end)));
        }
        self.pos = previous.span.end;
        self.read_token()
    }

    /// Peeks at the current byte without consuming.
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos as usize).copied()
    }

    /// Peeks at the byte at offset from current position.
    #[inline]
    fn peek_at(&self, offset: u32) -> Option<u8> {
        self.bytes.get((self.pos + offset) as usize).copied()
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn advance_by(&mut self, n: u32) {
        self.pos += n;
    }

    /// Gets the slice from start to current position.
    #[inline]
    fn slice_from(&self, start: u32) -> &'a str {
        &self.source[start as usize..self.pos as usize]
    }

    /// Describes the character at `pos` for error messages.
    fn describe_at(&self, pos: u32) -> String {
        match self.source.get(pos as usize..).and_then(|s| s.chars().next()) {
            Some(c) => format!("{c:?}"),
            None => "<EOF>".to_string(),
        }
    }

    fn invalid_character(&self, pos: u32) -> LexError {
        let c = self
            .source
            .get(pos as usize..)
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::new(LexErrorKind::InvalidCharacter(c), pos)
    }

    fn read_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_trivia();

        let start = self.pos;

        let Some(c) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, Span::empty(start)));
        };

        let kind = match c {
            b'!' => TokenKind::Bang,
            b'$' => TokenKind::Dollar,
            b'(' => TokenKind::ParenL,
            b')' => TokenKind::ParenR,
            b':' => TokenKind::Colon,
            b'=' => TokenKind::Equals,
            b'@' => TokenKind::At,
            b'[' => TokenKind::BracketL,
            b']' => TokenKind::BracketR,
            b'{' => TokenKind::BraceL,
            b'|' => TokenKind::Pipe,
            b'}' => TokenKind::BraceR,
            b'.' => return self.read_spread(),
            b'"' => return self.read_string(),
            b'-' | b'0'..=b'9' => return self.read_number(),
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => return Ok(self.read_name()),
            _ => return Err(self.invalid_character(start)),
        };

        self.advance();
        Ok(Token::new(kind, Span::new(start, self.pos)))
    }

    /// Skips whitespace, line terminators, commas and comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n' | b',') => {
                    self.advance();
                }
                Some(b'#') => {
                    let rest = &self.bytes[self.pos as usize..];
                    let len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
                    self.advance_by(len as u32);
                }
                Some(0xEF)
                    if self.pos == 0
                        && self.peek_at(1) == Some(0xBB)
                        && self.peek_at(2) == Some(0xBF) =>
                {
                    self.advance_by(3);
                }
                _ => break,
            }
        }
    }

    fn read_spread(&mut self) -> Result<Token<'a>, LexError> {
        let start = self.pos;
        if self.peek_at(1) == Some(b'.') && self.peek_at(2) == Some(b'.') {
            self.advance_by(3);
            Ok(Token::new(TokenKind::Spread, Span::new(start, self.pos)))
        } else {
            Err(LexError::new(LexErrorKind::InvalidSpread, start))
        }
    }

    fn read_name(&mut self) -> Token<'a> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.advance();
            } else {
                break;
            }
        }
        Token::with_value(
            TokenKind::Name,
            self.slice_from(start),
            Span::new(start, self.pos),
        )
    }

    /// Scans an Int or Float literal.
    ///
    /// ```text
    /// -? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?
    /// ```
    ///
    /// The literal must not be directly followed by `.` or a name start.
    fn read_number(&mut self) -> Result<Token<'a>, LexError> {
        let start = self.pos;
        let mut is_float = false;

        if self.peek() == Some(b'-') {
            self.advance();
        }

        match self.peek() {
            Some(b'0') => {
                self.advance();
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return Err(self.number_error(format!(
                        "unexpected digit after 0: {}",
                        self.describe_at(self.pos)
                    )));
                }
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.expected_digit()),
        }

        if self.peek() == Some(b'.') {
            is_float = true;
            self.advance();
            self.read_digits()?;
        }

        if let Some(b'e' | b'E') = self.peek() {
            is_float = true;
            self.advance();
            if let Some(b'+' | b'-') = self.peek() {
                self.advance();
            }
            self.read_digits()?;
        }

        if let Some(b'.' | b'_' | b'a'..=b'z' | b'A'..=b'Z') = self.peek() {
            return Err(self.number_error(format!(
                "unexpected {} after number",
                self.describe_at(self.pos)
            )));
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Ok(Token::with_value(
            kind,
            self.slice_from(start),
            Span::new(start, self.pos),
        ))
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Consumes one or more digits.
    fn read_digits(&mut self) -> Result<(), LexError> {
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.expected_digit());
        }
        self.skip_digits();
        Ok(())
    }

    fn expected_digit(&self) -> LexError {
        self.number_error(format!("expected digit, found {}", self.describe_at(self.pos)))
    }

    fn number_error(&self, message: String) -> LexError {
        LexError::new(LexErrorKind::MalformedNumber(message), self.pos)
    }

    /// Scans a string literal. Dispatches to block strings on `"""`.
    fn read_string(&mut self) -> Result<Token<'a>, LexError> {
        if self.peek_at(1) == Some(b'"') && self.peek_at(2) == Some(b'"') {
            return self.read_block_string();
        }

        let start = self.pos;
        self.advance(); // Opening quote

        // Only allocated once an escape sequence needs rewriting.
        let mut cooked: Option<String> = None;
        let mut chunk_start = self.pos;

        loop {
            let Some(c) = self.peek() else {
                return Err(LexError::new(LexErrorKind::UnterminatedString, start));
            };

            match c {
                b'"' => {
                    let tail = self.slice_from(chunk_start);
                    let value = match cooked {
                        Some(mut buf) => {
                            buf.push_str(tail);
                            Cow::Owned(buf)
                        }
                        None => Cow::Borrowed(tail),
                    };
                    self.advance();
                    return Ok(Token::with_value(
                        TokenKind::String,
                        value,
                        Span::new(start, self.pos),
                    ));
                }
                b'\n' | b'\r' => {
                    return Err(LexError::new(LexErrorKind::UnterminatedString, start));
                }
                b'\\' => {
                    let buf = cooked.get_or_insert_with(String::new);
                    buf.push_str(self.slice_from(chunk_start));
                    let escape_start = self.pos;
                    self.advance();

                    let unescaped = match self.peek() {
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'b') => '\u{0008}',
                        Some(b'f') => '\u{000C}',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(b'u') => {
                            self.advance();
                            self.read_unicode_escape(escape_start)?
                        }
                        None => {
                            return Err(LexError::new(LexErrorKind::UnterminatedString, start));
                        }
                        Some(_) => {
                            return Err(LexError::new(
                                LexErrorKind::InvalidEscape(format!(
                                    "\\{}",
                                    self.describe_at(self.pos).trim_matches('\'')
                                )),
                                escape_start,
                            ));
                        }
                    };
                    buf.push(unescaped);
                    if self.bytes[escape_start as usize + 1] != b'u' {
                        self.advance();
                    }
                    chunk_start = self.pos;
                }
                c if c < 0x20 && c != b'\t' => {
                    return Err(self.invalid_character(self.pos));
                }
                _ => self.advance(),
            }
        }
    }

    /// Reads the four hex digits after `\u`, combining surrogate pairs.
    fn read_unicode_escape(&mut self, escape_start: u32) -> Result<char, LexError> {
        let code = self
            .read_hex4()
            .ok_or_else(|| self.unicode_error(escape_start))?;

        if (0xD800..=0xDBFF).contains(&code) {
            if self.peek() == Some(b'\\') && self.peek_at(1) == Some(b'u') {
                let resume = self.pos;
                self.advance_by(2);
                if let Some(low) = self.read_hex4().filter(|low| (0xDC00..=0xDFFF).contains(low)) {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    if let Some(c) = char::from_u32(combined) {
                        return Ok(c);
                    }
                }
                self.pos = resume;
            }
            return Err(self.unicode_error(escape_start));
        }

        char::from_u32(code).ok_or_else(|| self.unicode_error(escape_start))
    }

    /// Consumes exactly four hex digits, or nothing.
    fn read_hex4(&mut self) -> Option<u32> {
        let digits = self.bytes.get(self.pos as usize..self.pos as usize + 4)?;
        let mut value = 0u32;
        for &digit in digits {
            value = (value << 4) | char::from(digit).to_digit(16)?;
        }
        self.advance_by(4);
        Some(value)
    }

    fn unicode_error(&self, escape_start: u32) -> LexError {
        let text: String = self.source[escape_start as usize..]
            .chars()
            .take(6)
            .collect();
        LexError::new(LexErrorKind::InvalidUnicodeEscape(text), escape_start)
    }

    /// Scans a block string literal. Only `\"""` is an escape.
    fn read_block_string(&mut self) -> Result<Token<'a>, LexError> {
        let start = self.pos;
        self.advance_by(3);

        let mut raw = String::new();
        let mut chunk_start = self.pos;

        loop {
            match self.peek() {
                None => {
                    return Err(LexError::new(LexErrorKind::UnterminatedBlockString, start));
                }
                Some(b'"') if self.peek_at(1) == Some(b'"') && self.peek_at(2) == Some(b'"') => {
                    raw.push_str(self.slice_from(chunk_start));
                    self.advance_by(3);
                    return Ok(Token::with_value(
                        TokenKind::BlockString,
                        block_string_value(&raw),
                        Span::new(start, self.pos),
                    ));
                }
                Some(b'\\')
                    if self.peek_at(1) == Some(b'"')
                        && self.peek_at(2) == Some(b'"')
                        && self.peek_at(3) == Some(b'"') =>
                {
                    raw.push_str(self.slice_from(chunk_start));
                    raw.push_str("\"\"\"");
                    self.advance_by(4);
                    chunk_start = self.pos;
                }
                Some(c) if c < 0x20 && !matches!(c, b'\t' | b'\n' | b'\r') => {
                    return Err(self.invalid_character(self.pos));
                }
                _ => self.advance(),
            }
        }
    }
}

/// Computes the value of a block string from its raw contents.
///
/// Removes the common indentation of every line after the first, drops
/// leading and trailing blank lines, and joins lines with `\n`.
pub fn block_string_value(raw: &str) -> String {
    let lines = split_lines(raw);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace(line);
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line
            } else {
                line.get(common_indent..).unwrap_or("")
            }
        })
        .collect();

    let is_blank = |line: &&str| leading_whitespace(line) == line.len();
    let first = lines.iter().position(|line| !is_blank(line));
    let last = lines.iter().rposition(|line| !is_blank(line));

    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    while let Some(i) = memchr::memchr2(b'\n', b'\r', &bytes[start..]).map(|i| start + i) {
        lines.push(&raw[start..i]);
        start = if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            i + 2
        } else {
            i + 1
        };
    }
    lines.push(&raw[start..]);

    lines
}

/// Tokenizes the entire source, ending with the EOF token.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
pub fn tokenize(source: &Source) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut previous = Token::start_of_file();

    loop {
        let token = lexer.next_token(&previous)?;
        let is_eof = token.is_eof();
        tokens.push(token.clone());
        if is_eof {
            break;
        }
        previous = token;
    }

    Ok(tokens)
}

/// Collects the `#` comments of a source as [`TokenKind::Comment`] tokens.
/// The value excludes the leading `#`.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
pub fn comments(source: &Source) -> Result<Vec<Token<'_>>, LexError> {
    let text = source.body();
    let bytes = text.as_bytes();
    let mut comments = Vec::new();
    let mut gap_start = 0;

    for token in tokenize(source)? {
        // only trivia lies between two tokens, so every `#` here opens a comment
        let gap_end = token.span.start as usize;
        let mut pos = gap_start;
        while let Some(i) = memchr::memchr(b'#', &bytes[pos..gap_end]) {
            let start = pos + i;
            let len = memchr::memchr2(b'\n', b'\r', &bytes[start..gap_end])
                .unwrap_or(gap_end - start);
            let end = start + len;
            comments.push(Token::with_value(
                TokenKind::Comment,
                &text[start + 1..end],
                Span::new(start as u32, end as u32),
            ));
            pos = end;
        }
        gap_start = token.span.end as usize;
    }

    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        let source = Source::new(text);
        tokenize(&source)
            .unwrap()
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    fn single(text: &str) -> (TokenKind, String, Span) {
        let source = Source::new(text);
        let tokens = tokenize(&source).unwrap();
        assert_eq!(tokens.len(), 2, "expected one token plus EOF in {text:?}");
        let token = &tokens[0];
        (token.kind, token.value().to_string(), token.span)
    }

    fn lex_error(text: &str) -> LexError {
        let source = Source::new(text);
        tokenize(&source).unwrap_err()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("! $ ( ) ... : = @ [ ] { | }"),
            vec![
                TokenKind::Bang,
                TokenKind::Dollar,
                TokenKind::ParenL,
                TokenKind::ParenR,
                TokenKind::Spread,
                TokenKind::Colon,
                TokenKind::Equals,
                TokenKind::At,
                TokenKind::BracketL,
                TokenKind::BracketR,
                TokenKind::BraceL,
                TokenKind::Pipe,
                TokenKind::BraceR,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_names() {
        let source = Source::new("query fragment on true null _private x1");
        let tokens = tokenize(&source).unwrap();
        let values: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Name)
            .map(Token::value)
            .collect();
        assert_eq!(
            values,
            vec!["query", "fragment", "on", "true", "null", "_private", "x1"]
        );
    }

    #[test]
    fn test_trivia_is_skipped() {
        assert_eq!(
            kinds("  ,,{ # comment } \n\t a,\r\n}  # trailing"),
            vec![
                TokenKind::BraceL,
                TokenKind::Name,
                TokenKind::BraceR,
                TokenKind::Eof,
            ]
        );
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("# only a comment"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_byte_order_mark_only_at_start() {
        assert_eq!(kinds("\u{FEFF}{ a }").len(), 4);

        let error = lex_error("{ \u{FEFF} }");
        assert_eq!(error.kind, LexErrorKind::InvalidCharacter('\u{FEFF}'));
        assert_eq!(error.offset, 2);
    }

    #[test]
    fn test_pull_from_previous_token() {
        let source = Source::new("{ hero }");
        let mut lexer = Lexer::new(&source);

        let first = lexer.next_token(&Token::start_of_file()).unwrap();
        assert_eq!(first.kind, TokenKind::BraceL);
        let second = lexer.next_token(&first).unwrap();
        assert_eq!(second.value(), "hero");
        assert_eq!(second.span, Span::new(2, 6));
        let third = lexer.next_token(&second).unwrap();
        assert_eq!(third.kind, TokenKind::BraceR);
        let eof = lexer.next_token(&third).unwrap();
        assert!(eof.is_eof());
        assert!(lexer.next_token(&eof).unwrap().is_eof());
    }

    #[test]
    fn test_tokens_do_not_overlap() {
        let source = Source::new("query Q($a: [Int!] = [1, 2]) { f(x: \"s\") @skip(if: $a) }");
        let tokens = tokenize(&source).unwrap();
        for pair in tokens.windows(2) {
            assert!(pair[0].span.start <= pair[0].span.end);
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn test_int() {
        assert_eq!(
            single("123"),
            (TokenKind::Int, "123".to_string(), Span::new(0, 3))
        );
        assert_eq!(single("0").0, TokenKind::Int);
        assert_eq!(single("-42").1, "-42");
    }

    #[test]
    fn test_float() {
        assert_eq!(
            single("1.5e10"),
            (TokenKind::Float, "1.5e10".to_string(), Span::new(0, 6))
        );
        assert_eq!(single("-0.25").0, TokenKind::Float);
        assert_eq!(single("2E-3").0, TokenKind::Float);
        assert_eq!(single("6e+2").0, TokenKind::Float);
    }

    #[test]
    fn test_int_followed_by_punctuator() {
        assert_eq!(
            kinds("(x: 1)"),
            vec![
                TokenKind::ParenL,
                TokenKind::Name,
                TokenKind::Colon,
                TokenKind::Int,
                TokenKind::ParenR,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_malformed_numbers() {
        let error = lex_error("1.");
        assert!(matches!(error.kind, LexErrorKind::MalformedNumber(_)));
        assert_eq!(error.offset, 2);

        assert!(matches!(lex_error("01").kind, LexErrorKind::MalformedNumber(_)));
        assert!(matches!(lex_error("-").kind, LexErrorKind::MalformedNumber(_)));
        assert!(matches!(lex_error("1e").kind, LexErrorKind::MalformedNumber(_)));
        assert!(matches!(lex_error("1.2.3").kind, LexErrorKind::MalformedNumber(_)));
        assert!(matches!(lex_error("123abc").kind, LexErrorKind::MalformedNumber(_)));
        assert!(matches!(lex_error(".5").kind, LexErrorKind::InvalidSpread));
    }

    #[test]
    fn test_simple_string() {
        let (kind, value, span) = single("\"hello world\"");
        assert_eq!(kind, TokenKind::String);
        assert_eq!(value, "hello world");
        assert_eq!(span, Span::new(0, 13));
    }

    #[test]
    fn test_string_escapes() {
        let (_, value, _) = single(r#""quote \" slash \/ back \\ nl \n tab \t""#);
        assert_eq!(value, "quote \" slash / back \\ nl \n tab \t");

        let (_, value, _) = single(r#""\b\f\r""#);
        assert_eq!(value, "\u{0008}\u{000C}\r");
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(single(r#""caf\u00e9""#).1, "caf\u{e9}");
        assert_eq!(single(r#""\uD83D\uDE00""#).1, "\u{1F600}");
        assert_eq!(single("\"naïve\"").1, "naïve");

        let error = lex_error(r#""\u00zz""#);
        assert!(matches!(error.kind, LexErrorKind::InvalidUnicodeEscape(_)));
        assert_eq!(error.offset, 1);

        let lone_surrogate = lex_error(r#""\uD83D""#);
        assert!(matches!(
            lone_surrogate.kind,
            LexErrorKind::InvalidUnicodeEscape(_)
        ));
    }

    #[test]
    fn test_unescaped_string_borrows() {
        let source = Source::new("\"plain\"");
        let tokens = tokenize(&source).unwrap();
        assert!(matches!(tokens[0].value, Some(Cow::Borrowed("plain"))));
    }

    #[test]
    fn test_unterminated_string() {
        let error = lex_error("\"abc");
        assert_eq!(error.kind, LexErrorKind::UnterminatedString);
        assert_eq!(error.offset, 0);

        let error = lex_error("{ f(a: \"abc\ndef\") }");
        assert_eq!(error.kind, LexErrorKind::UnterminatedString);
        assert_eq!(error.offset, 7);
    }

    #[test]
    fn test_invalid_escape() {
        let error = lex_error(r#""bad \x escape""#);
        assert_eq!(error.kind, LexErrorKind::InvalidEscape("\\x".to_string()));
        assert_eq!(error.offset, 5);
    }

    #[test]
    fn test_block_string() {
        let text = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\"";
        let (kind, value, span) = single(text);
        assert_eq!(kind, TokenKind::BlockString);
        assert_eq!(value, "Hello,\n  World!\n\nYours,\n  GraphQL.");
        assert_eq!(span.end as usize, text.len());
    }

    #[test]
    fn test_block_string_escape_and_raw_quotes() {
        let (_, value, _) = single(r#""""contains \""" and " and \n""""#);
        assert_eq!(value, r#"contains """ and " and \n"#);
    }

    #[test]
    fn test_unterminated_block_string() {
        let error = lex_error("{ } \"\"\"never closed");
        assert_eq!(error.kind, LexErrorKind::UnterminatedBlockString);
        assert_eq!(error.offset, 4);
    }

    #[test]
    fn test_block_string_value_edge_cases() {
        assert_eq!(block_string_value(""), "");
        assert_eq!(block_string_value("   \n  \n"), "");
        assert_eq!(block_string_value("first\r\n  second\r  third"), "first\nsecond\nthird");
        assert_eq!(block_string_value("  keep first indent"), "  keep first indent");
    }

    #[test]
    fn test_invalid_characters() {
        let error = lex_error("{ a ? }");
        assert_eq!(error.kind, LexErrorKind::InvalidCharacter('?'));
        assert_eq!(error.offset, 4);

        let error = lex_error("..");
        assert_eq!(error.kind, LexErrorKind::InvalidSpread);
        assert_eq!(error.offset, 0);

        let error = lex_error("\"tab\tok but bell \u{7} is not\"");
        assert_eq!(error.kind, LexErrorKind::InvalidCharacter('\u{7}'));
    }

    #[test]
    fn test_comments() {
        let source = Source::new("#typespec\n# second\nquery { a # trailing\n b(s: \"# not a comment\") }\n#");
        let found = comments(&source).unwrap();
        let values: Vec<_> = found.iter().map(Token::value).collect();
        assert_eq!(values, vec!["typespec", " second", " trailing", ""]);
        assert!(found.iter().all(|c| c.kind == TokenKind::Comment));
        assert_eq!(found[0].span, Span::new(0, 9));
        assert_eq!(found[3].span, Span::new(67, 68));
    }

    #[test]
    fn test_comments_inside_block_strings_are_text() {
        let source = Source::new("{ f(s: \"\"\"\n# heading\n\"\"\") }");
        assert!(comments(&source).unwrap().is_empty());
    }
}
