//! Syntax layer for simplegql.
//!
//! This crate provides:
//! - `token`: Token kinds and token structures
//! - `lexer`: Pull-based tokenization
//! - `ast`: Abstract syntax tree types
//! - `parser`: Recursive descent parser
//! - `visitor`: Fragment collection and tree walking
//! - `printer`: Canonical printing
//! - `error`: Lex, parse and visit errors

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
pub mod visitor;

pub use ast::*;
pub use error::{LexError, LexErrorKind, ParseError, VisitError};
pub use lexer::{comments, tokenize, Lexer};
pub use parser::{parse, Parser};
pub use printer::{print, print_with_options, PrintOptions, Printer};
pub use sgql_core::{Position, Source, Span};
pub use token::{Token, TokenKind};
pub use visitor::{collect_fragments, visit, FragmentRegistry, VisitContext, Visitor};
