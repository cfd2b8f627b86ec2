//! Core utilities for simplegql.
//!
//! This crate provides foundational types used throughout sgql:
//! - `span`: Byte ranges into document text
//! - `source`: Document text with line/column lookup

pub mod source;
pub mod span;

pub use source::{Position, Source};
pub use span::Span;
