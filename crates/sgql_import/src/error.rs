//! Import errors.

use miette::Diagnostic;
use sgql_syntax::{ParseError, VisitError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while importing operations from a document.
#[derive(Debug, Error, Diagnostic)]
pub enum ImportError {
    #[error("no operation definitions in {file}")]
    #[diagnostic(
        code(sgql::import::no_operations),
        help("define at least one operation, or start the file with the no-operations marker")
    )]
    NoOperations { file: String },

    #[error("multiple anonymous operations in {file}")]
    #[diagnostic(
        code(sgql::import::multiple_anonymous),
        help("a file may contain at most one anonymous operation")
    )]
    MultipleAnonymous { file: String },

    #[error("anonymous operation mixed with named operations in {file}")]
    #[diagnostic(
        code(sgql::import::mixed_anonymous),
        help("name every operation in the file, or keep a single anonymous one")
    )]
    MixedAnonymous { file: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Visit(#[from] VisitError),

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(sgql::import::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("import cycle through {}", path.display())]
    #[diagnostic(code(sgql::import::cycle))]
    ImportCycle { path: PathBuf },
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
