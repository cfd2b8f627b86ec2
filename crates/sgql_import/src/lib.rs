//! Operation import for simplegql.
//!
//! This crate sits between parsed documents and a transport:
//! - `importer`: turns a document or file into [`OperationRecord`]s,
//!   expanding `#import` lines and enforcing per-file operation rules
//! - `catalog`: looks records up by file, operation name and type
//! - `request`: the JSON envelope sent for an operation

pub mod catalog;
pub mod error;
pub mod importer;
pub mod record;
pub mod request;

pub use catalog::QueryCatalog;
pub use error::ImportError;
pub use importer::{
    expand_imports, import_document, import_file, ImportOptions, DEFAULT_NO_OPERATIONS_MARKER,
};
pub use record::OperationRecord;
pub use request::Request;
