//! Searchable collection of imported operations.

use crate::error::ImportError;
use crate::importer::{import_file, ImportOptions};
use crate::record::OperationRecord;
use indexmap::IndexMap;
use serde::Serialize;
use sgql_syntax::OperationType;
use std::path::Path;

/// Operation records grouped by file, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryCatalog {
    files: IndexMap<String, Vec<OperationRecord>>,
}

impl QueryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds records, grouping them by `file_name`.
    pub fn extend(&mut self, records: impl IntoIterator<Item = OperationRecord>) {
        for record in records {
            self.files
                .entry(record.file_name.clone())
                .or_default()
                .push(record);
        }
    }

    /// Imports a file and adds its records. Returns how many were added.
    ///
    /// # Errors
    ///
    /// Propagates the import error; the catalog is left unchanged.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        options: &ImportOptions,
    ) -> Result<usize, ImportError> {
        let records = import_file(path, options)?;
        let count = records.len();
        self.extend(records);
        Ok(count)
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.values().all(Vec::is_empty)
    }

    /// File names in insertion order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// All records, file by file.
    pub fn iter(&self) -> impl Iterator<Item = &OperationRecord> {
        self.files.values().flatten()
    }

    /// First operation of a file.
    #[must_use]
    pub fn find(&self, file_name: &str) -> Option<&OperationRecord> {
        self.in_file(file_name).first()
    }

    /// Every operation of a file.
    #[must_use]
    pub fn in_file(&self, file_name: &str) -> &[OperationRecord] {
        self.files.get(file_name).map_or(&[], Vec::as_slice)
    }

    /// First operation with this name in any file.
    #[must_use]
    pub fn find_by_operation(&self, operation_name: &str) -> Option<&OperationRecord> {
        self.iter().find(|r| has_name(r, operation_name))
    }

    /// Every operation with this name, across files.
    #[must_use]
    pub fn find_all_by_operation(&self, operation_name: &str) -> Vec<&OperationRecord> {
        self.iter().filter(|r| has_name(r, operation_name)).collect()
    }

    #[must_use]
    pub fn find_in_file(&self, file_name: &str, operation_name: &str) -> Option<&OperationRecord> {
        self.in_file(file_name)
            .iter()
            .find(|r| has_name(r, operation_name))
    }

    #[must_use]
    pub fn find_by_operation_type(
        &self,
        operation_name: &str,
        operation_type: OperationType,
    ) -> Option<&OperationRecord> {
        self.iter()
            .find(|r| has_name(r, operation_name) && r.operation_type == operation_type)
    }

    #[must_use]
    pub fn find_exact(
        &self,
        file_name: &str,
        operation_name: &str,
        operation_type: OperationType,
    ) -> Option<&OperationRecord> {
        self.in_file(file_name)
            .iter()
            .find(|r| has_name(r, operation_name) && r.operation_type == operation_type)
    }
}

impl FromIterator<OperationRecord> for QueryCatalog {
    fn from_iter<I: IntoIterator<Item = OperationRecord>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

fn has_name(record: &OperationRecord, operation_name: &str) -> bool {
    record.operation_name.as_deref() == Some(operation_name)
}
