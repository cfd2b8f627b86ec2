//! Importing operations from documents and files.

use crate::error::ImportError;
use crate::record::OperationRecord;
use rustc_hash::FxHashSet;
use sgql_syntax::{parse, visit, OperationDefinition, OperationType, Source, VisitContext, Visitor};
use std::path::{Path, PathBuf};

/// Marker that lets a file contain no operations.
pub const DEFAULT_NO_OPERATIONS_MARKER: &str = "#typespec";

const IMPORT_DIRECTIVE: &str = "#import \"";

/// Import configuration.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Files starting with this text may contain no operations.
    pub no_operations_marker: String,
    /// Replace `#import "path"` lines with the referenced file.
    pub expand_imports: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            no_operations_marker: DEFAULT_NO_OPERATIONS_MARKER.to_string(),
            expand_imports: true,
        }
    }
}

/// Collects the name and type of every operation, in order.
#[derive(Default)]
struct OperationCollector {
    operations: Vec<(Option<String>, OperationType)>,
}

impl Visitor for OperationCollector {
    fn begin_operation_definition(
        &mut self,
        node: OperationDefinition,
        _cx: &VisitContext<'_>,
    ) -> OperationDefinition {
        self.operations
            .push((node.name().map(str::to_string), node.operation));
        node
    }
}

/// Imports the operations of one document.
///
/// # Errors
///
/// Fails if the text does not parse, defines a fragment twice, has no
/// operations (unless it starts with the no-operations marker), has more than
/// one anonymous operation, or mixes anonymous and named operations.
pub fn import_document(
    file_name: &str,
    contents: &str,
    options: &ImportOptions,
) -> Result<Vec<OperationRecord>, ImportError> {
    let source = Source::with_name(contents, file_name);
    let document = parse(&source)?;

    let mut collector = OperationCollector::default();
    visit(&document, &mut collector)?;
    let operations = collector.operations;

    if operations.is_empty() {
        let marker = options.no_operations_marker.as_str();
        if !marker.is_empty() && contents.starts_with(marker) {
            tracing::debug!(file = file_name, "no operations, marker present");
            return Ok(Vec::new());
        }
        return Err(ImportError::NoOperations {
            file: file_name.to_string(),
        });
    }

    let anonymous = operations.iter().filter(|(name, _)| name.is_none()).count();
    if anonymous > 1 {
        return Err(ImportError::MultipleAnonymous {
            file: file_name.to_string(),
        });
    }
    if anonymous == 1 && operations.len() > 1 {
        return Err(ImportError::MixedAnonymous {
            file: file_name.to_string(),
        });
    }

    let records: Vec<_> = operations
        .into_iter()
        .map(|(operation_name, operation_type)| OperationRecord {
            file_name: file_name.to_string(),
            operation_name,
            operation_type,
            source: contents.to_string(),
        })
        .collect();

    tracing::debug!(
        file = file_name,
        operations = records.len(),
        "imported operations"
    );
    Ok(records)
}

/// Imports the operations of a file. The file stem becomes the record's
/// `file_name`.
///
/// # Errors
///
/// Fails on I/O errors, import cycles, and every error of
/// [`import_document`].
pub fn import_file(
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> Result<Vec<OperationRecord>, ImportError> {
    let path = path.as_ref();
    let contents = if options.expand_imports {
        expand_imports(path)?
    } else {
        read(path)?
    };
    let file_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    import_document(&file_name, &contents, options)
}

/// Reads a file, replacing each `#import "path"` line with the contents of
/// the referenced file. Paths are relative to the importing file and are
/// expanded recursively.
///
/// # Errors
///
/// Fails on I/O errors and on a file that imports itself, directly or not.
pub fn expand_imports(path: impl AsRef<Path>) -> Result<String, ImportError> {
    let mut active = FxHashSet::default();
    expand(path.as_ref(), &mut active)
}

fn expand(path: &Path, active: &mut FxHashSet<PathBuf>) -> Result<String, ImportError> {
    let canonical = path
        .canonicalize()
        .map_err(|source| ImportError::io(path, source))?;
    if !active.insert(canonical.clone()) {
        return Err(ImportError::ImportCycle {
            path: path.to_path_buf(),
        });
    }

    let contents = read(&canonical)?;
    let base = canonical.parent().unwrap_or_else(|| Path::new(""));

    let mut output = String::with_capacity(contents.len());
    for line in contents.split_inclusive('\n') {
        let Some((target, rest)) = parse_import_directive(line) else {
            output.push_str(line);
            continue;
        };

        tracing::debug!(from = %path.display(), import = target, "expanding import");
        let imported = expand(&base.join(target), active)?;
        output.push_str(&imported);
        if rest.trim().is_empty() {
            if line.ends_with('\n') && !imported.ends_with('\n') {
                output.push('\n');
            }
        } else {
            output.push_str(rest);
        }
    }

    active.remove(&canonical);
    Ok(output)
}

/// Splits `#import "path"` into the path and the rest of the line.
fn parse_import_directive(line: &str) -> Option<(&str, &str)> {
    let directive = line.trim_start().strip_prefix(IMPORT_DIRECTIVE)?;
    let end = directive.find('"')?;
    let target = &directive[..end];
    let valid = !target.is_empty()
        && target
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '/' | '.' | '-'));
    valid.then(|| (target, &directive[end + 1..]))
}

fn read(path: &Path) -> Result<String, ImportError> {
    std::fs::read_to_string(path).map_err(|source| ImportError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(contents: &str) -> Result<Vec<OperationRecord>, ImportError> {
        import_document("test", contents, &ImportOptions::default())
    }

    #[test]
    fn test_named_operations() {
        let records = import("query A { a } mutation B { b } subscription C { c }").unwrap();
        let summary: Vec<_> = records.iter().map(ToString::to_string).collect();
        assert_eq!(
            summary,
            vec!["test:A:query", "test:B:mutation", "test:C:subscription"]
        );
        assert!(records
            .iter()
            .all(|r| r.source == "query A { a } mutation B { b } subscription C { c }"));
    }

    #[test]
    fn test_single_anonymous_operation() {
        let records = import("{ hero { name } }").unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_anonymous());
        assert_eq!(records[0].operation_type, OperationType::Query);
    }

    #[test]
    fn test_no_operations() {
        let error = import("fragment F on T { a }").unwrap_err();
        assert!(matches!(error, ImportError::NoOperations { ref file } if file == "test"));
        assert!(matches!(import(""), Err(ImportError::NoOperations { .. })));
    }

    #[test]
    fn test_no_operations_marker() {
        let records = import("#typespec\ntype Query { a: Int }").unwrap();
        assert!(records.is_empty());

        let options = ImportOptions {
            no_operations_marker: "# schema only".to_string(),
            ..ImportOptions::default()
        };
        assert!(import_document("s", "# schema only\nscalar Date", &options)
            .unwrap()
            .is_empty());
        assert!(import_document("s", "#typespec\nscalar Date", &options).is_err());
    }

    #[test]
    fn test_marker_must_lead_the_file() {
        let error = import("\n#typespec\nscalar Date").unwrap_err();
        assert!(matches!(error, ImportError::NoOperations { .. }));
    }

    #[test]
    fn test_multiple_anonymous() {
        let error = import("{ a } { b }").unwrap_err();
        assert!(matches!(error, ImportError::MultipleAnonymous { .. }));
    }

    #[test]
    fn test_mixed_anonymous_and_named() {
        assert!(matches!(
            import("query Named { a } { b }"),
            Err(ImportError::MixedAnonymous { .. })
        ));
        assert!(matches!(
            import("{ b } query Named { a }"),
            Err(ImportError::MixedAnonymous { .. })
        ));
    }

    #[test]
    fn test_parse_and_visit_errors_propagate() {
        assert!(matches!(import("query {"), Err(ImportError::Parse(_))));
        assert!(matches!(
            import("query Q { ...F } fragment F on T { a } fragment F on T { b }"),
            Err(ImportError::Visit(_))
        ));
    }

    #[test]
    fn test_parse_import_directive() {
        assert_eq!(
            parse_import_directive("#import \"../shared/frags.graphql\"\n"),
            Some(("../shared/frags.graphql", "\n"))
        );
        assert_eq!(
            parse_import_directive("  #import \"a.graphql\""),
            Some(("a.graphql", ""))
        );
        assert_eq!(parse_import_directive("# import \"a.graphql\""), None);
        assert_eq!(parse_import_directive("#import \"a b\""), None);
        assert_eq!(parse_import_directive("#import \"unterminated"), None);
        assert_eq!(parse_import_directive("query { a }"), None);
    }
}
