//! Command-line interface for simplegql.
//!
//! # Usage
//!
//! ```bash
//! # Check documents for syntax and fragment errors
//! sgql check queries/*.graphql
//!
//! # List the operations each file provides
//! sgql ops queries/*.graphql --json
//!
//! # Print documents in canonical form
//! sgql fmt queries/hero.graphql --write
//!
//! # Dump the token stream of a document
//! sgql tokens queries/hero.graphql
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use miette::{IntoDiagnostic, LabeledSpan, Report, WrapErr};
use sgql_core::Source;
use sgql_import::{expand_imports, import_file, ImportError, ImportOptions, QueryCatalog};
use sgql_syntax::{
    collect_fragments, comments, parse, print_with_options, tokenize, LexError, PrintOptions,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sgql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print per-file progress and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check documents for syntax and fragment errors
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the operations defined in each file
    Ops {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,

        /// Marker that lets a file define no operations
        #[arg(long, default_value = sgql_import::DEFAULT_NO_OPERATIONS_MARKER)]
        marker: String,

        /// Leave `#import` lines unexpanded
        #[arg(long)]
        no_imports: bool,
    },

    /// Print documents in canonical form
    #[command(alias = "format")]
    Fmt {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Rewrite files in place
        #[arg(long, conflicts_with = "check")]
        write: bool,

        /// Exit with 1 if any file is not in canonical form
        #[arg(long)]
        check: bool,

        /// Indentation size
        #[arg(long, default_value = "2")]
        indent: usize,

        /// Use tabs instead of spaces
        #[arg(long)]
        tabs: bool,
    },

    /// Print the token stream of a document
    Tokens { file: PathBuf },
}

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
struct Output {
    verbose: bool,
    quiet: bool,
}

/// Runs a command and returns the process exit code.
///
/// # Errors
///
/// Fails when a file cannot be read or written, or JSON output fails.
/// Document errors are reported and turned into exit code 1.
pub fn run(cli: Cli) -> miette::Result<i32> {
    let out = Output {
        verbose: cli.verbose && !cli.quiet,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Check { files } => check_files(&files, out),
        Commands::Ops {
            files,
            json,
            marker,
            no_imports,
        } => {
            let options = ImportOptions {
                no_operations_marker: marker,
                expand_imports: !no_imports,
            };
            list_operations(&files, &options, json, out)
        }
        Commands::Fmt {
            files,
            write,
            check,
            indent,
            tabs,
        } => {
            let options = PrintOptions {
                indent_size: indent,
                use_tabs: tabs,
            };
            format_files(&files, &options, write, check, out)
        }
        Commands::Tokens { file } => dump_tokens(&file),
    }
}

fn read_source(file: &Path) -> miette::Result<Source> {
    let body = std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", file.display()))?;
    Ok(Source::with_name(body, file.display().to_string()))
}

fn report(error: impl miette::Diagnostic + Send + Sync + 'static, source: &Source) {
    let report = Report::new(error).with_source_code(source.to_named_source());
    eprintln!("{report:?}");
}

fn lex_report(error: &LexError, source: &Source) -> Report {
    let position = source.locate(error.offset);
    miette::miette!(
        labels = vec![LabeledSpan::at_offset(error.offset as usize, "here")],
        "{position}: {error}"
    )
    .with_source_code(source.to_named_source())
}

fn check_files(files: &[PathBuf], out: Output) -> miette::Result<i32> {
    let mut failed = 0usize;

    for file in files {
        if out.verbose {
            println!("{} {}", "Checking".blue(), file.display());
        }

        let source = read_source(file)?;
        let ok = match parse(&source) {
            Ok(document) => match collect_fragments(&document) {
                Ok(fragments) => {
                    tracing::debug!(
                        file = %file.display(),
                        definitions = document.definitions.len(),
                        fragments = fragments.len(),
                        "checked"
                    );
                    true
                }
                Err(e) => {
                    report(e, &source);
                    false
                }
            },
            Err(e) => {
                report(e, &source);
                false
            }
        };

        if ok {
            if out.verbose {
                println!("{} {}", "OK".green(), file.display());
            }
        } else {
            failed += 1;
            eprintln!("{} {}", "Error".red().bold(), file.display());
        }
    }

    if failed > 0 {
        eprintln!(
            "{} {failed} of {} file(s) failed",
            "Failed:".red().bold(),
            files.len()
        );
        return Ok(1);
    }
    if !out.quiet {
        println!(
            "{} {} file(s) checked",
            "Success:".green().bold(),
            files.len()
        );
    }
    Ok(0)
}

fn list_operations(
    files: &[PathBuf],
    options: &ImportOptions,
    json: bool,
    out: Output,
) -> miette::Result<i32> {
    let mut catalog = QueryCatalog::new();
    let mut failed = false;

    for file in files {
        match import_file(file, options) {
            Ok(records) => catalog.extend(records),
            Err(e) => {
                failed = true;
                report_import_error(e, file, options);
            }
        }
    }

    if json {
        let records: Vec<_> = catalog.iter().collect();
        let text = serde_json::to_string_pretty(&records).into_diagnostic()?;
        println!("{text}");
    } else if !out.quiet {
        for record in catalog.iter() {
            let name = record.operation_name.as_deref().unwrap_or("<anonymous>");
            println!(
                "{:<24} {:<32} {}",
                record.file_name.bold(),
                name,
                record.operation_type.as_str().cyan()
            );
        }
        if out.verbose {
            println!("{} operation(s)", catalog.len());
        }
    }

    Ok(i32::from(failed))
}

fn report_import_error(error: ImportError, file: &Path, options: &ImportOptions) {
    // parse and visit spans point into the import-expanded text
    let contents = match error {
        ImportError::Parse(_) | ImportError::Visit(_) if options.expand_imports => {
            expand_imports(file).ok()
        }
        ImportError::Parse(_) | ImportError::Visit(_) => std::fs::read_to_string(file).ok(),
        _ => None,
    };
    match contents {
        Some(contents) => report(error, &Source::with_name(contents, file.display().to_string())),
        None => eprintln!("{:?}", Report::new(error)),
    }
}

/// Returns where the leading comment block ends and how many comments
/// follow it. The block holds `#typespec` and `#import` lines.
fn split_leading_comments(source: &Source) -> Result<(usize, usize), LexError> {
    let body = source.body();
    let found = comments(source)?;
    let mut header_end = 0;
    let mut leading = 0;

    for comment in &found {
        let gap = &body[header_end..comment.span.start as usize];
        if !gap.chars().all(|c| c.is_whitespace() || matches!(c, ',' | '\u{FEFF}')) {
            break;
        }
        header_end = comment.span.end as usize;
        leading += 1;
    }

    Ok((header_end, found.len() - leading))
}

fn format_files(
    files: &[PathBuf],
    options: &PrintOptions,
    write: bool,
    check: bool,
    out: Output,
) -> miette::Result<i32> {
    let mut code = 0;

    for file in files {
        let source = read_source(file)?;
        let document = match parse(&source) {
            Ok(document) => document,
            Err(e) => {
                report(e, &source);
                code = 1;
                continue;
            }
        };
        let (header_end, dropped) = match split_leading_comments(&source) {
            Ok(split) => split,
            Err(e) => {
                eprintln!("{:?}", lex_report(&e, &source));
                code = 1;
                continue;
            }
        };
        if dropped > 0 && (write || check) {
            eprintln!(
                "{} {} ({dropped} comment(s) after the first definition would be lost)",
                "Skipped".yellow(),
                file.display()
            );
            code = 1;
            continue;
        }

        let mut printed = String::new();
        if header_end > 0 {
            printed.push_str(&source.body()[..header_end]);
            printed.push('\n');
        }
        printed.push_str(&print_with_options(&document, options.clone()));
        let unchanged = printed == source.body();

        if check {
            if !unchanged {
                code = 1;
                println!("{} {}", "Would format".yellow(), file.display());
            } else if out.verbose {
                println!("{} {}", "OK".green(), file.display());
            }
        } else if write {
            if unchanged {
                if out.verbose {
                    println!("{} {}", "Unchanged".dimmed(), file.display());
                }
            } else {
                std::fs::write(file, &printed)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("failed to write {}", file.display()))?;
                if !out.quiet {
                    println!("{} {}", "Formatted".green(), file.display());
                }
            }
        } else {
            print!("{printed}");
        }
    }

    Ok(code)
}

fn dump_tokens(file: &Path) -> miette::Result<i32> {
    let source = read_source(file)?;
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{:?}", lex_report(&e, &source));
            return Ok(1);
        }
    };

    for token in &tokens {
        let position = source.locate(token.span.start);
        println!("{:<8} {token}", position.to_string().dimmed());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sgql").chain(args.iter().copied())).unwrap()
    }

    fn write(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_write_conflicts_with_check() {
        let result =
            Cli::try_parse_from(["sgql", "fmt", "--write", "--check", "a.graphql"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_exit_codes() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.graphql", "query Q { a ...F } fragment F on T { b }");
        let bad = write(&dir, "bad.graphql", "query {");
        let dup = write(&dir, "dup.graphql", "fragment F on T { a } fragment F on T { b }");

        assert_eq!(run(cli(&["-q", "check", &good])).unwrap(), 0);
        assert_eq!(run(cli(&["-q", "check", &good, &bad])).unwrap(), 1);
        assert_eq!(run(cli(&["-q", "check", &dup])).unwrap(), 1);
    }

    #[test]
    fn test_check_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.graphql").display().to_string();
        assert!(run(cli(&["check", &missing])).is_err());
    }

    #[test]
    fn test_ops_exit_codes() {
        let dir = TempDir::new().unwrap();
        let named = write(&dir, "named.graphql", "query A { a } mutation B { b }");
        let schema = write(&dir, "schema.graphql", "#typespec\nscalar Date");
        let mixed = write(&dir, "mixed.graphql", "{ a } query B { b }");

        assert_eq!(run(cli(&["-q", "ops", &named, &schema])).unwrap(), 0);
        assert_eq!(run(cli(&["ops", "--json", &named])).unwrap(), 0);
        assert_eq!(run(cli(&["-q", "ops", &mixed])).unwrap(), 1);
        assert_eq!(
            run(cli(&["-q", "ops", "--marker", "# schema", &schema])).unwrap(),
            1
        );
    }

    #[test]
    fn test_fmt_write_and_check() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "q.graphql", "query Q{a b{c}}");

        assert_eq!(run(cli(&["fmt", "--check", &file])).unwrap(), 1);
        assert_eq!(run(cli(&["-q", "fmt", "--write", &file])).unwrap(), 0);
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "query Q {\n  a\n  b {\n    c\n  }\n}\n"
        );
        assert_eq!(run(cli(&["fmt", "--check", &file])).unwrap(), 0);
    }

    #[test]
    fn test_fmt_write_keeps_marker_and_imports() {
        let dir = TempDir::new().unwrap();
        let schema = write(&dir, "schema.graphql", "#typespec\nscalar Date\n");
        write(&dir, "frag.graphql", "fragment F on T { a }\n");
        let query = write(&dir, "q.graphql", "#import \"frag.graphql\"\nquery Q{...F}");

        assert_eq!(run(cli(&["-q", "ops", &schema, &query])).unwrap(), 0);
        assert_eq!(run(cli(&["-q", "fmt", "--write", &schema, &query])).unwrap(), 0);

        assert_eq!(std::fs::read_to_string(&schema).unwrap(), "#typespec\nscalar Date\n");
        assert_eq!(
            std::fs::read_to_string(&query).unwrap(),
            "#import \"frag.graphql\"\nquery Q {\n  ...F\n}\n"
        );
        assert_eq!(run(cli(&["-q", "ops", &schema, &query])).unwrap(), 0);
        assert_eq!(run(cli(&["fmt", "--check", &schema, &query])).unwrap(), 0);
    }

    #[test]
    fn test_fmt_refuses_to_drop_comments() {
        let dir = TempDir::new().unwrap();
        let text = "query Q { a # keep me\n}";
        let file = write(&dir, "q.graphql", text);

        assert_eq!(run(cli(&["-q", "fmt", "--write", &file])).unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&file).unwrap(), text);
        assert_eq!(run(cli(&["fmt", "--check", &file])).unwrap(), 1);
        assert_eq!(run(cli(&["fmt", &file])).unwrap(), 0);
    }

    #[test]
    fn test_ops_reports_import_failures_per_file() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.graphql", "query A { a }");
        let missing = write(&dir, "missing.graphql", "#import \"nope.graphql\"\nquery B { b }");
        let cycle = write(&dir, "cycle.graphql", "#import \"cycle.graphql\"\nquery C { c }");

        assert_eq!(run(cli(&["-q", "ops", &missing, &cycle, &good])).unwrap(), 1);
        assert_eq!(run(cli(&["ops", "--json", &missing, &good])).unwrap(), 1);
        assert_eq!(
            run(cli(&["-q", "ops", "--no-imports", &missing, &good])).unwrap(),
            0
        );
    }

    #[test]
    fn test_tokens() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.graphql", "{ a(b: 1.5) }");
        let bad = write(&dir, "bad.graphql", "{ \"abc }");

        assert_eq!(run(cli(&["tokens", &good])).unwrap(), 0);
        assert_eq!(run(cli(&["tokens", &bad])).unwrap(), 1);
    }
}
