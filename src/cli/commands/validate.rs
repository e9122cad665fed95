//! `gdm validate` command - Validate documents against schemas

use console::style;
use miette::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::{Config, ModelKind};
use crate::schema::registry::SchemaRegistry;
use crate::schema::validator::{ValidationError, Validator};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Validate every document as this kind instead of detecting it
    #[arg(long, short = 'k')]
    pub kind: Option<ModelKind>,

    /// Fail on documents whose kind cannot be determined
    #[arg(long)]
    pub strict: bool,

    /// Continue validation after first error
    #[arg(long)]
    pub keep_going: bool,

    /// Show summary only, don't show individual errors
    #[arg(long)]
    pub summary: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    files_checked: usize,
    files_passed: usize,
    files_failed: usize,
    files_skipped: usize,
    total_errors: usize,
}

pub fn run(args: ValidateArgs, config: &Config) -> Result<()> {
    let registry = SchemaRegistry::default();
    let validator = Validator::new(&registry)?;
    let strict = args.strict || config.strict;

    let files_to_validate = expand_paths(&args.paths);
    tracing::debug!(count = files_to_validate.len(), strict, "validating files");

    let mut stats = ValidationStats::default();
    let mut had_error = false;

    println!(
        "{} Validating {} file(s)...\n",
        style("→").blue(),
        files_to_validate.len()
    );

    for path in &files_to_validate {
        stats.files_checked += 1;

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                if !args.summary {
                    println!("{} {} - {}", style("✗").red(), path.display(), e);
                }
                stats.files_failed += 1;
                stats.total_errors += 1;
                had_error = true;
                if !args.keep_going {
                    break;
                }
                continue;
            }
        };

        let filename = path.display().to_string();
        let result = match args.kind {
            Some(kind) => validator
                .validate(&content, &filename, kind)
                .map(|_| kind),
            None => validator
                .validate_detect(&content, &filename)
                .map(|(kind, _)| kind),
        };

        match result {
            Ok(kind) => {
                stats.files_passed += 1;
                if !args.summary {
                    println!(
                        "{} {} {}",
                        style("✓").green(),
                        path.display(),
                        style(format!("({})", kind)).dim()
                    );
                }
            }
            Err(ValidationError::UnknownKind { .. }) if !strict => {
                stats.files_skipped += 1;
                if !args.summary {
                    println!(
                        "{} {} - unknown document kind (skipped)",
                        style("?").yellow(),
                        path.display()
                    );
                }
            }
            Err(e) => {
                stats.files_failed += 1;
                stats.total_errors += e.violation_count();
                had_error = true;

                if !args.summary {
                    println!(
                        "{} {} - {} error(s)",
                        style("✗").red(),
                        path.display(),
                        e.violation_count()
                    );

                    let report = miette::Report::new(e);
                    println!("{:?}", report);
                }

                if !args.keep_going {
                    break;
                }
            }
        }
    }

    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Files checked:  {}", style(stats.files_checked).cyan());
    println!("  Files passed:   {}", style(stats.files_passed).green());
    println!("  Files failed:   {}", style(stats.files_failed).red());
    if stats.files_skipped > 0 {
        println!("  Files skipped:  {}", style(stats.files_skipped).yellow());
    }
    println!("  Total errors:   {}", style(stats.total_errors).red());
    println!();

    if had_error {
        if stats.files_failed == 1 {
            Err(miette::miette!("Validation failed: 1 file has errors"))
        } else {
            Err(miette::miette!(
                "Validation failed: {} files have errors",
                stats.files_failed
            ))
        }
    } else {
        println!("{} All files passed validation!", style("✓").green().bold());
        Ok(())
    }
}

/// Whether a path has a document extension
fn is_document(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json") | Some("yaml") | Some("yml")
    )
}

/// Expand paths - if a directory is given, find all documents in it
fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_entry(|e| {
                    let name = e.file_name().to_string_lossy();
                    !name.starts_with('.') || e.depth() == 0
                })
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                if is_document(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            // Explicit files are checked even without a known extension;
            // missing ones surface as read errors.
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    files
}
