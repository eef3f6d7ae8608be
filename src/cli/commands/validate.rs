//! `iris validate` command - validate incident files
//!
//! Two gates per file: the embedded JSON schema catches structural problems
//! (unknown keys, out-of-enum values, negative numbers), then the engine's
//! invariant validation catches what the schema cannot express (future
//! dates, blank required strings). A record with no stored classification is
//! a warning, which `--strict` upgrades to an error.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::classify;
use crate::core::project::{Project, FILE_SUFFIX};
use crate::entities::incident::Incident;
use crate::schema::{SchemaRegistry, Validator};
use crate::yaml::parse_yaml;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Paths to validate (default: all incidents in the project)
    #[arg()]
    pub paths: Vec<PathBuf>,

    /// Strict mode - warnings become errors
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
    total_errors: usize,
    total_warnings: usize,
}

pub fn run(args: ValidateArgs, _global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let registry = SchemaRegistry::default();
    let validator = Validator::new(&registry).map_err(|e| miette::miette!("{}", e))?;

    let files: Vec<PathBuf> = if args.paths.is_empty() {
        collect_incident_files(&project)
    } else {
        expand_paths(&args.paths)
    };

    println!(
        "{} Validating {} file(s)...\n",
        style("→").blue(),
        files.len()
    );

    let mut stats = ValidationStats::default();

    for path in &files {
        stats.files_checked += 1;

        let (errors, warnings) = check_file(&validator, path);

        let failed = !errors.is_empty() || (args.strict && !warnings.is_empty());
        if failed {
            stats.files_failed += 1;
        } else {
            stats.files_passed += 1;
        }
        stats.total_errors += errors.len();
        stats.total_warnings += warnings.len();

        if !args.summary {
            if failed {
                println!("{} {}", style("✗").red(), path.display());
            } else if !warnings.is_empty() {
                println!("{} {}", style("!").yellow(), path.display());
            } else {
                println!("{} {}", style("✓").green(), path.display());
            }
            for e in &errors {
                println!("    {}: {}", style("error").red(), e);
            }
            for w in &warnings {
                println!("    {}: {}", style("warning").yellow(), w);
            }
        }

        if failed && !args.keep_going {
            break;
        }
    }

    println!();
    println!(
        "{} checked, {} passed, {} failed, {} error(s), {} warning(s)",
        stats.files_checked,
        style(stats.files_passed).green(),
        if stats.files_failed > 0 {
            style(stats.files_failed).red().to_string()
        } else {
            stats.files_failed.to_string()
        },
        stats.total_errors,
        stats.total_warnings
    );

    if stats.files_failed > 0 {
        return Err(miette::miette!("validation failed"));
    }
    Ok(())
}

/// Validate one file; returns (errors, warnings)
fn check_file(validator: &Validator, path: &std::path::Path) -> (Vec<String>, Vec<String>) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return (vec![format!("cannot read file: {}", e)], Vec::new()),
    };

    // Gate 1: file structure against the embedded schema.
    let schema_errors = validator.validate_yaml(&content);
    if !schema_errors.is_empty() {
        return (schema_errors, Vec::new());
    }

    // Gate 2: typed parse plus engine invariants.
    let incident: Incident = match parse_yaml(&content, &path.display().to_string()) {
        Ok(inc) => inc,
        Err(e) => return (vec![e.to_string()], Vec::new()),
    };

    if let Err(e) = classify::validate(&incident) {
        return (vec![e.to_string()], Vec::new());
    }

    let mut warnings = Vec::new();
    if incident.classification.is_none() {
        warnings.push("no stored classification - run `iris classify --write`".to_string());
    }

    (Vec::new(), warnings)
}

/// All incident files in the project
fn collect_incident_files(project: &Project) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(project.incidents_dir())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().to_string_lossy().ends_with(FILE_SUFFIX))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Expand explicitly given paths, walking directories
fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter(|e| e.path().to_string_lossy().ends_with(FILE_SUFFIX))
            {
                files.push(entry.path().to_path_buf());
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files
}
