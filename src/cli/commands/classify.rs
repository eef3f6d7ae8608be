//! `iris classify` command - run the classification engine on a record
//!
//! Loads the incident, runs the engine against the effective rule set, and
//! prints the verdict with the per-criterion breakdown. With `--write` the
//! result is stored back into the record's file; re-running on an unchanged
//! record rewrites the identical bytes.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::inc::{load_one, write_incident};
use crate::cli::helpers::paint_severity;
use crate::cli::table::{self, ColumnDef};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::{Classifier, Config, RuleSet};
use crate::entities::incident::Status;

/// Column definitions for the breakdown table
const BREAKDOWN_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("CRITERION", 20),
    ColumnDef::new("TIER", 12),
    ColumnDef::new("REPORT", 6),
    ColumnDef::new("REASON", 56),
];

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Incident ID or short ID
    pub id: String,

    /// Store the result in the incident file
    #[arg(long, short = 'w')]
    pub write: bool,

    /// Rules file overriding the project rule set
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Hide the per-criterion breakdown
    #[arg(long)]
    pub no_breakdown: bool,
}

/// Resolve the effective rule set: flag > config > project file > defaults
pub(crate) fn effective_rules(
    project: &Project,
    config: &Config,
    flag: Option<&PathBuf>,
) -> Result<RuleSet> {
    let path = flag.cloned().or_else(|| config.rules_path(project));
    match path {
        Some(path) => RuleSet::load(&path).map_err(|e| miette::miette!("{}", e)),
        None => Ok(RuleSet::default()),
    }
}

pub fn run(args: ClassifyArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let config = Config::load(&project);
    let rules = effective_rules(&project, &config, args.rules.as_ref())?;
    let engine = Classifier::new(rules);

    let (mut incident, path) = load_one(&project, &args.id)?;

    // A validation failure is a user-correctable input problem, not a fault.
    let result = engine
        .classify(&incident)
        .map_err(|e| miette::miette!("Cannot classify {}: {}", incident.id, e))?;

    if args.write {
        incident.classification = Some(result.clone());
        if incident.status == Status::Draft {
            incident.status = Status::Submitted;
        }
        write_incident(&incident, &path)?;
    }

    match global.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&result).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            println!(
                "{} {}",
                style(&incident.id.to_string()).cyan(),
                style(&incident.company).bold()
            );
            println!();
            println!("  Severity:      {}", paint_severity(result.severity));
            println!(
                "  Report:        {}",
                if result.report_required {
                    style("REQUIRED within 24 hours").red().bold().to_string()
                } else {
                    "not required".to_string()
                }
            );
            println!(
                "  Justification: {} ({})",
                result.justification, result.determined_by
            );

            if !args.no_breakdown {
                let rows: Vec<Vec<String>> = result
                    .breakdown
                    .iter()
                    .map(|o| {
                        vec![
                            o.criterion.to_string(),
                            o.severity.to_string(),
                            if o.triggers_report { "yes" } else { "no" }.to_string(),
                            o.reason.clone(),
                        ]
                    })
                    .collect();
                println!();
                println!("{}", table::render(BREAKDOWN_COLUMNS, &rows));
            }

            if args.write {
                println!();
                println!("Stored classification in {}", path.display());
            }
        }
    }

    Ok(())
}
