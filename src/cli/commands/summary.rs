//! `iris summary` command - aggregate classifications across the project
//!
//! The dashboard view: every incident is classified fresh against the
//! current rule set (stored results may predate a rules change), then
//! aggregated into tier counts, the reportable count, and per-criterion
//! trigger counts.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::classify::effective_rules;
use crate::cli::commands::inc::load_all;
use crate::cli::helpers::paint_severity;
use crate::cli::table::{self, ColumnDef};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::project::Project;
use crate::core::{Classifier, Config};
use crate::entities::classification::{Criterion, Severity};

/// Column definitions for the tier table
const TIER_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("SEVERITY", 14),
    ColumnDef::new("COUNT", 8),
];

/// Column definitions for the criterion table
const CRITERION_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("CRITERION", 20),
    ColumnDef::new("TRIGGERED", 10),
];

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Rules file overriding the project rule set
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

/// Aggregated counts for serialization
#[derive(Debug, serde::Serialize)]
struct Summary {
    incidents: usize,
    skipped_invalid: usize,
    reportable: usize,
    by_severity: Vec<(Severity, usize)>,
    triggers_by_criterion: Vec<(Criterion, usize)>,
}

pub fn run(args: SummaryArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let config = Config::load(&project);
    let rules = effective_rules(&project, &config, args.rules.as_ref())?;
    let engine = Classifier::new(rules);

    let incidents = load_all(&project);

    let tiers = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Major,
        Severity::Catastrophic,
    ];
    let mut by_severity = [0usize; 4];
    let mut triggers = [0usize; Criterion::ALL.len()];
    let mut reportable = 0usize;
    let mut skipped = 0usize;
    let mut classified = 0usize;

    for (incident, _) in &incidents {
        // Invalid records cannot be classified; they are reported by
        // `iris validate`, not silently given a default tier here.
        let Ok(result) = engine.classify(incident) else {
            skipped += 1;
            continue;
        };
        classified += 1;

        let tier_idx = tiers.iter().position(|t| *t == result.severity).unwrap_or(0);
        by_severity[tier_idx] += 1;
        if result.report_required {
            reportable += 1;
        }
        for outcome in &result.breakdown {
            if outcome.triggers_report {
                let idx = Criterion::ALL
                    .iter()
                    .position(|c| *c == outcome.criterion)
                    .unwrap_or(0);
                triggers[idx] += 1;
            }
        }
    }

    let summary = Summary {
        incidents: classified,
        skipped_invalid: skipped,
        reportable,
        by_severity: tiers.iter().copied().zip(by_severity).collect(),
        triggers_by_criterion: Criterion::ALL.iter().copied().zip(triggers).collect(),
    };

    match global.output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer
                .write_record(["severity", "count"])
                .into_diagnostic()?;
            for (tier, count) in &summary.by_severity {
                writer
                    .write_record([tier.to_string(), count.to_string()])
                    .into_diagnostic()?;
            }
            writer
                .write_record(["reportable".to_string(), summary.reportable.to_string()])
                .into_diagnostic()?;
            writer.flush().into_diagnostic()?;
        }
        _ => {
            if classified == 0 && skipped == 0 {
                println!("No incidents found.");
                return Ok(());
            }

            println!(
                "{} incident(s) classified against the current rule set",
                classified
            );
            if skipped > 0 {
                println!(
                    "{} invalid record(s) skipped - see `iris validate`",
                    style(skipped).yellow()
                );
            }
            println!();

            let rows: Vec<Vec<String>> = summary
                .by_severity
                .iter()
                .map(|(tier, count)| {
                    vec![paint_severity(*tier).to_string(), count.to_string()]
                })
                .collect();
            println!("{}", table::render(TIER_COLUMNS, &rows));

            println!();
            println!(
                "Requiring external report: {}",
                if reportable > 0 {
                    style(reportable).red().bold().to_string()
                } else {
                    reportable.to_string()
                }
            );

            let trigger_rows: Vec<Vec<String>> = summary
                .triggers_by_criterion
                .iter()
                .filter(|(_, count)| *count > 0)
                .map(|(criterion, count)| vec![criterion.to_string(), count.to_string()])
                .collect();
            if !trigger_rows.is_empty() {
                println!();
                println!("{}", table::render(CRITERION_COLUMNS, &trigger_rows));
            }
        }
    }

    Ok(())
}
