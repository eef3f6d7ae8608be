//! Incident record commands - new/list/show/edit/delete
//!
//! `new` is the intake questionnaire: every impact answer is a flag, or the
//! whole form runs interactively with `--interactive`. Records are validated
//! before they are written; a record that violates an invariant never lands
//! on disk.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use console::style;
use dialoguer::{Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::helpers::{format_short_id_str, paint_severity, truncate_str};
use crate::cli::table::{self, ColumnDef};
use crate::cli::{GlobalOpts, OutputFormat, SeverityFilter, StatusFilter};
use crate::core::classify;
use crate::core::project::{Project, FILE_SUFFIX};
use crate::core::shortid::ShortIdIndex;
use crate::core::Config;
use crate::entities::incident::{HomesDamaged, Incident, ReleaseKind};
use crate::yaml::parse_yaml;

/// Column definitions for incident list output
const INC_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 16),
    ColumnDef::new("DATE", 10),
    ColumnDef::new("COMPANY", 24),
    ColumnDef::new("SEVERITY", 12),
    ColumnDef::new("REPORT", 6),
    ColumnDef::new("STATUS", 10),
    ColumnDef::new("DESCRIPTION", 32),
];

/// CLI-friendly homes-damaged enum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliHomesDamaged {
    None,
    Some,
    Many,
}

impl From<CliHomesDamaged> for HomesDamaged {
    fn from(cli: CliHomesDamaged) -> Self {
        match cli {
            CliHomesDamaged::None => HomesDamaged::None,
            CliHomesDamaged::Some => HomesDamaged::Some,
            CliHomesDamaged::Many => HomesDamaged::Many,
        }
    }
}

/// CLI-friendly release-kind enum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliReleaseKind {
    None,
    Spill,
    Fire,
    Explosion,
}

impl From<CliReleaseKind> for ReleaseKind {
    fn from(cli: CliReleaseKind) -> Self {
        match cli {
            CliReleaseKind::None => ReleaseKind::None,
            CliReleaseKind::Spill => ReleaseKind::Spill,
            CliReleaseKind::Fire => ReleaseKind::Fire,
            CliReleaseKind::Explosion => ReleaseKind::Explosion,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Operator or company name
    #[arg(long)]
    pub company: Option<String>,

    /// Incident date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Free-text description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Author override (defaults to config author)
    #[arg(long)]
    pub author: Option<String>,

    /// Number of deaths
    #[arg(long, default_value_t = 0)]
    pub deaths: u32,

    /// Persons injured on site and hospitalized >= 24h
    #[arg(long, default_value_t = 0)]
    pub injured_onsite: u32,

    /// Persons injured off site and hospitalized >= 24h
    #[arg(long, default_value_t = 0)]
    pub injured_offsite: u32,

    /// Dwellings outside the establishment damaged
    #[arg(long, value_enum, default_value = "none")]
    pub homes: CliHomesDamaged,

    /// Persons evacuated or confined
    #[arg(long, default_value_t = 0)]
    pub evacuated: u32,

    /// Evacuation duration in hours
    #[arg(long, default_value_t = 0.0)]
    pub evacuation_hours: f64,

    /// Persons with drinking water, electricity, gas, or telephone interrupted
    #[arg(long, default_value_t = 0)]
    pub disrupted: u32,

    /// Service interruption duration in hours
    #[arg(long, default_value_t = 0.0)]
    pub disruption_hours: f64,

    /// Protected habitat damaged (ha)
    #[arg(long, default_value_t = 0.0)]
    pub protected_area: f64,

    /// More widespread habitat damaged (ha)
    #[arg(long, default_value_t = 0.0)]
    pub extended_area: f64,

    /// River or canal affected (km)
    #[arg(long, default_value_t = 0.0)]
    pub river_km: f64,

    /// Lake or pond affected (ha)
    #[arg(long, default_value_t = 0.0)]
    pub lake_ha: f64,

    /// Delta affected (ha)
    #[arg(long, default_value_t = 0.0)]
    pub delta_ha: f64,

    /// Aquifer or underground water affected (ha)
    #[arg(long, default_value_t = 0.0)]
    pub aquifer_ha: f64,

    /// Damage cost within the establishment
    #[arg(long, default_value_t = 0.0)]
    pub onsite_cost: f64,

    /// Damage cost outside the establishment
    #[arg(long, default_value_t = 0.0)]
    pub offsite_cost: f64,

    /// Effects extend beyond the national border
    #[arg(long)]
    pub transboundary: bool,

    /// Nature of any substance release
    #[arg(long, value_enum, default_value = "none")]
    pub release_kind: CliReleaseKind,

    /// Substance name
    #[arg(long)]
    pub substance: Option<String>,

    /// Quantity released (kg)
    #[arg(long, default_value_t = 0.0)]
    pub quantity_kg: f64,

    /// Qualifying quantity for the substance (kg)
    #[arg(long)]
    pub qualifying_quantity_kg: Option<f64>,

    /// Tags (comma-separated)
    #[arg(long, short = 't')]
    pub tags: Option<String>,

    /// Skip opening editor
    #[arg(long)]
    pub no_edit: bool,

    /// Run the interactive intake questionnaire
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by stored severity
    #[arg(long, value_enum, default_value = "all")]
    pub severity: SeverityFilter,

    /// Filter by status
    #[arg(long, short = 's', value_enum, default_value = "all")]
    pub status: StatusFilter,

    /// Show only incidents whose stored classification requires reporting
    #[arg(long)]
    pub reportable: bool,

    /// Filter by company substring (case-insensitive)
    #[arg(long, short = 'c')]
    pub company: Option<String>,

    /// Filter by tag
    #[arg(long, short = 't')]
    pub tag: Option<String>,

    /// Filter by incident year
    #[arg(long)]
    pub year: Option<i32>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Incident ID or short ID (e.g., INC@1)
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Incident ID or short ID
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Incident ID or short ID
    pub id: String,

    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Load every incident in the project, sorted by ID (chronological)
pub(crate) fn load_all(project: &Project) -> Vec<(Incident, PathBuf)> {
    let mut incidents = Vec::new();
    let dir = project.incidents_dir();
    if !dir.exists() {
        return incidents;
    }
    for entry in walkdir::WalkDir::new(&dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().to_string_lossy().ends_with(FILE_SUFFIX))
    {
        if let Ok(content) = fs::read_to_string(entry.path()) {
            if let Ok(incident) = serde_yml::from_str::<Incident>(&content) {
                incidents.push((incident, entry.path().to_path_buf()));
            }
        }
    }
    incidents.sort_by_key(|(inc, _)| inc.id);
    incidents
}

/// Resolve a user-supplied ID to an incident file, loading the record
pub(crate) fn load_one(project: &Project, input: &str) -> Result<(Incident, PathBuf)> {
    let short_ids = ShortIdIndex::load(project);
    let full_id = short_ids
        .resolve(input)
        .ok_or_else(|| miette::miette!("Cannot resolve ID: {}", input))?;

    let path = project.incident_path(&full_id);
    if !path.exists() {
        return Err(miette::miette!("No incident found for ID: {}", input));
    }
    let content = fs::read_to_string(&path).into_diagnostic()?;
    let incident: Incident = parse_yaml(&content, &path.display().to_string())?;
    Ok((incident, path))
}

/// Write an incident record to its file
pub(crate) fn write_incident(incident: &Incident, path: &std::path::Path) -> Result<()> {
    let yaml = serde_yml::to_string(incident).into_diagnostic()?;
    fs::write(path, yaml).into_diagnostic()?;
    Ok(())
}

pub fn run_new(mut args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let config = Config::load(&project);
    let author = args.author.clone().unwrap_or_else(|| config.author());

    if args.interactive {
        questionnaire(&mut args)?;
    }

    let company = args
        .company
        .ok_or_else(|| miette::miette!("--company is required (or use --interactive)"))?;
    let date = args
        .date
        .ok_or_else(|| miette::miette!("--date is required (or use --interactive)"))?;

    let mut incident = Incident::new(company, date, author);
    incident.description = args.description.unwrap_or_default();
    incident.impacts.human.deaths = args.deaths;
    incident.impacts.human.injured_onsite = args.injured_onsite;
    incident.impacts.human.injured_offsite = args.injured_offsite;
    incident.impacts.homes_damaged = args.homes.into();
    incident.impacts.evacuation.people = args.evacuated;
    incident.impacts.evacuation.duration_hours = args.evacuation_hours;
    incident.impacts.service_disruption.people = args.disrupted;
    incident.impacts.service_disruption.duration_hours = args.disruption_hours;
    incident.impacts.environment.protected_area_ha = args.protected_area;
    incident.impacts.environment.extended_area_ha = args.extended_area;
    incident.impacts.environment.river_km = args.river_km;
    incident.impacts.environment.lake_ha = args.lake_ha;
    incident.impacts.environment.delta_ha = args.delta_ha;
    incident.impacts.environment.aquifer_ha = args.aquifer_ha;
    incident.impacts.financial.onsite_cost = args.onsite_cost;
    incident.impacts.financial.offsite_cost = args.offsite_cost;
    incident.impacts.transboundary = args.transboundary;
    incident.release.kind = args.release_kind.into();
    incident.release.substance = args.substance;
    incident.release.quantity_kg = args.quantity_kg;
    incident.release.qualifying_quantity_kg = args.qualifying_quantity_kg;

    if let Some(tags) = args.tags {
        incident.tags = tags.split(',').map(|s| s.trim().to_string()).collect();
    }

    // Invariant check before anything touches disk.
    classify::validate(&incident).map_err(|e| miette::miette!("Invalid incident: {}", e))?;

    let path = project.incident_path(&incident.id.to_string());
    write_incident(&incident, &path)?;

    if !args.no_edit {
        config.run_editor(&path).into_diagnostic()?;
    }

    match global.output {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": incident.id.to_string(),
                "company": incident.company,
                "path": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        }
        OutputFormat::Id => {
            println!("{}", incident.id);
        }
        _ => {
            println!(
                "Created incident {} at {}",
                style(&incident.id.to_string()).cyan(),
                path.display()
            );
        }
    }
    Ok(())
}

/// Interactive intake questionnaire
///
/// Walks the full impact form with dialoguer prompts. Flag values already
/// given on the command line become the prompt defaults.
fn questionnaire(args: &mut NewArgs) -> Result<()> {
    let theme = dialoguer::theme::ColorfulTheme::default();

    let company: String = Input::with_theme(&theme)
        .with_prompt("Company")
        .with_initial_text(args.company.clone().unwrap_or_default())
        .interact_text()
        .into_diagnostic()?;
    args.company = Some(company);

    let date: String = Input::with_theme(&theme)
        .with_prompt("Incident date (YYYY-MM-DD)")
        .validate_with(|input: &String| {
            NaiveDate::from_str(input)
                .map(|_| ())
                .map_err(|_| "expected YYYY-MM-DD")
        })
        .interact_text()
        .into_diagnostic()?;
    args.date = Some(NaiveDate::from_str(&date).into_diagnostic()?);

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;
    args.description = Some(description);

    args.deaths = prompt_u32(&theme, "Deaths")?;
    args.injured_onsite = prompt_u32(&theme, "Injured on site (hospitalized >= 24h)")?;
    args.injured_offsite = prompt_u32(&theme, "Injured off site (hospitalized >= 24h)")?;

    let homes = Select::with_theme(&theme)
        .with_prompt("Dwellings outside the establishment damaged")
        .items(&["none", "some (damaged and unusable)", "many"])
        .default(0)
        .interact()
        .into_diagnostic()?;
    args.homes = [
        CliHomesDamaged::None,
        CliHomesDamaged::Some,
        CliHomesDamaged::Many,
    ][homes];

    args.evacuated = prompt_u32(&theme, "Persons evacuated or confined")?;
    args.evacuation_hours = prompt_f64(&theme, "Evacuation duration (hours)")?;
    args.disrupted = prompt_u32(&theme, "Persons with utility services interrupted")?;
    args.disruption_hours = prompt_f64(&theme, "Service interruption duration (hours)")?;

    args.protected_area = prompt_f64(&theme, "Protected habitat damaged (ha)")?;
    args.extended_area = prompt_f64(&theme, "Widespread habitat damaged (ha)")?;
    args.river_km = prompt_f64(&theme, "River or canal affected (km)")?;
    args.lake_ha = prompt_f64(&theme, "Lake or pond affected (ha)")?;
    args.delta_ha = prompt_f64(&theme, "Delta affected (ha)")?;
    args.aquifer_ha = prompt_f64(&theme, "Aquifer affected (ha)")?;

    args.onsite_cost = prompt_f64(&theme, "Damage cost on site")?;
    args.offsite_cost = prompt_f64(&theme, "Damage cost off site")?;

    args.transboundary = Confirm::with_theme(&theme)
        .with_prompt("Effects beyond the national border?")
        .default(false)
        .interact()
        .into_diagnostic()?;

    let kind = Select::with_theme(&theme)
        .with_prompt("Substance release")
        .items(&["none", "spill", "fire", "explosion"])
        .default(0)
        .interact()
        .into_diagnostic()?;
    args.release_kind = [
        CliReleaseKind::None,
        CliReleaseKind::Spill,
        CliReleaseKind::Fire,
        CliReleaseKind::Explosion,
    ][kind];

    if !matches!(args.release_kind, CliReleaseKind::None) {
        let substance: String = Input::with_theme(&theme)
            .with_prompt("Substance name")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;
        if !substance.is_empty() {
            args.substance = Some(substance);
        }
        args.quantity_kg = prompt_f64(&theme, "Quantity released (kg)")?;
        let qualifying = prompt_f64(&theme, "Qualifying quantity (kg, 0 if unknown)")?;
        if qualifying > 0.0 {
            args.qualifying_quantity_kg = Some(qualifying);
        }
    }

    Ok(())
}

fn prompt_u32(theme: &dialoguer::theme::ColorfulTheme, prompt: &str) -> Result<u32> {
    Input::with_theme(theme)
        .with_prompt(prompt)
        .default(0u32)
        .interact_text()
        .into_diagnostic()
}

fn prompt_f64(theme: &dialoguer::theme::ColorfulTheme, prompt: &str) -> Result<f64> {
    Input::with_theme(theme)
        .with_prompt(prompt)
        .default(0.0f64)
        .interact_text()
        .into_diagnostic()
}

pub fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let mut short_ids = ShortIdIndex::load(&project);

    let incidents = load_all(&project);

    let filtered: Vec<&Incident> = incidents
        .iter()
        .map(|(inc, _)| inc)
        .filter(|inc| args.severity.matches(inc))
        .filter(|inc| args.status.matches(inc.status))
        .filter(|inc| !args.reportable || inc.is_reportable())
        .filter(|inc| {
            args.company
                .as_ref()
                .is_none_or(|needle| inc.company.to_lowercase().contains(&needle.to_lowercase()))
        })
        .filter(|inc| {
            args.tag
                .as_ref()
                .is_none_or(|tag| inc.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        })
        .filter(|inc| args.year.is_none_or(|y| inc.date.year() == y))
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    // Assign stable aliases for the listed records.
    for inc in &filtered {
        short_ids.assign(&inc.id);
    }
    short_ids.save(&project).into_diagnostic()?;

    let format = match global.output {
        OutputFormat::Auto => OutputFormat::Table,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&filtered).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&filtered).into_diagnostic()?;
            println!("{}", yaml);
        }
        OutputFormat::Id => {
            for inc in &filtered {
                println!("{}", inc.id);
            }
        }
        OutputFormat::ShortId => {
            for inc in &filtered {
                let short = short_ids
                    .get_short_id(&inc.id.to_string())
                    .unwrap_or_else(|| inc.id.to_string());
                println!("{}", short);
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer
                .write_record(["id", "date", "company", "severity", "report", "status"])
                .into_diagnostic()?;
            for inc in &filtered {
                let (severity, report) = stored_verdict(inc);
                writer
                    .write_record([
                        inc.id.to_string(),
                        inc.date.to_string(),
                        inc.company.clone(),
                        severity,
                        report,
                        inc.status.to_string(),
                    ])
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        _ => {
            if filtered.is_empty() {
                println!("No incidents found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = filtered
                .iter()
                .map(|inc| {
                    let short = short_ids
                        .get_short_id(&inc.id.to_string())
                        .unwrap_or_else(|| format_short_id_str(&inc.id.to_string()));
                    let (severity, report) = stored_verdict(inc);
                    vec![
                        short,
                        inc.date.to_string(),
                        inc.company.clone(),
                        severity,
                        report,
                        inc.status.to_string(),
                        truncate_str(&inc.description, 32),
                    ]
                })
                .collect();

            println!("{}", table::render(INC_COLUMNS, &rows));

            let reportable = filtered.iter().filter(|i| i.is_reportable()).count();
            if reportable > 0 {
                println!(
                    "\n{} incident(s) found, {} requiring external report",
                    filtered.len(),
                    style(reportable).red()
                );
            } else {
                println!("\n{} incident(s) found", filtered.len());
            }
        }
    }

    Ok(())
}

/// Severity and report columns from the stored classification, if any
fn stored_verdict(incident: &Incident) -> (String, String) {
    match &incident.classification {
        Some(c) => (
            c.severity.to_string(),
            if c.report_required { "yes" } else { "no" }.to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    }
}

pub fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let short_ids = ShortIdIndex::load(&project);
    let (incident, path) = load_one(&project, &args.id)?;

    match global.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&incident).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let content = fs::read_to_string(&path).into_diagnostic()?;
            print!("{}", content);
        }
        OutputFormat::Id => {
            println!("{}", incident.id);
        }
        _ => {
            let short = short_ids
                .get_short_id(&incident.id.to_string())
                .unwrap_or_else(|| incident.id.to_string());

            println!(
                "{} {}",
                style(&short).cyan(),
                style(&incident.company).bold()
            );
            println!();
            println!("  Date:        {}", incident.date);
            println!("  Author:      {}", incident.author);
            println!("  Status:      {}", incident.status);
            println!("  Revision:    {}", incident.revision);
            if !incident.tags.is_empty() {
                println!("  Tags:        {}", incident.tags.join(", "));
            }

            if !incident.description.is_empty() {
                println!();
                println!("  {}", style("Description:").dim());
                for line in incident.description.lines() {
                    println!("    {}", line);
                }
            }

            println!();
            println!("  {}", style("Impacts:").dim());
            let h = &incident.impacts.human;
            println!(
                "    Human:         {} dead, {} injured on site, {} injured off site",
                h.deaths, h.injured_onsite, h.injured_offsite
            );
            println!("    Homes:         {}", incident.impacts.homes_damaged);
            let e = &incident.impacts.evacuation;
            println!(
                "    Evacuation:    {} persons for {} h",
                e.people, e.duration_hours
            );
            let s = &incident.impacts.service_disruption;
            println!(
                "    Services:      {} persons for {} h",
                s.people, s.duration_hours
            );
            let env = &incident.impacts.environment;
            println!(
                "    Environment:   protected {} ha, widespread {} ha, river {} km, lake {} ha, delta {} ha, aquifer {} ha",
                env.protected_area_ha,
                env.extended_area_ha,
                env.river_km,
                env.lake_ha,
                env.delta_ha,
                env.aquifer_ha
            );
            let f = &incident.impacts.financial;
            println!(
                "    Financial:     {} on site, {} off site",
                f.onsite_cost, f.offsite_cost
            );
            println!(
                "    Transboundary: {}",
                if incident.impacts.transboundary {
                    "yes"
                } else {
                    "no"
                }
            );
            if incident.release.kind != ReleaseKind::None {
                println!(
                    "    Release:       {} of {} kg{}",
                    incident.release.kind,
                    incident.release.quantity_kg,
                    incident
                        .release
                        .substance
                        .as_deref()
                        .map(|s| format!(" ({})", s))
                        .unwrap_or_default()
                );
            }

            match &incident.classification {
                Some(c) => {
                    println!();
                    println!("  {}", style("Classification:").dim());
                    println!("    Severity:      {}", paint_severity(c.severity));
                    println!(
                        "    Report:        {}",
                        if c.report_required {
                            style("required within 24h").red().to_string()
                        } else {
                            "not required".to_string()
                        }
                    );
                    println!("    Justification: {}", c.justification);
                }
                None => {
                    println!();
                    println!(
                        "  {}",
                        style("Not yet classified - run `iris classify`").dim()
                    );
                }
            }
        }
    }

    Ok(())
}

pub fn run_edit(args: EditArgs, _global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let config = Config::load(&project);
    let (_, path) = load_one(&project, &args.id)?;

    let before = fs::read_to_string(&path).into_diagnostic()?;
    config.run_editor(&path).into_diagnostic()?;
    let after = fs::read_to_string(&path).into_diagnostic()?;

    if before == after {
        println!("No changes.");
        return Ok(());
    }

    // Re-submission: the edited file must still parse and hold the
    // invariants, the revision bumps, and any stored classification is
    // stale and dropped.
    let mut incident: Incident = parse_yaml(&after, &path.display().to_string())?;
    classify::validate(&incident)
        .map_err(|e| miette::miette!("Edited incident is invalid: {}", e))?;

    incident.revision += 1;
    incident.classification = None;
    write_incident(&incident, &path)?;

    println!(
        "Updated {} (revision {})",
        style(&incident.id.to_string()).cyan(),
        incident.revision
    );
    Ok(())
}

pub fn run_delete(args: DeleteArgs, _global: &GlobalOpts) -> Result<()> {
    let project = Project::discover().into_diagnostic()?;
    let (incident, path) = load_one(&project, &args.id)?;

    if !args.yes {
        let prompt = format!("Delete incident {} ({})?", incident.id, incident.company);
        if !crate::cli::helpers::confirm(&prompt) {
            println!("Aborted.");
            return Ok(());
        }
    }

    fs::remove_file(&path).into_diagnostic()?;
    println!("Deleted {}", style(&incident.id.to_string()).cyan());
    Ok(())
}
