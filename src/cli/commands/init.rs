//! `iris init` command - create a new project

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::{Config, Project, RuleSet};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

pub fn run(args: InitArgs, _global: &GlobalOpts) -> Result<()> {
    let project = Project::init(&args.path).into_diagnostic()?;

    // Project config seeded with the current author.
    let user = Config::load_user();
    let config = Config {
        author: Some(user.author()),
        ..Config::default()
    };
    let config_yaml = serde_yml::to_string(&config).into_diagnostic()?;
    fs::write(project.config_path(), config_yaml).into_diagnostic()?;

    // Write the default rule set out in full so every cutoff is visible,
    // reviewable configuration rather than a constant buried in the binary.
    let rules_yaml = serde_yml::to_string(&RuleSet::default()).into_diagnostic()?;
    fs::write(project.rules_path(), rules_yaml).into_diagnostic()?;

    // Session-local state stays out of version control.
    fs::write(
        project.root().join(".gitignore"),
        ".iris/shortids.json\n",
    )
    .into_diagnostic()?;

    println!(
        "{} Initialized iris project in {}",
        style("✓").green(),
        project.root().display()
    );
    println!("  Rule set written to {}", project.rules_path().display());
    Ok(())
}
