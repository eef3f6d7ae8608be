//! Top-level CLI definition

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands;

/// IRIS - record and classify workplace safety incidents
#[derive(Parser, Debug)]
#[command(name = "iris", version, about, propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options available on every subcommand
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output: OutputFormat,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Pick a sensible format per command
    #[default]
    Auto,
    /// Aligned table
    Table,
    /// YAML document
    Yaml,
    /// JSON document
    Json,
    /// Full IDs only, one per line
    Id,
    /// Short IDs only, one per line
    ShortId,
    /// CSV rows
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new iris project in the current directory
    Init(commands::init::InitArgs),

    /// Record a new incident
    New(commands::inc::NewArgs),

    /// List incidents with filtering
    List(commands::inc::ListArgs),

    /// Show an incident's details
    Show(commands::inc::ShowArgs),

    /// Edit an incident in your editor (re-submission)
    Edit(commands::inc::EditArgs),

    /// Delete an incident
    Delete(commands::inc::DeleteArgs),

    /// Classify an incident against the rule set
    Classify(commands::classify::ClassifyArgs),

    /// Validate incident files against the schema and invariants
    Validate(commands::validate::ValidateArgs),

    /// Aggregate tiers and report obligations across all incidents
    Summary(commands::summary::SummaryArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
