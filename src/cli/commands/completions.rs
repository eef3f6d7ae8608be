//! `iris completions` command - generate shell completions

use clap::CommandFactory;
use clap_complete::Shell;
use miette::Result;

use crate::cli::{Cli, GlobalOpts};

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs, _global: &GlobalOpts) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "iris", &mut std::io::stdout());
    Ok(())
}
