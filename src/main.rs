use clap::Parser;
use iris::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => iris::cli::commands::init::run(args, &global),
        Commands::New(args) => iris::cli::commands::inc::run_new(args, &global),
        Commands::List(args) => iris::cli::commands::inc::run_list(args, &global),
        Commands::Show(args) => iris::cli::commands::inc::run_show(args, &global),
        Commands::Edit(args) => iris::cli::commands::inc::run_edit(args, &global),
        Commands::Delete(args) => iris::cli::commands::inc::run_delete(args, &global),
        Commands::Classify(args) => iris::cli::commands::classify::run(args, &global),
        Commands::Validate(args) => iris::cli::commands::validate::run(args, &global),
        Commands::Summary(args) => iris::cli::commands::summary::run(args, &global),
        Commands::Completions(args) => iris::cli::commands::completions::run(args, &global),
    }
}
