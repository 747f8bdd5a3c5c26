#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use gicm::cli::{Cli, Commands};
use gicm::commands::{self, Context};
use gicm::config::Config;
use gicm::logging;
use gicm::project::Project;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let project = Project::detect()?;
    tracing::debug!(root = %project.root().display(), "project detected");

    // Config commands must work even when the catalog is broken
    if let Commands::Config { command } = &cli.command {
        commands::config::execute(&project, command, cli.registry.as_deref())?;
        return Ok(());
    }

    let config = Config::load(project.root())?
        .with_cli_overrides(cli.registry.as_deref(), cli.verbose);

    // Registry is built once here; a duplicate id aborts the run
    let ctx = Context::new(project, config)?;

    match &cli.command {
        Commands::List {
            kind,
            tag,
            category,
        } => commands::list::execute(&ctx, *kind, tag.as_deref(), category.as_deref())?,
        Commands::Show { item } => commands::show::execute(&ctx, item)?,
        Commands::Search { terms, limit } => commands::search::execute(&ctx, terms, *limit)?,
        Commands::Install { item } => commands::install::execute(&ctx, item)?,
        Commands::Stack { command } => commands::stack::execute(&ctx, command)?,
        Commands::Pages => commands::pages::execute(&ctx)?,
        Commands::Export { pretty } => commands::export::execute(&ctx, *pretty)?,
        Commands::Check { strict } => commands::check::execute(&ctx, *strict)?,
        Commands::Version => commands::version::execute(&ctx)?,
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
