use clap::Parser;
use eyre::Result;

mod cli;
mod commands;
mod input;
mod render;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Command::Screen(args) => commands::run_screen(args)?,
        cli::Command::Reference { weeks } => commands::run_reference(weeks),
        cli::Command::Standards { weeks } => commands::run_standards(weeks)?,
    }

    Ok(())
}
