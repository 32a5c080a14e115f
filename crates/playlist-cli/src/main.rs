mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::Settings;

fn main() -> anyhow::Result<ExitCode> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C); the device may be partially synced");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();
    logging::init(cli.verbose).context("Failed to initialise logging")?;

    let settings = Settings::resolve(&cli)?;

    match &cli.command {
        Commands::Add { playlist, patterns } => {
            commands::Add::execute(playlist, patterns, &settings)
                .context("Failed to execute add command")?;
        }
        Commands::Check { playlist } => {
            let complete = commands::Check::execute(playlist, &settings)
                .context("Failed to execute check command")?;
            if !complete {
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Size { playlist } => {
            commands::Size::execute(playlist, &settings)
                .context("Failed to execute size command")?;
        }
        Commands::Sync {
            playlist,
            device_path,
            dry_run,
            on_error,
        } => {
            commands::Sync::execute(
                playlist,
                device_path,
                *dry_run,
                on_error.map(Into::into),
                &settings,
            )
            .context("Failed to execute sync command")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
