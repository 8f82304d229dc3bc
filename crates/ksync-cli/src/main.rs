//! ksync CLI
//!
//! Manages the sync specs in the settings file and runs reconciliation.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::CreateArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let config = cli.config.as_deref();
    match cli.command {
        Some(cmd) => execute_command(config, cmd),
        None => {
            println!("{} keep local directories in sync with containers", "ksync".green().bold());
            println!();
            println!("Run {} for available commands.", "ksync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(config: Option<&std::path::Path>, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Create {
            local,
            remote,
            name,
            pod,
            selector,
            container,
            namespace,
            reload,
            local_read_only,
            remote_read_only,
            force,
        } => commands::run_create(
            config,
            CreateArgs {
                local,
                remote,
                name,
                pod,
                selector,
                container,
                namespace,
                reload,
                local_read_only,
                remote_read_only,
                force,
            },
        ),
        Commands::Delete { names } => commands::run_delete(config, &names),
        Commands::Get { json } => commands::run_get(config, json),
        Commands::Watch { interval, once } => commands::run_watch(config, interval, once),
    }
}
