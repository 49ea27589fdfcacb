//! argconv CLI
//!
//! Command-line front end for the argconv coercion resolver: converts raw
//! text to registered types and shows how resolution is configured.

mod cli;
mod commands;
mod error;
mod logging;
mod types;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref()),
        None => {
            println!("{} String-to-type conversion", "argconv".green().bold());
            println!();
            println!("Run {} for available commands.", "argconv --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: Option<&std::path::Path>) -> Result<()> {
    let registry = types::cli_registry();
    let mut out = std::io::stdout().lock();

    match cmd {
        Commands::Convert {
            type_name,
            value,
            name,
            json,
        } => {
            let converter = commands::load_converter(config)?;
            commands::run_convert(&mut out, &converter, &registry, &type_name, &value, &name, json)
        }
        Commands::Types => commands::run_types(&mut out, &registry),
        Commands::Strategies => {
            let converter = commands::load_converter(config)?;
            commands::run_strategies(&mut out, &converter)
        }
    }
}
