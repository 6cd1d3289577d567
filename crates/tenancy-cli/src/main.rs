//! tenancy - multi-tenancy resolution CLI
//!
//! # Examples
//!
//! ```bash
//! # Which tenant does alice land in when asking for "ops"?
//! tenancy resolve --username alice --tenant alice --tenant ops --query securitytenant=ops
//!
//! # Same, using an authinfo document and showing the matching rule
//! tenancy resolve --auth-info authinfo.json --cookie-tenant __user__ --explain --pretty
//!
//! # Print the effective configuration
//! tenancy config --pretty
//! ```

use tenancy_cli::{Cli, CliError, CliErrorResult, Commands, logger, run_resolve};
use tenancy_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliErrorResult<String> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    config.validate()?;

    match cli.command {
        Commands::Resolve(args) => {
            let output = run_resolve(&args, &config)?;
            to_json(&output, cli.pretty)
        }
        Commands::Config => {
            config.log_summary();
            to_json(&config, cli.pretty)
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliErrorResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    output.map_err(CliError::from_json)
}
