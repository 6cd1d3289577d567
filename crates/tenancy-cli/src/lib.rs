//! tenancy-cli library
//!
//! Command implementations, exported for the binary and for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod resolve_args;
pub mod resolve_command;
pub mod resolve_output;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliErrorResult};
pub use resolve_args::{ResolveArgs, parse_key_value};
pub use resolve_command::run_resolve;
pub use resolve_output::ResolveOutput;
