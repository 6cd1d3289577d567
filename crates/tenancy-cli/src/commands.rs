use crate::ResolveArgs;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the tenant for a user and request
    Resolve(ResolveArgs),
    /// Validate and print the effective configuration
    Config,
}
