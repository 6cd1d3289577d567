use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Authenticated username (taken from --auth-info when omitted)
    #[arg(long)]
    pub username: Option<String>,

    /// Role held by the user (repeatable)
    #[arg(long = "role")]
    pub roles: Vec<String>,

    /// Tenant the user may access, in backend order (repeatable)
    #[arg(long = "tenant")]
    pub tenants: Vec<String>,

    /// Auth backend authinfo JSON document supplying user, roles and tenants
    #[arg(long)]
    pub auth_info: Option<PathBuf>,

    /// Query parameter as NAME=VALUE (repeatable)
    #[arg(long = "query", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,

    /// Request header as NAME=VALUE (repeatable)
    #[arg(long = "header", value_parser = parse_key_value)]
    pub headers: Vec<(String, String)>,

    /// Tenant stored in the session cookie by a previous request
    #[arg(long)]
    pub cookie_tenant: Option<String>,

    /// Include the rule that chose the tenant
    #[arg(long)]
    pub explain: bool,
}

/// Parse `NAME=VALUE`. The value may be empty, the name may not.
pub fn parse_key_value(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        Some(_) => Err(format!("missing name in '{input}'")),
        None => Err(format!("expected NAME=VALUE, got '{input}'")),
    }
}
