use crate::{CliError, CliErrorResult, ResolveArgs, ResolveOutput};

use log::{debug, info};
use tenancy_config::Config;
use tenancy_core::{AuthInfo, AvailableTenants, RequestHints, resolve_request};

/// Run `tenancy resolve` against an already loaded configuration.
pub fn run_resolve(args: &ResolveArgs, config: &Config) -> CliErrorResult<ResolveOutput> {
    let auth_info = match &args.auth_info {
        Some(path) => {
            let json =
                std::fs::read_to_string(path).map_err(|e| CliError::io(path.clone(), e))?;
            Some(AuthInfo::from_json(&json)?)
        }
        None => None,
    };

    let username = match (&args.username, &auth_info) {
        (Some(username), Some(info)) if *username != info.user_name => {
            return Err(CliError::invalid_arguments(format!(
                "--username '{username}' does not match authinfo user '{}'",
                info.user_name
            )));
        }
        (Some(username), _) => username.clone(),
        (None, Some(info)) => info.user_name.clone(),
        (None, None) => {
            return Err(CliError::invalid_arguments(
                "--username is required without --auth-info",
            ));
        }
    };

    let Some(settings) = config.tenant_settings() else {
        info!("Multitenancy disabled; no tenant applies to '{username}'");
        return Ok(ResolveOutput::disabled(&username));
    };

    let mut roles = args.roles.clone();
    let mut tenant_names = Vec::new();
    if let Some(info) = &auth_info {
        roles.extend(info.roles.iter().cloned());
        tenant_names.extend(info.tenants.keys().cloned());
    }
    tenant_names.extend(args.tenants.iter().cloned());

    let available = AvailableTenants::for_user(&username, tenant_names);
    debug!(
        "Resolving for '{username}': roles=[{}], {} available tenant(s)",
        roles.join(", "),
        available.len()
    );

    let hints = args
        .query
        .iter()
        .fold(RequestHints::new(), |hints, (name, value)| {
            hints.with_query(name, value)
        });
    let hints = args
        .headers
        .iter()
        .fold(hints, |hints, (name, value)| hints.with_header(name, value));

    let resolution = resolve_request(
        &username,
        &roles,
        &available,
        &hints,
        args.cookie_tenant.as_deref(),
        &settings,
    );

    Ok(ResolveOutput::from_resolution(
        &username,
        resolution,
        args.explain,
    ))
}
