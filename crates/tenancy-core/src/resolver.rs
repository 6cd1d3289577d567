use crate::{
    AvailableTenants, GLOBAL_TENANT_ALIASES, GLOBAL_TENANT_NAME, PRIVATE_TENANT_ALIASES,
    Resolution, ResolutionRule, ResolvedTenant, TenantHints, TenantPolicy, TenantSettings,
    requested_tenant,
};

use log::debug;

/// Resolve the tenant for `username`.
///
/// Total: every input maps to a tenant or to [`ResolvedTenant::Unresolved`].
pub fn resolve(
    username: &str,
    requested: Option<&str>,
    available: &AvailableTenants,
    policy: &TenantPolicy,
) -> ResolvedTenant {
    resolve_explained(username, requested, available, policy).tenant
}

/// Same as [`resolve`], also reporting which rule matched.
pub fn resolve_explained(
    username: &str,
    requested: Option<&str>,
    available: &AvailableTenants,
    policy: &TenantPolicy,
) -> Resolution {
    let resolution = decide(username, requested, available, policy);
    debug!(
        "Resolved tenant for '{username}': {} via {}",
        resolution.tenant, resolution.rule
    );
    resolution
}

/// Resolve from a raw request: extract the hint, apply read-only roles, resolve.
pub fn resolve_request<H, R>(
    username: &str,
    roles: &[R],
    available: &AvailableTenants,
    hints: &H,
    cookie_tenant: Option<&str>,
    settings: &TenantSettings,
) -> Resolution
where
    H: TenantHints + ?Sized,
    R: AsRef<str>,
{
    let requested = requested_tenant(hints, cookie_tenant);
    let policy = settings.policy_for(roles);

    resolve_explained(username, requested.as_deref(), available, &policy)
}

fn decide(
    username: &str,
    requested: Option<&str>,
    available: &AvailableTenants,
    policy: &TenantPolicy,
) -> Resolution {
    let global_enabled = policy.global_enabled;
    let private_enabled = policy.private_enabled;
    let has_private = available.has_private_for(username);

    if !global_enabled && !private_enabled && others(username, available).next().is_none() {
        return Resolution::unresolved();
    }

    if let Some(requested) = requested {
        if available.contains(requested) {
            return Resolution::new(
                ResolvedTenant::Named(requested.to_string()),
                ResolutionRule::RequestedTenant,
            );
        }

        if private_enabled && has_private && PRIVATE_TENANT_ALIASES.contains(&requested) {
            return Resolution::new(ResolvedTenant::Private, ResolutionRule::RequestedPrivate);
        }

        if global_enabled && GLOBAL_TENANT_ALIASES.contains(&requested) {
            return Resolution::new(ResolvedTenant::Global, ResolutionRule::RequestedGlobal);
        }
    }

    for (position, entry) in policy.preferred.iter().enumerate() {
        let tenant = entry.to_lowercase();
        let rule = ResolutionRule::PreferredTenant { position };

        if global_enabled && GLOBAL_TENANT_ALIASES.contains(&tenant.as_str()) {
            return Resolution::new(ResolvedTenant::Global, rule);
        }

        if private_enabled && has_private && PRIVATE_TENANT_ALIASES.contains(&tenant.as_str()) {
            return Resolution::new(ResolvedTenant::Private, rule);
        }

        if available.contains(&tenant) {
            return Resolution::new(ResolvedTenant::Named(tenant), rule);
        }
    }

    if global_enabled {
        return Resolution::new(ResolvedTenant::Global, ResolutionRule::GlobalDefault);
    }

    if private_enabled {
        return Resolution::new(ResolvedTenant::Private, ResolutionRule::PrivateDefault);
    }

    match first_available(username, available) {
        Some(tenant) => Resolution::new(
            ResolvedTenant::Named(tenant.to_string()),
            ResolutionRule::FirstAvailable,
        ),
        None => Resolution::unresolved(),
    }
}

/// Tenants other than the user's private one, in backend order.
fn others<'a>(
    username: &'a str,
    available: &'a AvailableTenants,
) -> impl Iterator<Item = &'a str> + 'a {
    available.keys().filter(move |tenant| *tenant != username)
}

/// First remaining tenant in backend order. The reserved default tenant is
/// skipped unless it is the only candidate. Which tenant wins among several
/// is whatever order the backend listed them in; callers must not rely on it.
fn first_available<'a>(username: &'a str, available: &'a AvailableTenants) -> Option<&'a str> {
    let candidates: Vec<&str> = others(username, available).collect();

    if candidates.len() > 1 && candidates.contains(&GLOBAL_TENANT_NAME) {
        return candidates
            .into_iter()
            .find(|tenant| *tenant != GLOBAL_TENANT_NAME);
    }

    candidates.first().copied()
}
