use crate::{TENANT_HEADERS, TENANT_QUERY_PARAMS, TenantHints};

use log::trace;

/// Whether `tenant` names a tenant at all.
///
/// The empty string is valid and denotes the global tenant. Membership in
/// the user's available tenants is checked by the resolver, not here.
pub fn is_valid_tenant(tenant: Option<&str>) -> bool {
    tenant.is_some()
}

/// Extract the tenant the request asks for.
///
/// Query parameters win over headers, headers win over the tenant remembered
/// in the session cookie. Empty query or header values count as not supplied;
/// an empty cookie value is the stored global tenant and is kept.
pub fn requested_tenant<H: TenantHints + ?Sized>(
    hints: &H,
    cookie_tenant: Option<&str>,
) -> Option<String> {
    for name in TENANT_QUERY_PARAMS {
        if let Some(value) = hints.query_param(name).filter(|v| !v.is_empty()) {
            trace!("Requested tenant from query parameter '{name}'");
            return Some(value.to_string());
        }
    }

    for name in TENANT_HEADERS {
        if let Some(value) = hints.header(name).filter(|v| !v.is_empty()) {
            trace!("Requested tenant from header '{name}'");
            return Some(value.to_string());
        }
    }

    if is_valid_tenant(cookie_tenant) {
        trace!("Requested tenant from session cookie");
        return cookie_tenant.map(str::to_string);
    }

    None
}
