mod available_tenants;

use crate::{AvailableTenants, TenantPolicy};

pub(crate) const USER: &str = "u1";

/// Available tenants for [`USER`], listed in the order given
pub(crate) fn tenants(names: &[&str]) -> AvailableTenants {
    AvailableTenants::for_user(USER, names.iter().copied())
}

pub(crate) fn policy(global_enabled: bool, private_enabled: bool) -> TenantPolicy {
    TenantPolicy::new(global_enabled, private_enabled)
}
