use serde::Serialize;
use tenancy_core::{Resolution, ResolutionRule, ResolvedTenant};

/// JSON printed by `tenancy resolve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutput {
    pub username: String,
    /// Stored form of the tenant: name, "" for global, "__user__" for private
    pub tenant: ResolvedTenant,
    pub kind: &'static str,
    pub multitenancy_enabled: bool,
    /// Rule that picked the tenant, flattened as `rule` (plus `position`)
    #[serde(flatten)]
    pub rule: Option<ResolutionRule>,
}

impl ResolveOutput {
    pub fn from_resolution(username: &str, resolution: Resolution, explain: bool) -> Self {
        Self {
            username: username.to_string(),
            kind: resolution.tenant.kind(),
            tenant: resolution.tenant,
            multitenancy_enabled: true,
            rule: explain.then_some(resolution.rule),
        }
    }

    /// Output when multitenancy is switched off: no tenant scoping applies.
    pub fn disabled(username: &str) -> Self {
        Self {
            username: username.to_string(),
            tenant: ResolvedTenant::Unresolved,
            kind: ResolvedTenant::Unresolved.kind(),
            multitenancy_enabled: false,
            rule: None,
        }
    }
}
