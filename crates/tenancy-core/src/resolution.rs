use crate::{ResolutionRule, ResolvedTenant};

use serde::Serialize;

/// A resolved tenant together with the rule that chose it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub tenant: ResolvedTenant,
    #[serde(flatten)]
    pub rule: ResolutionRule,
}

impl Resolution {
    pub fn new(tenant: ResolvedTenant, rule: ResolutionRule) -> Self {
        Self { tenant, rule }
    }

    pub fn unresolved() -> Self {
        Self::new(ResolvedTenant::Unresolved, ResolutionRule::NoTenantsAvailable)
    }
}
