use serde::Serialize;

/// Which step of the resolution produced the tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum ResolutionRule {
    /// Global and private disabled and nothing else to pick from
    NoTenantsAvailable,
    /// The requested tenant is one the user has
    RequestedTenant,
    /// The request named the private tenant by alias
    RequestedPrivate,
    /// The request named the global tenant by alias
    RequestedGlobal,
    /// An entry of the configured preferred list, by position
    PreferredTenant { position: usize },
    GlobalDefault,
    PrivateDefault,
    /// First shared tenant in backend order
    FirstAvailable,
}

impl ResolutionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoTenantsAvailable => "no_tenants_available",
            Self::RequestedTenant => "requested_tenant",
            Self::RequestedPrivate => "requested_private",
            Self::RequestedGlobal => "requested_global",
            Self::PreferredTenant { .. } => "preferred_tenant",
            Self::GlobalDefault => "global_default",
            Self::PrivateDefault => "private_default",
            Self::FirstAvailable => "first_available",
        }
    }
}

impl std::fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreferredTenant { position } => write!(f, "{}[{position}]", self.as_str()),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
