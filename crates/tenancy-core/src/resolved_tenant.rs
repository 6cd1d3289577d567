use crate::{GLOBAL_TENANT_SYMBOL, PRIVATE_TENANT_SYMBOL};

use serde::{Serialize, Serializer};

/// The tenant a request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ResolvedTenant {
    /// A tenant the user was granted by name
    Named(String),
    /// The organization-wide global tenant
    Global,
    /// The user's own private tenant
    Private,
    /// No tenant applies; callers should deny or ask the user to pick one
    #[default]
    Unresolved,
}

impl ResolvedTenant {
    /// Form persisted in the session cookie. `None` means nothing to store.
    pub fn as_stored(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Global => Some(GLOBAL_TENANT_SYMBOL),
            Self::Private => Some(PRIVATE_TENANT_SYMBOL),
            Self::Unresolved => None,
        }
    }

    /// Inverse of [`ResolvedTenant::as_stored`].
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => Self::Unresolved,
            Some(GLOBAL_TENANT_SYMBOL) => Self::Global,
            Some(PRIVATE_TENANT_SYMBOL) => Self::Private,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Named(_) => "named",
            Self::Global => "global",
            Self::Private => "private",
            Self::Unresolved => "unresolved",
        }
    }
}

impl std::fmt::Display for ResolvedTenant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Global => write!(f, "Global"),
            Self::Private => write!(f, "Private"),
            Self::Unresolved => write!(f, "<unresolved>"),
        }
    }
}

impl Serialize for ResolvedTenant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_stored().serialize(serializer)
    }
}
