/// Effective multitenancy policy for a single resolution.
///
/// Built per request from [`crate::TenantSettings`] once the user's roles
/// are known, since read-only roles switch the private tenant off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantPolicy {
    pub global_enabled: bool,
    pub private_enabled: bool,
    /// Tenants to fall back to, in order, when the request names none the user has
    pub preferred: Vec<String>,
}

impl TenantPolicy {
    pub fn new(global_enabled: bool, private_enabled: bool) -> Self {
        Self {
            global_enabled,
            private_enabled,
            preferred: Vec::new(),
        }
    }

    pub fn with_preferred<I, S>(mut self, preferred: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred = preferred.into_iter().map(Into::into).collect();
        self
    }
}
