use crate::{TenantPolicy, is_readonly};

/// Administrator multitenancy settings, independent of any particular user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantSettings {
    pub enable_global: bool,
    pub enable_private: bool,
    pub preferred: Vec<String>,
    /// Roles that are read-only in addition to the built-in ones
    pub readonly_roles: Vec<String>,
}

impl Default for TenantSettings {
    fn default() -> Self {
        Self {
            enable_global: true,
            enable_private: true,
            preferred: Vec::new(),
            readonly_roles: Vec::new(),
        }
    }
}

impl TenantSettings {
    /// Policy for a user holding `roles`.
    pub fn policy_for<R: AsRef<str>>(&self, roles: &[R]) -> TenantPolicy {
        let readonly = is_readonly(roles, &self.readonly_roles);

        TenantPolicy {
            global_enabled: self.enable_global,
            private_enabled: self.enable_private && !readonly,
            preferred: self.preferred.clone(),
        }
    }
}
