use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENABLE_GLOBAL, DEFAULT_ENABLE_PRIVATE};

use serde::{Deserialize, Serialize};

/// `multitenancy.tenants` section
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TenantsConfig {
    pub enable_global: bool,
    pub enable_private: bool,
    /// Fallback tenants, in order. Matched case-insensitively; `""` is the
    /// global tenant, like `global`.
    pub preferred: Vec<String>,
}

impl Default for TenantsConfig {
    fn default() -> Self {
        Self {
            enable_global: DEFAULT_ENABLE_GLOBAL,
            enable_private: DEFAULT_ENABLE_PRIVATE,
            preferred: Vec::new(),
        }
    }
}

impl TenantsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let whitespace_only = |t: &String| !t.is_empty() && t.trim().is_empty();
        if let Some(position) = self.preferred.iter().position(whitespace_only) {
            return Err(ConfigError::multitenancy(format!(
                "multitenancy.tenants.preferred[{position}] cannot be whitespace only (use \"global\" or \"\" for the global tenant)"
            )));
        }

        Ok(())
    }
}
