use crate::{ConfigErrorResult, DEFAULT_MULTITENANCY_ENABLED, TenantsConfig};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MultitenancyConfig {
    pub enabled: bool,
    pub tenants: TenantsConfig,
}

impl Default for MultitenancyConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_MULTITENANCY_ENABLED,
            tenants: TenantsConfig::default(),
        }
    }
}

impl MultitenancyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.tenants.validate()
    }
}
