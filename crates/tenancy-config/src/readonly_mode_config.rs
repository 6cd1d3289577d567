use crate::{ConfigError, ConfigErrorResult};

use serde::{Deserialize, Serialize};

/// `readonly_mode` section. Holders of these roles never get a private tenant.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadonlyModeConfig {
    pub roles: Vec<String>,
}

impl ReadonlyModeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.roles.iter().any(|role| role.trim().is_empty()) {
            return Err(ConfigError::readonly_mode(
                "readonly_mode.roles cannot contain blank role names",
            ));
        }

        Ok(())
    }
}
