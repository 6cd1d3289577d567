use crate::{AvailableTenants, CoreError, Result as CoreErrorResult};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The auth backend's description of an authenticated user.
///
/// `tenants` maps tenant name to a write flag; only the keys matter for
/// resolution. Key order follows the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    pub user_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub tenants: IndexMap<String, bool>,
}

impl AuthInfo {
    /// Decode and validate an authinfo JSON document
    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        let info: Self = match serde_json::from_str(json) {
            Ok(info) => info,
            Err(e) => return Err(CoreError::auth_info_decode(e)),
        };
        info.validate()?;
        Ok(info)
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.user_name.trim().is_empty() {
            return Err(CoreError::invalid_auth_info(
                "user_name",
                "user_name cannot be empty",
            ));
        }

        Ok(())
    }

    pub fn available_tenants(&self) -> AvailableTenants {
        AvailableTenants::for_user(&self.user_name, self.tenants.keys().cloned())
    }
}
