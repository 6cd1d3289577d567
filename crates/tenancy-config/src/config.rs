use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, MultitenancyConfig, ReadonlyModeConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use tenancy_core::TenantSettings;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub multitenancy: MultitenancyConfig,
    pub readonly_mode: ReadonlyModeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TENANCY_CONFIG_DIR env var, else use ./.tenancy/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TENANCY_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load a specific file, then apply environment overrides.
    pub fn load_from(path: &Path) -> ConfigErrorResult<Self> {
        let mut config = Self::load_toml(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TENANCY_CONFIG_DIR env var > ./.tenancy/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.multitenancy.validate()?;
        self.readonly_mode.validate()?;

        Ok(())
    }

    /// Settings for the tenant resolver, or `None` when multitenancy is off.
    pub fn tenant_settings(&self) -> Option<TenantSettings> {
        if !self.multitenancy.enabled {
            return None;
        }

        let tenants = &self.multitenancy.tenants;
        Some(TenantSettings {
            enable_global: tenants.enable_global,
            enable_private: tenants.enable_private,
            preferred: tenants.preferred.clone(),
            readonly_roles: self.readonly_mode.roles.clone(),
        })
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  multitenancy: {}",
            if self.multitenancy.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        let tenants = &self.multitenancy.tenants;
        info!(
            "  tenants: global={}, private={}, preferred=[{}]",
            tenants.enable_global,
            tenants.enable_private,
            tenants.preferred.join(", ")
        );
        info!(
            "  readonly_mode: roles=[{}]",
            self.readonly_mode.roles.join(", ")
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Multitenancy
        Self::apply_env_bool(
            "TENANCY_MULTITENANCY_ENABLED",
            &mut self.multitenancy.enabled,
        );
        Self::apply_env_bool(
            "TENANCY_ENABLE_GLOBAL",
            &mut self.multitenancy.tenants.enable_global,
        );
        Self::apply_env_bool(
            "TENANCY_ENABLE_PRIVATE",
            &mut self.multitenancy.tenants.enable_private,
        );
        Self::apply_env_list(
            "TENANCY_PREFERRED_TENANTS",
            &mut self.multitenancy.tenants.preferred,
        );

        // Read-only mode
        Self::apply_env_list("TENANCY_READONLY_ROLES", &mut self.readonly_mode.roles);

        // Logging
        Self::apply_env_parse("TENANCY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TENANCY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TENANCY_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for bool values
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists.
    /// An empty value clears the list.
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
