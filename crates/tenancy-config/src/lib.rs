mod config;
mod error;
mod log_level;
mod logging_config;
mod multitenancy_config;
mod readonly_mode_config;
mod tenants_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use multitenancy_config::MultitenancyConfig;
pub use readonly_mode_config::ReadonlyModeConfig;
pub use tenants_config::TenantsConfig;

const CONFIG_DIR_ENV: &str = "TENANCY_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tenancy";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_MULTITENANCY_ENABLED: bool = false;
const DEFAULT_ENABLE_GLOBAL: bool = true;
const DEFAULT_ENABLE_PRIVATE: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
