//! Multi-tenancy resolution.
//!
//! Decides which single tenant a request operates against, given the
//! authenticated user, the tenants the auth backend says they may access,
//! an optional tenant hint from the request or session, and the
//! administrator's multitenancy policy.

pub mod auth_info;
pub mod available_tenants;
pub mod error;
pub mod readonly;
pub mod request_hints;
pub mod requested_tenant;
pub mod resolution;
pub mod resolution_rule;
pub mod resolved_tenant;
pub mod resolver;
pub mod tenant_policy;
pub mod tenant_settings;

pub use auth_info::AuthInfo;
pub use available_tenants::AvailableTenants;
pub use error::{CoreError, Result};
pub use readonly::is_readonly;
pub use request_hints::{RequestHints, TenantHints};
pub use requested_tenant::{is_valid_tenant, requested_tenant};
pub use resolution::Resolution;
pub use resolution_rule::ResolutionRule;
pub use resolved_tenant::ResolvedTenant;
pub use resolver::{resolve, resolve_explained, resolve_request};
pub use tenant_policy::TenantPolicy;
pub use tenant_settings::TenantSettings;

/// Reserved key the auth backend uses for the organization-wide default tenant.
pub const GLOBAL_TENANT_NAME: &str = "global_tenant";
/// Stored form of the global tenant.
pub const GLOBAL_TENANT_SYMBOL: &str = "";
/// Stored form of the caller's private tenant.
pub const PRIVATE_TENANT_SYMBOL: &str = "__user__";

pub const GLOBAL_TENANT_ALIASES: [&str; 2] = ["global", GLOBAL_TENANT_SYMBOL];
pub const PRIVATE_TENANT_ALIASES: [&str; 2] = [PRIVATE_TENANT_SYMBOL, "private"];

/// Role that is always treated as read-only, in addition to configured ones.
pub const DEFAULT_READONLY_ROLES: [&str; 1] = ["kibana_read_only"];

/// Query parameters carrying a tenant hint, highest precedence first.
pub const TENANT_QUERY_PARAMS: [&str; 3] = ["securityTenant_", "securitytenant", "security_tenant"];
/// Headers carrying a tenant hint, highest precedence first.
pub const TENANT_HEADERS: [&str; 2] = ["securitytenant", "securityTenant_"];

#[cfg(test)]
mod tests;
