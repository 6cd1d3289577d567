use tenancy_core::{
    AuthInfo, RequestHints, ResolutionRule, ResolvedTenant, TenantSettings, resolve_request,
};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

const AUTHINFO: &str = r#"{
    "user_name": "alice",
    "roles": ["analyst"],
    "tenants": {
        "alice": true,
        "global_tenant": true,
        "finance": false,
        "ops": true
    }
}"#;

fn authinfo() -> AuthInfo {
    AuthInfo::from_json(AUTHINFO).unwrap()
}

// =========================================================================
// End-to-end: authinfo + request + settings
// =========================================================================

#[test]
fn given_query_tenant_when_resolving_request_then_named_tenant_is_stored() {
    // Given
    let info = authinfo();
    let hints = RequestHints::new().with_query("security_tenant", "finance");

    // When
    let resolution = resolve_request(
        &info.user_name,
        &info.roles,
        &info.available_tenants(),
        &hints,
        Some("ops"),
        &TenantSettings::default(),
    );

    // Then
    assert_that!(resolution.tenant.as_stored(), some(eq("finance")));
    assert_that!(resolution.rule, eq(ResolutionRule::RequestedTenant));
}

#[test]
fn given_stored_private_tenant_when_next_request_arrives_then_private_again() {
    // Given
    let info = authinfo();
    let settings = TenantSettings::default();
    let first = resolve_request(
        &info.user_name,
        &info.roles,
        &info.available_tenants(),
        &RequestHints::new().with_header("securitytenant", "private"),
        None,
        &settings,
    );

    // When
    let second = resolve_request(
        &info.user_name,
        &info.roles,
        &info.available_tenants(),
        &RequestHints::new(),
        first.tenant.as_stored(),
        &settings,
    );

    // Then
    assert_that!(first.tenant.as_stored(), some(eq("__user__")));
    assert_that!(second.tenant.kind(), eq("private"));
    assert_that!(second.rule, eq(ResolutionRule::RequestedPrivate));
}

#[test]
fn given_preferred_tenant_configured_when_nothing_requested_then_preferred_wins() {
    let info = authinfo();
    let settings = TenantSettings {
        preferred: vec!["Ops".to_string(), "Global".to_string()],
        ..TenantSettings::default()
    };

    let resolution = resolve_request(
        &info.user_name,
        &info.roles,
        &info.available_tenants(),
        &RequestHints::new(),
        None,
        &settings,
    );

    assert_that!(resolution.tenant.as_stored(), some(eq("ops")));
    assert_that!(
        resolution.rule,
        eq(ResolutionRule::PreferredTenant { position: 0 })
    );
}

#[test]
fn given_global_and_private_disabled_when_nothing_requested_then_non_default_tenant() {
    let info = authinfo();
    let settings = TenantSettings {
        enable_global: false,
        enable_private: false,
        ..TenantSettings::default()
    };

    let resolution = resolve_request(
        &info.user_name,
        &info.roles,
        &info.available_tenants(),
        &RequestHints::new(),
        None,
        &settings,
    );

    assert_that!(resolution.tenant.as_stored(), some(eq("finance")));
    assert_that!(resolution.rule, eq(ResolutionRule::FirstAvailable));
}

#[test]
fn given_user_with_private_tenant_only_and_policy_closed_when_resolving_then_unresolved() {
    let info = AuthInfo::from_json(r#"{ "user_name": "bob", "tenants": { "bob": true } }"#).unwrap();
    let settings = TenantSettings {
        enable_global: false,
        enable_private: false,
        ..TenantSettings::default()
    };

    let resolution = resolve_request(
        &info.user_name,
        &info.roles,
        &info.available_tenants(),
        &RequestHints::new().with_query("securitytenant", "bob"),
        None,
        &settings,
    );

    assert_that!(resolution.tenant.as_stored(), none());
    assert_eq!(resolution.tenant, ResolvedTenant::Unresolved);
}

#[test]
fn given_resolution_when_serialized_then_tenant_and_rule_are_flat() {
    let info = authinfo();
    let settings = TenantSettings {
        preferred: vec!["finance".to_string()],
        ..TenantSettings::default()
    };

    let resolution = resolve_request(
        &info.user_name,
        &info.roles,
        &info.available_tenants(),
        &RequestHints::new(),
        None,
        &settings,
    );
    let json = serde_json::to_value(&resolution).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "tenant": "finance", "rule": "preferred_tenant", "position": 0 })
    );
}
