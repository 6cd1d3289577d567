use crate::AvailableTenants;
use crate::tests::{USER, tenants};

#[test]
fn given_username_key_when_built_for_user_then_it_becomes_the_private_tenant() {
    // Given / When
    let available = tenants(&[USER, "teamX"]);

    // Then
    assert!(available.has_private());
    assert_eq!(available.owner(), USER);
    assert_eq!(available.shared().collect::<Vec<_>>(), vec!["teamX"]);
    assert!(available.contains(USER));
    assert!(available.contains("teamX"));
    assert_eq!(available.len(), 2);
}

#[test]
fn given_no_username_key_when_built_for_user_then_no_private_tenant() {
    let available = tenants(&["teamX", "teamY"]);

    assert!(!available.has_private());
    assert!(!available.contains(USER));
}

#[test]
fn given_shared_tenants_when_iterated_then_insertion_order_is_kept() {
    let available = tenants(&["zeta", "alpha", "mid"]);

    assert_eq!(
        available.shared().collect::<Vec<_>>(),
        vec!["zeta", "alpha", "mid"]
    );
}

#[test]
fn given_duplicate_names_when_built_then_stored_once() {
    let available = tenants(&["teamX", "teamX"]);

    assert_eq!(available.len(), 1);
}

#[test]
fn given_builder_when_private_and_shared_added_then_both_present() {
    let available = AvailableTenants::new("bob").with_private().with_shared("ops");

    assert!(available.contains("bob"));
    assert!(available.contains("ops"));
    assert_eq!(available.keys().collect::<Vec<_>>(), vec!["bob", "ops"]);
}

#[test]
fn given_owner_key_added_as_shared_when_built_then_routed_to_private_flag() {
    // Given / When
    let available = AvailableTenants::new(USER).with_shared("ops").with_shared(USER);

    // Then
    assert!(available.has_private_for(USER));
    assert_eq!(available.shared().collect::<Vec<_>>(), vec!["ops"]);
    assert_eq!(available.len(), 2);
}

#[test]
fn given_private_flag_when_checked_for_another_user_then_not_their_private_tenant() {
    let available = tenants(&[USER, "ops"]);

    assert!(available.has_private_for(USER));
    assert!(!available.has_private_for("bob"));
    assert!(!available.contains("bob"));
}

#[test]
fn given_nothing_when_default_then_empty() {
    let available = AvailableTenants::default();

    assert!(available.is_empty());
    assert!(!available.contains(""));
}
