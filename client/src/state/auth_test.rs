use super::*;
use crate::net::types::Role;

fn user(name: &str, role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: name.to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        onboarded: true,
        avatar_url: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn loading_state_is_not_authenticated() {
    let state = AuthState::loading();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_with_user_is_authenticated() {
    let state = AuthState::resolved(Some(user("Alice", Role::User)));
    assert!(state.is_authenticated());
    assert!(!state.is_vendor());
}

#[test]
fn is_vendor_reads_user_role() {
    assert!(AuthState::resolved(Some(user("Alice", Role::Vendor))).is_vendor());
    assert!(!AuthState::resolved(None).is_vendor());
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_prefers_name() {
    assert_eq!(AuthState::resolved(Some(user("Alice", Role::User))).display_name(), "Alice");
}

#[test]
fn display_name_falls_back_to_email() {
    assert_eq!(
        AuthState::resolved(Some(user("  ", Role::User))).display_name(),
        "alice@example.com"
    );
}

#[test]
fn display_name_empty_when_signed_out() {
    assert_eq!(AuthState::default().display_name(), "");
}
