use super::*;

// =============================================================
// Role wire format
// =============================================================

#[test]
fn role_decodes_known_tags() {
    let roles: Vec<Role> = serde_json::from_str(r#"["user","vendor","admin"]"#).unwrap();
    assert_eq!(roles, vec![Role::User, Role::Vendor, Role::Admin]);
}

#[test]
fn role_decodes_unknown_tag_as_other() {
    let role: Role = serde_json::from_str(r#""editor""#).unwrap();
    assert_eq!(role, Role::Other("editor".to_owned()));
    assert!(!role.is_vendor());
}

#[test]
fn role_encodes_as_plain_tag() {
    assert_eq!(serde_json::to_string(&Role::Vendor).unwrap(), r#""vendor""#);
    assert_eq!(
        serde_json::to_string(&Role::Other("editor".to_owned())).unwrap(),
        r#""editor""#
    );
}

#[test]
fn role_from_owned_string_matches_borrowed() {
    assert_eq!(Role::from("vendor".to_owned()), Role::from("vendor"));
    assert_eq!(Role::from("editor".to_owned()), Role::from("editor"));
}

#[test]
fn role_identity_follows_wire_tag() {
    let spelled_out = Role::Other("vendor".to_owned());
    assert_eq!(spelled_out, Role::Vendor);
    assert!(spelled_out.is_vendor());
    let set: std::collections::BTreeSet<Role> = [Role::Vendor, spelled_out].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn role_tags_are_case_sensitive() {
    assert_eq!(Role::from("Vendor"), Role::Other("Vendor".to_owned()));
}

// =============================================================
// User
// =============================================================

#[test]
fn user_onboarded_defaults_to_false() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Alice",
        "email": "alice@example.com",
        "role": "vendor",
    }))
    .unwrap();
    assert_eq!(user.role, Role::Vendor);
    assert!(!user.onboarded);
    assert_eq!(user.avatar_url, None);
}

#[test]
fn user_without_role_is_rejected() {
    let parsed = serde_json::from_value::<User>(serde_json::json!({
        "id": "u1",
        "name": "Alice",
        "email": "alice@example.com",
    }));
    assert!(parsed.is_err());
}

// =============================================================
// Other DTOs
// =============================================================

#[test]
fn profile_update_skips_absent_fields() {
    let update = ProfileUpdate { name: Some("Bob".to_owned()), ..ProfileUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "name": "Bob" }));
}

#[test]
fn subscription_status_uses_snake_case() {
    let status: SubscriptionStatus = serde_json::from_str(r#""past_due""#).unwrap();
    assert_eq!(status, SubscriptionStatus::PastDue);
}

#[test]
fn payout_summary_defaults_to_empty_list() {
    let summary: PayoutSummary =
        serde_json::from_str(r#"{"available_cents":1500,"lifetime_cents":9000}"#).unwrap();
    assert!(summary.payouts.is_empty());
}
