use super::*;

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_trims() {
    assert_eq!(validate_email("  a@b.com "), Ok("a@b.com".to_owned()));
}

#[test]
fn validate_email_requires_value() {
    assert_eq!(validate_email("   "), Err("Enter an email address."));
}

#[test]
fn validate_email_rejects_malformed() {
    for bad in ["ab.com", "@b.com", "a@b", "a@.com", "a@b.", "a@b@c.com", "a b@c.com"] {
        assert_eq!(validate_email(bad), Err("Enter a valid email address."), "{bad}");
    }
}

// =============================================================
// validate_password / validate_credentials
// =============================================================

#[test]
fn validate_password_length() {
    assert_eq!(validate_password("abc123"), Err("Password must be at least 8 characters."));
}

#[test]
fn validate_password_needs_letter_and_digit() {
    assert_eq!(validate_password("abcdefgh"), Err("Password must contain a letter and a digit."));
    assert_eq!(validate_password("12345678"), Err("Password must contain a letter and a digit."));
    assert_eq!(validate_password("abcd1234"), Ok(()));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter your password."));
    let creds = validate_credentials(" a@b.com ", "pw").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
}

// =============================================================
// validate_ticket
// =============================================================

#[test]
fn validate_ticket_requires_both_fields() {
    assert_eq!(validate_ticket(" ", "body"), Err("Enter both a subject and a message."));
    assert_eq!(validate_ticket("subject", ""), Err("Enter both a subject and a message."));
}

#[test]
fn validate_ticket_limits_subject() {
    let long = "x".repeat(MAX_TICKET_SUBJECT_LEN + 1);
    assert_eq!(validate_ticket(&long, "body"), Err("Subject must be 120 characters or fewer."));
    let exact = "x".repeat(MAX_TICKET_SUBJECT_LEN);
    assert!(validate_ticket(&exact, "body").is_ok());
}

#[test]
fn validate_ticket_trims_fields() {
    let ticket = validate_ticket("  Help  ", "  Broken  ").unwrap();
    assert_eq!(ticket.subject, "Help");
    assert_eq!(ticket.body, "Broken");
}

// =============================================================
// parse_dollars / validate_payout_amount
// =============================================================

#[test]
fn parse_dollars_accepts_common_forms() {
    assert_eq!(parse_dollars("12"), Ok(1_200));
    assert_eq!(parse_dollars("12.5"), Ok(1_250));
    assert_eq!(parse_dollars("$1,250.05"), Ok(125_005));
}

#[test]
fn parse_dollars_rejects_garbage() {
    for bad in ["", "abc", "1.234", "-5", ".50", "1.2.3"] {
        assert!(parse_dollars(bad).is_err(), "{bad}");
    }
}

#[test]
fn validate_payout_amount_enforces_minimum() {
    assert_eq!(validate_payout_amount(999, 50_000), Err("Minimum payout is $10.00."));
    assert_eq!(validate_payout_amount(MIN_PAYOUT_CENTS, 50_000), Ok(MIN_PAYOUT_CENTS));
}

#[test]
fn validate_payout_amount_caps_at_available() {
    assert_eq!(validate_payout_amount(5_000, 4_999), Err("Amount exceeds your available balance."));
}

// =============================================================
// validate_vendor_onboarding
// =============================================================

#[test]
fn validate_vendor_onboarding_accepts_complete_form() {
    let form = validate_vendor_onboarding(" Acme ", "https://acme.test", "pay@acme.test").unwrap();
    assert_eq!(form.business_name, "Acme");
    assert_eq!(form.website, "https://acme.test");
    assert_eq!(form.payout_email, "pay@acme.test");
}

#[test]
fn validate_vendor_onboarding_rejects_bad_website() {
    assert_eq!(
        validate_vendor_onboarding("Acme", "acme.test", "pay@acme.test"),
        Err("Enter a website starting with https://.")
    );
    assert_eq!(
        validate_vendor_onboarding("Acme", "https://", "pay@acme.test"),
        Err("Enter a website starting with https://.")
    );
}

#[test]
fn validate_vendor_onboarding_requires_name() {
    assert_eq!(
        validate_vendor_onboarding("", "https://acme.test", "pay@acme.test"),
        Err("Enter your business name.")
    );
}

// =============================================================
// validate_workflow_credential
// =============================================================

#[test]
fn validate_workflow_credential_accepts_object() {
    let cred = validate_workflow_credential(" Slack ", "httpHeaderAuth", r#"{"name":"Authorization","value":"Bearer x"}"#)
        .unwrap();
    assert_eq!(cred.name, "Slack");
    assert_eq!(cred.kind, "httpHeaderAuth");
    assert_eq!(cred.data["name"], "Authorization");
}

#[test]
fn validate_workflow_credential_rejects_unknown_kind() {
    assert_eq!(
        validate_workflow_credential("Slack", "ftp", r#"{"a":1}"#),
        Err("Choose a credential type.")
    );
}

#[test]
fn validate_workflow_credential_requires_json_object() {
    assert_eq!(
        validate_workflow_credential("Slack", "httpBasicAuth", "not json"),
        Err("Credential data must be valid JSON.")
    );
    assert_eq!(
        validate_workflow_credential("Slack", "httpBasicAuth", "[1,2]"),
        Err("Credential data must be a JSON object with at least one field.")
    );
    assert_eq!(
        validate_workflow_credential("Slack", "httpBasicAuth", "{}"),
        Err("Credential data must be a JSON object with at least one field.")
    );
}

#[test]
fn validate_workflow_credential_requires_name() {
    assert_eq!(validate_workflow_credential(" ", "oAuth2Api", r#"{"a":1}"#), Err("Enter a credential name."));
}
