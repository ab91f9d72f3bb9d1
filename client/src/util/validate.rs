//! Form input validation.
//!
//! Each validator trims its input and returns either the cleaned value or a
//! message suitable for showing next to the form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{Credentials, NewTicket, NewWorkflowCredential, VendorOnboarding};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TICKET_SUBJECT_LEN: usize = 120;
pub const MIN_PAYOUT_CENTS: i64 = 1_000;

/// Credential kinds the workflow proxy accepts.
pub const WORKFLOW_CREDENTIAL_KINDS: [&str; 3] = ["httpHeaderAuth", "httpBasicAuth", "oAuth2Api"];

/// Validate and trim an email address.
///
/// # Errors
///
/// Returns a user-facing message when the address is empty or malformed.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter an email address.");
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Enter a valid email address.");
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// Require at least [`MIN_PASSWORD_LEN`] characters with a letter and a digit.
///
/// # Errors
///
/// Returns a user-facing message describing the first unmet rule.
pub fn validate_password(raw: &str) -> Result<(), &'static str> {
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if !raw.chars().any(char::is_alphabetic) || !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a letter and a digit.");
    }
    Ok(())
}

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns a user-facing message when either field is invalid.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(Credentials { email, password: password.to_owned() })
}

/// Validate a new support ticket.
///
/// # Errors
///
/// Returns a user-facing message when the subject or body is missing, or the
/// subject is too long.
pub fn validate_ticket(subject: &str, body: &str) -> Result<NewTicket, &'static str> {
    let subject = subject.trim();
    let body = body.trim();
    if subject.is_empty() || body.is_empty() {
        return Err("Enter both a subject and a message.");
    }
    if subject.chars().count() > MAX_TICKET_SUBJECT_LEN {
        return Err("Subject must be 120 characters or fewer.");
    }
    Ok(NewTicket { subject: subject.to_owned(), body: body.to_owned() })
}

/// Parse a dollar amount such as `12`, `12.5`, or `$1,250.00` into cents.
///
/// # Errors
///
/// Returns a user-facing message for anything that is not a non-negative
/// amount with at most two decimal places.
pub fn parse_dollars(raw: &str) -> Result<i64, &'static str> {
    const INVALID: &str = "Enter an amount like 25.00.";
    let cleaned: String = raw.trim().trim_start_matches('$').chars().filter(|c| *c != ',').collect();
    let (whole, frac) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
    if whole.is_empty() || frac.len() > 2 {
        return Err(INVALID);
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(INVALID);
    }
    let dollars: i64 = whole.parse().map_err(|_| INVALID)?;
    let cents: i64 = format!("{frac:0<2}").parse().map_err(|_| INVALID)?;
    dollars.checked_mul(100).and_then(|d| d.checked_add(cents)).ok_or(INVALID)
}

/// Check a payout request against the minimum and the available balance.
///
/// # Errors
///
/// Returns a user-facing message when the amount is below the minimum or
/// exceeds `available_cents`.
pub fn validate_payout_amount(amount_cents: i64, available_cents: i64) -> Result<i64, &'static str> {
    if amount_cents < MIN_PAYOUT_CENTS {
        return Err("Minimum payout is $10.00.");
    }
    if amount_cents > available_cents {
        return Err("Amount exceeds your available balance.");
    }
    Ok(amount_cents)
}

/// Validate the vendor onboarding form.
///
/// # Errors
///
/// Returns a user-facing message for the first invalid field.
pub fn validate_vendor_onboarding(
    business_name: &str,
    website: &str,
    payout_email: &str,
) -> Result<VendorOnboarding, &'static str> {
    let business_name = business_name.trim();
    if business_name.is_empty() {
        return Err("Enter your business name.");
    }
    let website = website.trim();
    if !(website.starts_with("https://") || website.starts_with("http://")) || website.len() <= "https://".len() {
        return Err("Enter a website starting with https://.");
    }
    let payout_email = validate_email(payout_email)?;
    Ok(VendorOnboarding { business_name: business_name.to_owned(), website: website.to_owned(), payout_email })
}

/// Validate a workflow credential before handing it to the proxy. `data` must
/// be a non-empty JSON object.
///
/// # Errors
///
/// Returns a user-facing message for a missing name, an unknown kind, or
/// data that is not a non-empty JSON object.
pub fn validate_workflow_credential(name: &str, kind: &str, data: &str) -> Result<NewWorkflowCredential, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a credential name.");
    }
    if !WORKFLOW_CREDENTIAL_KINDS.contains(&kind) {
        return Err("Choose a credential type.");
    }
    let data: serde_json::Value = serde_json::from_str(data.trim()).map_err(|_| "Credential data must be valid JSON.")?;
    match data.as_object() {
        Some(fields) if !fields.is_empty() => {}
        _ => return Err("Credential data must be a JSON object with at least one field."),
    }
    Ok(NewWorkflowCredential { name: name.to_owned(), kind: kind.to_owned(), data })
}
