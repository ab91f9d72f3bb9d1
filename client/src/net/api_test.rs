use super::*;

#[test]
fn sign_in_endpoint_splits_vendor_accounts() {
    assert_eq!(sign_in_endpoint(false), "/api/auth/login");
    assert_eq!(sign_in_endpoint(true), "/api/auth/vendor/login");
}

#[test]
fn workflow_credential_endpoint_formats_expected_path() {
    assert_eq!(workflow_credential_endpoint("c42"), "/api/workflows/credentials/c42");
}

#[test]
fn status_error_passes_success_codes() {
    assert_eq!(status_error(200), None);
    assert_eq!(status_error(204), None);
}

#[test]
fn status_error_reports_failures() {
    assert_eq!(status_error(401), Some(ApiError::Status { status: 401 }));
    assert_eq!(status_error(500), Some(ApiError::Status { status: 500 }));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status { status: 429 }.to_string(), "request failed: 429");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn payout_request_body_shape() {
    let body = serde_json::to_value(PayoutRequest { amount_cents: 2500 }).unwrap();
    assert_eq!(body, serde_json::json!({ "amount_cents": 2500 }));
}
