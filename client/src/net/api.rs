//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable`, since
//! these endpoints depend on the browser's session cookie.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so fetch failures
//! degrade page rendering without crashing hydration. Session loading goes
//! one step further and collapses every failure into "signed out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    CreditBalance, CreditTransaction, Credentials, NewTicket, NewWorkflowCredential, PayoutSummary, Plan, Profile,
    ProfileUpdate, Subscription, SupportTicket, User, VendorOnboarding, WorkflowCredential,
};

const ME_ENDPOINT: &str = "/api/auth/me";
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
const PROFILE_ENDPOINT: &str = "/api/profile";
const CREDITS_ENDPOINT: &str = "/api/credits";
const CREDIT_HISTORY_ENDPOINT: &str = "/api/credits/history";
const SUBSCRIPTION_ENDPOINT: &str = "/api/subscription";
const SUBSCRIPTION_CANCEL_ENDPOINT: &str = "/api/subscription/cancel";
const PLANS_ENDPOINT: &str = "/api/plans";
const TICKETS_ENDPOINT: &str = "/api/support/tickets";
const PAYOUTS_ENDPOINT: &str = "/api/affiliate/payouts";
const VENDOR_ONBOARDING_ENDPOINT: &str = "/api/vendor/onboarding";
const WORKFLOW_CREDENTIALS_ENDPOINT: &str = "/api/workflows/credentials";

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16 },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

fn sign_in_endpoint(vendor: bool) -> &'static str {
    if vendor { "/api/auth/vendor/login" } else { "/api/auth/login" }
}

fn workflow_credential_endpoint(id: &str) -> String {
    format!("{WORKFLOW_CREDENTIALS_ENDPOINT}/{id}")
}

/// Classify a non-success HTTP status, or `None` for 2xx.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Option<ApiError> {
    if (200..300).contains(&status) { None } else { Some(ApiError::Status { status }) }
}

#[derive(Serialize)]
struct PayoutRequest {
    amount_cents: i64,
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if let Some(err) = status_error(resp.status()) {
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let _ = path;
    Err(ApiError::Unavailable)
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    let builder = match method {
        Method::Post => gloo_net::http::Request::post(path),
        Method::Patch => gloo_net::http::Request::patch(path),
    };
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    let _ = (method, path, body);
    Err(ApiError::Unavailable)
}

/// Fire a request whose response body is ignored.
#[cfg(feature = "hydrate")]
async fn send_empty(method: EmptyMethod, path: &str) -> Result<(), ApiError> {
    let builder = match method {
        EmptyMethod::Post => gloo_net::http::Request::post(path),
        EmptyMethod::Delete => gloo_net::http::Request::delete(path),
    };
    let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    status_error(resp.status()).map_or(Ok(()), Err)
}

#[cfg(not(feature = "hydrate"))]
async fn send_empty(method: EmptyMethod, path: &str) -> Result<(), ApiError> {
    let _ = (method, path);
    Err(ApiError::Unavailable)
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Patch,
}

#[derive(Clone, Copy, Debug)]
enum EmptyMethod {
    Post,
    Delete,
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on a malformed body, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    match get_json::<User>(ME_ENDPOINT).await {
        Ok(user) => Some(user),
        Err(e) => {
            log::debug!("session check resolved signed out: {e}");
            None
        }
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    if let Err(e) = send_empty(EmptyMethod::Post, LOGOUT_ENDPOINT).await {
        log::warn!("logout failed: {e}");
    }
}

/// Sign in with email and password. Vendor accounts use a separate endpoint.
///
/// # Errors
///
/// Returns `ApiError::Status` for rejected credentials and transport errors otherwise.
pub async fn sign_in(credentials: &Credentials, vendor: bool) -> Result<User, ApiError> {
    send_json(Method::Post, sign_in_endpoint(vendor), credentials).await
}

// =============================================================================
// CREDITS
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_credit_balance() -> Result<CreditBalance, ApiError> {
    get_json(CREDITS_ENDPOINT).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_credit_history() -> Result<Vec<CreditTransaction>, ApiError> {
    get_json(CREDIT_HISTORY_ENDPOINT).await
}

// =============================================================================
// PROFILE
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    get_json(PROFILE_ENDPOINT).await
}

/// Apply a partial profile update and return the stored profile.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn update_profile(update: &ProfileUpdate) -> Result<Profile, ApiError> {
    send_json(Method::Patch, PROFILE_ENDPOINT, update).await
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Fetch the active subscription; `Ok(None)` when the account has none.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_subscription() -> Result<Option<Subscription>, ApiError> {
    match get_json::<Subscription>(SUBSCRIPTION_ENDPOINT).await {
        Ok(sub) => Ok(Some(sub)),
        Err(ApiError::Status { status: 404 }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_plans() -> Result<Vec<Plan>, ApiError> {
    get_json(PLANS_ENDPOINT).await
}

/// Cancel at the end of the current billing period.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn cancel_subscription() -> Result<(), ApiError> {
    send_empty(EmptyMethod::Post, SUBSCRIPTION_CANCEL_ENDPOINT).await
}

// =============================================================================
// SUPPORT
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn list_tickets() -> Result<Vec<SupportTicket>, ApiError> {
    get_json(TICKETS_ENDPOINT).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn create_ticket(ticket: &NewTicket) -> Result<SupportTicket, ApiError> {
    send_json(Method::Post, TICKETS_ENDPOINT, ticket).await
}

// =============================================================================
// AFFILIATE
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn list_payouts() -> Result<PayoutSummary, ApiError> {
    get_json(PAYOUTS_ENDPOINT).await
}

/// Request a payout of `amount_cents` from the available affiliate balance.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn request_payout(amount_cents: i64) -> Result<PayoutSummary, ApiError> {
    send_json(Method::Post, PAYOUTS_ENDPOINT, &PayoutRequest { amount_cents }).await
}

// =============================================================================
// VENDOR
// =============================================================================

/// Submit vendor onboarding. Returns the updated user so the session can be
/// refreshed with `onboarded = true`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn complete_vendor_onboarding(form: &VendorOnboarding) -> Result<User, ApiError> {
    send_json(Method::Post, VENDOR_ONBOARDING_ENDPOINT, form).await
}

// =============================================================================
// WORKFLOW CREDENTIAL PROXY
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn list_workflow_credentials() -> Result<Vec<WorkflowCredential>, ApiError> {
    get_json(WORKFLOW_CREDENTIALS_ENDPOINT).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn create_workflow_credential(credential: &NewWorkflowCredential) -> Result<WorkflowCredential, ApiError> {
    send_json(Method::Post, WORKFLOW_CREDENTIALS_ENDPOINT, credential).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_workflow_credential(id: &str) -> Result<(), ApiError> {
    send_empty(EmptyMethod::Delete, &workflow_credential_endpoint(id)).await
}
