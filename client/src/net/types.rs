//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads so serde round-trips stay
//! lossless. Roles travel as plain string tags and are decoded into a closed
//! enum with an `Other` escape hatch for roles added server-side.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Permission class of an account.
///
/// The wire format is a lowercase string tag. Unknown tags decode into
/// [`Role::Other`] instead of failing, so a role introduced by the backend
/// does not break session loading in an older client.
///
/// Equality, ordering and hashing go through the wire tag, so
/// `Role::Other("vendor".into())` is the same role as `Role::Vendor`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Vendor,
    Admin,
    Other(String),
}

impl Role {
    /// The wire tag for this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Vendor => "vendor",
            Self::Admin => "admin",
            Self::Other(tag) => tag,
        }
    }

    #[must_use]
    pub fn is_vendor(&self) -> bool {
        self.as_str() == "vendor"
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Role {}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl std::hash::Hash for Role {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        match tag {
            "user" => Self::User,
            "vendor" => Self::Vendor,
            "admin" => Self::Admin,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "user" | "vendor" | "admin" => Self::from(tag.as_str()),
            _ => Self::Other(tag),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated account as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Permission class used by route gating.
    pub role: Role,
    /// Whether mandatory post-registration setup has been completed.
    #[serde(default)]
    pub onboarded: bool,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Sign-in request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Editable profile record from `/api/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Current credit balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBalance {
    pub balance: i64,
    /// Credits granted per billing period by the active plan.
    #[serde(default)]
    pub monthly_allowance: i64,
}

/// A single credit ledger entry. Negative amounts are spends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditTransaction {
    pub id: String,
    pub amount: i64,
    pub description: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// A purchasable subscription plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub monthly_credits: i64,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Billing state of a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
}

/// The caller's current subscription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: Plan,
    pub status: SubscriptionStatus,
    /// End of the current billing period, milliseconds since the Unix epoch.
    pub renews_at: Option<i64>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
}

/// Lifecycle of a support ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
    Closed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub status: TicketStatus,
    pub created_at: i64,
}

/// Body for opening a support ticket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTicket {
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Requested,
    Processing,
    Paid,
    Rejected,
}

/// An affiliate payout record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub amount_cents: i64,
    pub status: PayoutStatus,
    pub requested_at: i64,
}

/// Affiliate earnings summary returned alongside the payout list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutSummary {
    pub available_cents: i64,
    pub lifetime_cents: i64,
    #[serde(default)]
    pub payouts: Vec<Payout>,
}

/// Vendor onboarding submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VendorOnboarding {
    pub business_name: String,
    pub website: String,
    pub payout_email: String,
}

/// A credential stored by the workflow-automation proxy. The secret never
/// leaves the backend; only metadata is returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowCredential {
    pub id: String,
    pub name: String,
    /// Credential kind understood by the workflow engine (e.g. `"httpHeaderAuth"`).
    pub kind: String,
    pub created_at: i64,
}

/// Body for registering a workflow credential with the proxy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewWorkflowCredential {
    pub name: String,
    pub kind: String,
    pub data: serde_json::Value,
}
