//! Role- and onboarding-aware route authorization.
//!
//! SYSTEM CONTEXT
//! ==============
//! `evaluate` is a pure function of the current session snapshot and a route's
//! declared requirement. The `ProtectedRoute` component re-runs it whenever the
//! session signal changes and turns the decision into a placeholder, a
//! history-replacing redirect, or the protected children.
//!
//! ORDER
//! =====
//! Checks run in a fixed priority order and the first failing check decides:
//! loading, authentication, role, onboarding. Later checks are never consulted
//! once an earlier one has produced an outcome.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use std::collections::BTreeSet;

use crate::net::types::{Role, User};
use crate::state::auth::AuthState;

/// Which roles a route admits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any authenticated user.
    #[default]
    Any,
    /// Exactly this role.
    One(Role),
    /// Any role in the set.
    Set(BTreeSet<Role>),
}

impl RoleRequirement {
    /// Whether `role` satisfies this requirement.
    #[must_use]
    pub fn admits(&self, role: &Role) -> bool {
        match self {
            Self::Any => true,
            Self::One(required) => required == role,
            Self::Set(allowed) => allowed.contains(role),
        }
    }

    /// Whether the vendor role is named anywhere in this requirement.
    ///
    /// Used to pick the sign-in destination after a role mismatch; the
    /// visitor's own role plays no part in that choice.
    #[must_use]
    pub fn names_vendor(&self) -> bool {
        match self {
            Self::Any => false,
            Self::One(required) => required.is_vendor(),
            Self::Set(allowed) => allowed.iter().any(Role::is_vendor),
        }
    }
}

impl From<Role> for RoleRequirement {
    fn from(role: Role) -> Self {
        Self::One(role)
    }
}

impl From<&str> for RoleRequirement {
    fn from(tag: &str) -> Self {
        Self::One(Role::from(tag))
    }
}

impl From<Vec<Role>> for RoleRequirement {
    fn from(roles: Vec<Role>) -> Self {
        Self::Set(roles.into_iter().collect())
    }
}

impl<const N: usize> From<[Role; N]> for RoleRequirement {
    fn from(roles: [Role; N]) -> Self {
        Self::Set(roles.into_iter().collect())
    }
}

/// Per-route requirements, fixed when the route is registered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    pub role: RoleRequirement,
    /// Enforce completed onboarding. Only vendors are redirected today.
    pub onboarded: bool,
}

impl RouteRequirement {
    #[must_use]
    pub fn new(role: impl Into<RoleRequirement>, onboarded: bool) -> Self {
        Self { role: role.into(), onboarded }
    }
}

/// Symbolic redirect destination, resolved to a path by [`Destinations`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedirectTarget {
    SignIn,
    VendorSignIn,
    VendorOnboarding,
}

/// Outcome of a single gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session is still loading; show a placeholder and do not redirect.
    Pending,
    /// Replace the current history entry with this destination.
    Redirect(RedirectTarget),
    /// Render the protected content unchanged.
    Authorized,
}

pub const DEFAULT_SIGN_IN_PATH: &str = "/login";
pub const DEFAULT_VENDOR_SIGN_IN_PATH: &str = "/vendor/login";
pub const DEFAULT_VENDOR_ONBOARDING_PATH: &str = "/vendor/onboarding";
pub const DEFAULT_HOME_PATH: &str = "/dashboard";
pub const DEFAULT_VENDOR_HOME_PATH: &str = "/vendor";
pub const DEFAULT_ADMIN_HOME_PATH: &str = "/admin";

/// Route paths for each redirect target and post-sign-in landing. Must match
/// the router's registered routes; provide a custom value as context to
/// override the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destinations {
    pub sign_in: String,
    pub vendor_sign_in: String,
    pub vendor_onboarding: String,
    pub home: String,
    pub vendor_home: String,
    pub admin_home: String,
}

impl Default for Destinations {
    fn default() -> Self {
        Self {
            sign_in: DEFAULT_SIGN_IN_PATH.to_owned(),
            vendor_sign_in: DEFAULT_VENDOR_SIGN_IN_PATH.to_owned(),
            vendor_onboarding: DEFAULT_VENDOR_ONBOARDING_PATH.to_owned(),
            home: DEFAULT_HOME_PATH.to_owned(),
            vendor_home: DEFAULT_VENDOR_HOME_PATH.to_owned(),
            admin_home: DEFAULT_ADMIN_HOME_PATH.to_owned(),
        }
    }
}

impl Destinations {
    #[must_use]
    pub fn path(&self, target: RedirectTarget) -> &str {
        match target {
            RedirectTarget::SignIn => &self.sign_in,
            RedirectTarget::VendorSignIn => &self.vendor_sign_in,
            RedirectTarget::VendorOnboarding => &self.vendor_onboarding,
        }
    }

    /// Where a freshly signed-in user should land.
    #[must_use]
    pub fn landing(&self, user: &User) -> &str {
        if user.role.is_vendor() {
            if user.onboarded { &self.vendor_home } else { &self.vendor_onboarding }
        } else if user.role == Role::Admin {
            &self.admin_home
        } else {
            &self.home
        }
    }
}

/// Decide what a protected route shows for the given session snapshot.
#[must_use]
pub fn evaluate(session: &AuthState, requirement: &RouteRequirement) -> GateDecision {
    if session.loading {
        return GateDecision::Pending;
    }
    let Some(user) = session.user.as_ref() else {
        return GateDecision::Redirect(RedirectTarget::SignIn);
    };
    if !requirement.role.admits(&user.role) {
        return GateDecision::Redirect(if requirement.role.names_vendor() {
            RedirectTarget::VendorSignIn
        } else {
            RedirectTarget::SignIn
        });
    }
    if requirement.onboarded && !user.onboarded {
        if let Some(target) = onboarding_redirect(user) {
            return GateDecision::Redirect(target);
        }
    }
    GateDecision::Authorized
}

// Non-vendor roles have no onboarding destination yet, so an incomplete
// onboarding falls through to the protected content for them.
fn onboarding_redirect(user: &User) -> Option<RedirectTarget> {
    user.role.is_vendor().then_some(RedirectTarget::VendorOnboarding)
}
