//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides an `RwSignal<AuthState>` as context. The session loader in
//! `util::auth` fills it from `/api/auth/me`; route gates and user-aware
//! components only ever read snapshots of it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the first session check resolves.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// Settled state after a session check.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    #[must_use]
    pub fn is_vendor(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_vendor())
    }

    /// Name shown in page chrome; empty while signed out.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| if u.name.trim().is_empty() { u.email.clone() } else { u.name.clone() })
            .unwrap_or_default()
    }
}
