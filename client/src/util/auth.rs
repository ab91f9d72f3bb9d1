//! Shared auth session helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal is owned by `App`; these helpers are the only writers.
//! Route gates read it and never mutate it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;

/// Kick off the initial session check. Browser-only; during SSR the signal
/// stays in its loading state so the server renders placeholders.
pub fn install_session_loader(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(refresh_session(auth));
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// Re-read the session from the backend. Any user already present stays in
/// the signal while loading but is not consulted by route gates.
pub async fn refresh_session(auth: RwSignal<AuthState>) {
    auth.update(|state| state.loading = true);
    let user = crate::net::api::fetch_current_user().await;
    auth.set(AuthState::resolved(user));
}

/// Replace the session user after a successful sign-in or profile change.
pub fn set_session_user(auth: RwSignal<AuthState>, user: User) {
    auth.set(AuthState::resolved(Some(user)));
}

/// End the backend session and clear the local user.
pub async fn sign_out(auth: RwSignal<AuthState>) {
    crate::net::api::logout().await;
    auth.set(AuthState::resolved(None));
}
