//! Route guard component wrapping protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session signal from context and turns each `route_gate::evaluate`
//! decision into a view. Redirects replace the current history entry so the
//! back button never returns to a page the visitor may not see. The guard
//! improves navigation only; the backend still authorizes every request.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::loading::LoadingPlaceholder;
use crate::state::auth::AuthState;
use crate::util::route_gate::{Destinations, GateDecision, RoleRequirement, RouteRequirement, evaluate};

/// Render `children` only when the session satisfies the route requirement.
///
/// `require_role` accepts a `Role`, a role tag, or a list of roles. Without it
/// any signed-in user passes. `require_onboarded` only redirects vendors; other
/// roles with incomplete onboarding still see the page.
#[component]
pub fn ProtectedRoute(
    #[prop(optional, into)] require_role: RoleRequirement,
    #[prop(optional)] require_onboarded: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let destinations = use_context::<Destinations>().unwrap_or_default();
    let requirement = RouteRequirement { role: require_role, onboarded: require_onboarded };

    // Memoized so session updates that keep the same outcome do not remount children.
    let decision = Memo::new(move |_| auth.with(|session| evaluate(session, &requirement)));

    move || match decision.get() {
        GateDecision::Pending => view! { <LoadingPlaceholder/> }.into_any(),
        GateDecision::Redirect(target) => {
            let path = destinations.path(target).to_owned();
            log::debug!("route gate redirect: {target:?} -> {path}");
            view! { <Redirect path=path options=replace_options()/> }.into_any()
        }
        GateDecision::Authorized => children().into_any(),
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
