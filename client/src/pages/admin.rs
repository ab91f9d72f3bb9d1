//! Staff landing page. Registered for admins and vendors.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = move || auth.with(|s| s.user.as_ref().map(|u| u.role.to_string()).unwrap_or_default());

    view! {
        <div class="admin-page">
            <h1>"Staff tools"</h1>
            <p>"Signed in as " {move || auth.with(AuthState::display_name)} " (" {role} ")"</p>
            <ul>
                <li><a href="/support">"Support queue"</a></li>
                <li><a href="/affiliate">"Affiliate payouts"</a></li>
            </ul>
        </div>
    }
}
