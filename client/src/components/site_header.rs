//! Top navigation bar with account links and sign-out.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let signed_in = move || auth.with(AuthState::is_authenticated);
    let is_vendor = move || auth.with(AuthState::is_vendor);
    let name = move || auth.with(AuthState::display_name);

    let on_sign_out = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::util::auth::sign_out(auth).await;
                navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
    });

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"MTP"</a>
            <nav class="site-header__nav">
                <Show when=signed_in>
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/support">"Support"</a>
                    <a href="/affiliate">"Affiliate"</a>
                    <Show when=is_vendor>
                        <a href="/vendor">"Vendor"</a>
                    </Show>
                </Show>
            </nav>
            <div class="site-header__account">
                <Show
                    when=signed_in
                    fallback=|| view! { <a class="btn" href="/login">"Sign in"</a> }
                >
                    <span class="site-header__name">{name}</span>
                    <button class="btn" on:click=move |_| on_sign_out.run(())>"Sign out"</button>
                </Show>
            </div>
        </header>
    }
}
