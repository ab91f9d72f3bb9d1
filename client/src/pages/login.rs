//! Sign-in pages for regular users and vendors.
//!
//! Both pages share one form; the vendor variant posts to the vendor login
//! endpoint. Where the user lands afterwards comes from `Destinations`.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::route_gate::Destinations;
use crate::util::validate::validate_credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <SignInForm vendor=false/> }
}

#[component]
pub fn VendorLoginPage() -> impl IntoView {
    view! { <SignInForm vendor=true/> }
}

#[component]
fn SignInForm(vendor: bool) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let destinations = use_context::<Destinations>().unwrap_or_default();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let destinations = destinations.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&credentials, vendor).await {
                    Ok(user) => {
                        let target = destinations.landing(&user).to_owned();
                        crate::util::auth::set_session_user(auth, user);
                        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    let title = if vendor { "Vendor sign in" } else { "Sign in" };
    let (switch_href, switch_label) = if vendor {
        ("/login", "Not a vendor? Sign in here")
    } else {
        ("/vendor/login", "Vendor? Sign in here")
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MTP"</h1>
                <p class="login-card__subtitle">{title}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-switch" href=switch_href>{switch_label}</a>
            </div>
        </div>
    }
}
