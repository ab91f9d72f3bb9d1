//! Vendor onboarding form.
//!
//! Registered behind a vendor-only gate that does not itself require
//! onboarding, otherwise incomplete vendors would loop back here forever.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::route_gate::Destinations;
use crate::util::validate::validate_vendor_onboarding;

#[component]
pub fn VendorOnboardingPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let destinations = use_context::<Destinations>().unwrap_or_default();

    let business_name = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let payout_email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_vendor_onboarding(&business_name.get(), &website.get(), &payout_email.get()) {
            Ok(form) => form,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let vendor_home = destinations.vendor_home.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::complete_vendor_onboarding(&form).await {
                    Ok(user) => {
                        crate::util::auth::set_session_user(auth, user);
                        navigate(&vendor_home, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        info.set(format!("Onboarding failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    view! {
        <div class="onboarding-page">
            <h1>"Set up your vendor account"</h1>
            <form class="onboarding-form" on:submit=on_submit>
                <label>
                    "Business name"
                    <input
                        type="text"
                        prop:value=move || business_name.get()
                        on:input=move |ev| business_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Website"
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || website.get()
                        on:input=move |ev| website.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Payout email"
                    <input
                        type="email"
                        prop:value=move || payout_email.get()
                        on:input=move |ev| payout_email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Finish setup"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="notice">{move || info.get()}</p>
            </Show>
        </div>
    }
}
