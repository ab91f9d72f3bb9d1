//! Neutral loading indicator shown while the session check is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder(#[prop(default = "Loading…")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading-placeholder" role="status" aria-live="polite">
            <span class="loading-placeholder__spinner" aria-hidden="true"></span>
            <span class="loading-placeholder__label">{label}</span>
        </div>
    }
}
