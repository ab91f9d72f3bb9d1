//! Pricing card for a subscription plan, shared by the landing page and the
//! dashboard.

use leptos::prelude::*;

use crate::net::types::Plan;
use crate::util::format::{format_cents, format_credits};

#[component]
pub fn PlanCard(plan: Plan, #[prop(optional)] current: bool) -> impl IntoView {
    let price = format!("{} / month", format_cents(plan.price_cents));
    let credits = format_credits(plan.monthly_credits);
    view! {
        <div class="plan-card" class:plan-card--current=current>
            <h3 class="plan-card__name">{plan.name}</h3>
            <p class="plan-card__price">{price}</p>
            <p class="plan-card__credits">{credits}</p>
            <ul class="plan-card__features">
                {plan.features.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}
            </ul>
            <Show when=move || current>
                <span class="plan-card__badge">"Current plan"</span>
            </Show>
        </div>
    }
}
