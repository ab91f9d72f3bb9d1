//! Public landing page: hero, feature highlights, and plan pricing.

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::components::plan_card::PlanCard;

const FEATURES: [(&str, &str); 3] = [
    ("One credit balance", "Every tool draws from the same monthly credit allowance."),
    ("Workflow automation", "Connect your services once and reuse credentials across workflows."),
    ("Earn as an affiliate", "Refer customers and request payouts from your dashboard."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let plans = LocalResource::new(|| crate::net::api::fetch_plans());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"All your tools, one subscription"</h1>
                <p class="hero__subtitle">"Pay once, use credits anywhere in the suite."</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/login">"Get started"</a>
                    <a class="btn" href="/vendor/login">"Sell on MTP"</a>
                </div>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="features__item">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="pricing">
                <h2>"Pricing"</h2>
                <Suspense fallback=|| view! { <LoadingPlaceholder label="Loading plans…"/> }>
                    {move || {
                        plans
                            .get()
                            .map(|res| match res {
                                Ok(list) => view! {
                                    <div class="pricing__grid">
                                        {list.into_iter().map(|plan| view! { <PlanCard plan=plan/> }).collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any(),
                                Err(_) => view! { <p>"Pricing is unavailable right now."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
