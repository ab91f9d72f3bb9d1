//! Account dashboard: credit balance, subscription, and recent credit activity.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::components::plan_card::PlanCard;
use crate::net::types::{CreditBalance, Subscription};
use crate::state::auth::AuthState;
use crate::util::format::{format_credits, format_date, format_subscription_status};

const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Remaining share of the monthly allowance as a whole percentage, clamped to
/// `0..=100`. `None` when the plan grants no allowance.
fn allowance_remaining_percent(balance: &CreditBalance) -> Option<u8> {
    if balance.monthly_allowance <= 0 {
        return None;
    }
    let pct = (balance.balance.max(0).saturating_mul(100) / balance.monthly_allowance).min(100);
    u8::try_from(pct).ok()
}

fn renewal_label(sub: &Subscription) -> String {
    match (sub.renews_at, sub.cancel_at_period_end) {
        (Some(ts), true) => format!("Ends {}", format_date(ts)),
        (Some(ts), false) => format!("Renews {}", format_date(ts)),
        (None, _) => String::new(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let credits = LocalResource::new(|| crate::net::api::fetch_credit_balance());
    let subscription = LocalResource::new(|| crate::net::api::fetch_subscription());
    let history = LocalResource::new(|| crate::net::api::fetch_credit_history());
    let notice = RwSignal::new(String::new());

    let on_cancel = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_subscription().await {
                Ok(()) => {
                    notice.set("Your subscription will end at the close of this billing period.".to_owned());
                    subscription.refetch();
                }
                Err(e) => notice.set(format!("Cancel failed: {e}")),
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", auth.with(AuthState::display_name))}</h1>
            </header>

            <section class="dashboard-page__credits">
                <h2>"Credits"</h2>
                <Suspense fallback=|| view! { <LoadingPlaceholder label="Loading credits…"/> }>
                    {move || {
                        credits
                            .get()
                            .map(|res| match res {
                                Ok(balance) => {
                                    let pct = allowance_remaining_percent(&balance);
                                    view! {
                                        <p class="dashboard-page__balance">{format_credits(balance.balance)}</p>
                                        {pct
                                            .map(|p| {
                                                view! {
                                                    <div class="meter">
                                                        <div class="meter__fill" style=format!("width: {p}%")></div>
                                                    </div>
                                                    <p class="meter__label">
                                                        {format!("{p}% of {} remaining", format_credits(balance.monthly_allowance))}
                                                    </p>
                                                }
                                            })}
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <p class="error">{format!("Could not load credits: {e}")}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__subscription">
                <h2>"Subscription"</h2>
                <Suspense fallback=|| view! { <LoadingPlaceholder label="Loading subscription…"/> }>
                    {move || {
                        subscription
                            .get()
                            .map(|res| match res {
                                Ok(Some(sub)) => {
                                    let status = format_subscription_status(sub.status);
                                    let renewal = renewal_label(&sub);
                                    let cancellable = !sub.cancel_at_period_end;
                                    view! {
                                        <PlanCard plan=sub.plan current=true/>
                                        <p class="dashboard-page__status">{status} " " {renewal}</p>
                                        <Show when=move || cancellable>
                                            <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel subscription"</button>
                                        </Show>
                                    }
                                        .into_any()
                                }
                                Ok(None) => view! {
                                    <p>"No active subscription. " <a href="/">"See plans"</a></p>
                                }
                                    .into_any(),
                                Err(e) => view! { <p class="error">{format!("Could not load subscription: {e}")}</p> }
                                    .into_any(),
                            })
                    }}
                </Suspense>
                <Show when=move || !notice.get().is_empty()>
                    <p class="notice">{move || notice.get()}</p>
                </Show>
            </section>

            <section class="dashboard-page__history">
                <h2>"Recent activity"</h2>
                <Suspense fallback=|| view! { <LoadingPlaceholder label="Loading activity…"/> }>
                    {move || {
                        history
                            .get()
                            .map(|res| match res {
                                Ok(list) if list.is_empty() => view! { <p>"No credit activity yet."</p> }.into_any(),
                                Ok(list) => view! {
                                    <table class="activity-table">
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .take(RECENT_ACTIVITY_LIMIT)
                                                .map(|tx| {
                                                    view! {
                                                        <tr>
                                                            <td>{format_date(tx.created_at)}</td>
                                                            <td>{tx.description}</td>
                                                            <td class="activity-table__amount">{format_credits(tx.amount)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any(),
                                Err(e) => view! { <p class="error">{format!("Could not load activity: {e}")}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
