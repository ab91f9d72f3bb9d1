//! Affiliate earnings and payout requests.

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::util::format::{format_cents, format_date, format_payout_status};
use crate::util::validate::{parse_dollars, validate_payout_amount};

#[component]
pub fn AffiliatePage() -> impl IntoView {
    let summary = LocalResource::new(|| crate::net::api::list_payouts());
    let amount = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let available = match summary.get_untracked() {
            Some(Ok(s)) => s.available_cents,
            _ => {
                info.set("Earnings are still loading.".to_owned());
                return;
            }
        };
        let cents = match parse_dollars(&amount.get()).and_then(|c| validate_payout_amount(c, available)) {
            Ok(cents) => cents,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_payout(cents).await {
                Ok(_) => {
                    info.set(format!("Requested a payout of {}.", format_cents(cents)));
                    amount.set(String::new());
                    summary.refetch();
                }
                Err(e) => info.set(format!("Payout request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = cents;
    };

    view! {
        <div class="affiliate-page">
            <h1>"Affiliate program"</h1>
            <Suspense fallback=|| view! { <LoadingPlaceholder label="Loading earnings…"/> }>
                {move || {
                    summary
                        .get()
                        .map(|res| match res {
                            Ok(s) => view! {
                                <div class="affiliate-page__totals">
                                    <p>"Available: " {format_cents(s.available_cents)}</p>
                                    <p>"Lifetime: " {format_cents(s.lifetime_cents)}</p>
                                </div>
                                <table class="payout-table">
                                    <tbody>
                                        {s
                                            .payouts
                                            .into_iter()
                                            .map(|p| {
                                                view! {
                                                    <tr>
                                                        <td>{format_date(p.requested_at)}</td>
                                                        <td>{format_cents(p.amount_cents)}</td>
                                                        <td>{format_payout_status(p.status)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                            Err(e) => view! { <p class="error">{format!("Could not load earnings: {e}")}</p> }.into_any(),
                        })
                }}
            </Suspense>

            <form class="payout-form" on:submit=on_submit>
                <input
                    class="payout-form__amount"
                    type="text"
                    inputmode="decimal"
                    placeholder="25.00"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Request payout"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="notice">{move || info.get()}</p>
            </Show>
        </div>
    }
}
