//! Support tickets: list existing tickets and open new ones.

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::util::format::{format_date, format_ticket_status, truncate};
use crate::util::validate::validate_ticket;

const TICKET_PREVIEW_CHARS: usize = 140;

#[component]
pub fn SupportPage() -> impl IntoView {
    let tickets = LocalResource::new(|| crate::net::api::list_tickets());
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let ticket = match validate_ticket(&subject.get(), &body.get()) {
            Ok(ticket) => ticket,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_ticket(&ticket).await {
                Ok(created) => {
                    info.set(format!("Ticket #{} opened.", created.id));
                    subject.set(String::new());
                    body.set(String::new());
                    tickets.refetch();
                }
                Err(e) => info.set(format!("Could not open ticket: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    view! {
        <div class="support-page">
            <h1>"Support"</h1>

            <form class="support-form" on:submit=on_submit>
                <input
                    class="support-form__subject"
                    type="text"
                    placeholder="Subject"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
                <textarea
                    class="support-form__body"
                    placeholder="How can we help?"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Open ticket"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="notice">{move || info.get()}</p>
            </Show>

            <Suspense fallback=|| view! { <LoadingPlaceholder label="Loading tickets…"/> }>
                {move || {
                    tickets
                        .get()
                        .map(|res| match res {
                            Ok(list) if list.is_empty() => view! { <p>"You have no support tickets."</p> }.into_any(),
                            Ok(list) => view! {
                                <ul class="ticket-list">
                                    {list
                                        .into_iter()
                                        .map(|t| {
                                            view! {
                                                <li class="ticket-list__item">
                                                    <span class="ticket-list__subject">{t.subject}</span>
                                                    <span class="ticket-list__status">{format_ticket_status(t.status)}</span>
                                                    <span class="ticket-list__date">{format_date(t.created_at)}</span>
                                                    <p class="ticket-list__preview">{truncate(&t.body, TICKET_PREVIEW_CHARS)}</p>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any(),
                            Err(e) => view! { <p class="error">{format!("Could not load tickets: {e}")}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
