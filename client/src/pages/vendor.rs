//! Vendor dashboard: credentials stored by the workflow-automation proxy.
//!
//! Secrets are write-only from the browser. The list shows metadata and the
//! proxy injects the secret into workflow runs server-side.

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::util::format::format_date;
use crate::util::validate::{WORKFLOW_CREDENTIAL_KINDS, validate_workflow_credential};

#[component]
pub fn VendorDashboardPage() -> impl IntoView {
    let credentials = LocalResource::new(|| crate::net::api::list_workflow_credentials());
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(WORKFLOW_CREDENTIAL_KINDS[0].to_owned());
    let data = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credential = match validate_workflow_credential(&name.get(), &kind.get(), &data.get()) {
            Ok(credential) => credential,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_workflow_credential(&credential).await {
                Ok(created) => {
                    info.set(format!("Saved credential \"{}\".", created.name));
                    name.set(String::new());
                    data.set(String::new());
                    credentials.refetch();
                }
                Err(e) => info.set(format!("Could not save credential: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credential;
    };

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_workflow_credential(&id).await {
                Ok(()) => credentials.refetch(),
                Err(e) => info.set(format!("Could not delete credential: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="vendor-page">
            <h1>"Vendor dashboard"</h1>

            <section class="vendor-page__credentials">
                <h2>"Workflow credentials"</h2>
                <Suspense fallback=|| view! { <LoadingPlaceholder label="Loading credentials…"/> }>
                    {move || {
                        credentials
                            .get()
                            .map(|res| match res {
                                Ok(list) if list.is_empty() => view! { <p>"No credentials stored yet."</p> }.into_any(),
                                Ok(list) => view! {
                                    <ul class="credential-list">
                                        {list
                                            .into_iter()
                                            .map(|c| {
                                                let id = c.id.clone();
                                                view! {
                                                    <li class="credential-list__item">
                                                        <span class="credential-list__name">{c.name}</span>
                                                        <span class="credential-list__kind">{c.kind}</span>
                                                        <span class="credential-list__date">{format_date(c.created_at)}</span>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete.run(id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any(),
                                Err(e) => view! { <p class="error">{format!("Could not load credentials: {e}")}</p> }
                                    .into_any(),
                            })
                    }}
                </Suspense>
            </section>

            <form class="credential-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || kind.get()
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    {WORKFLOW_CREDENTIAL_KINDS
                        .iter()
                        .map(|k| view! { <option value=*k>{*k}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <textarea
                    placeholder="{\"name\": \"Authorization\", \"value\": \"Bearer …\"}"
                    prop:value=move || data.get()
                    on:input=move |ev| data.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save credential"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="notice">{move || info.get()}</p>
            </Show>
        </div>
    }
}
