//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::site_header::SiteHeader;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminPage,
    affiliate::AffiliatePage,
    dashboard::DashboardPage,
    home::HomePage,
    login::{LoginPage, VendorLoginPage},
    support::SupportPage,
    vendor::VendorDashboardPage,
    vendor_onboarding::VendorOnboardingPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::install_session_loader;
use crate::util::route_gate::Destinations;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal and redirect destinations, starts the session
/// check, and registers every route. Gate destinations in `Destinations` must
/// stay in sync with the paths registered here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::loading());
    provide_context(auth);
    if use_context::<Destinations>().is_none() {
        provide_context(Destinations::default());
    }
    install_session_loader(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/mtp.css"/>
        <Title text="MTP"/>

        <Router>
            <SiteHeader/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("vendor"), StaticSegment("login")) view=VendorLoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("support")
                        view=|| view! { <ProtectedRoute><SupportPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("affiliate")
                        view=|| view! { <ProtectedRoute require_onboarded=true><AffiliatePage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("vendor"), StaticSegment("onboarding"))
                        view=|| view! { <ProtectedRoute require_role=Role::Vendor><VendorOnboardingPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("vendor")
                        view=|| {
                            view! {
                                <ProtectedRoute require_role=Role::Vendor require_onboarded=true>
                                    <VendorDashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| {
                            view! {
                                <ProtectedRoute require_role=[Role::Admin, Role::Vendor]>
                                    <AdminPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
