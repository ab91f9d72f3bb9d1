//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR app, its static `/pkg` assets, the health probe and
//! the `/api/*` relay to `API_UPSTREAM` under a single Axum router, so the
//! browser talks to one origin only.

pub mod api_proxy;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::ServerError;
use crate::config::ServerConfig;

/// Routes that do not depend on the Leptos build output.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full router: health probe + API relay + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables),
/// or if the upstream HTTP client cannot be built.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.to_string_lossy().into_owned().into();
    }
    let routes = generate_route_list(mtp_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), routes = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || mtp_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    let http = api_proxy::upstream_client()?;
    if config.api_upstream.is_none() {
        tracing::warn!("API_UPSTREAM not set; /api requests will answer 503");
    }

    Ok(base_routes()
        .merge(api_proxy::api_routes(http, config.api_upstream.as_deref()))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
