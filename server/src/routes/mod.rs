//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the Leptos SSR pages, the static site assets and a
//! couple of host endpoints under a single Axum router. Every render gets the
//! configured `ClientConfig` through Leptos context.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use axum::Router;
use axum::extract::FromRef;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use client::app::{App, shell};
use client::config::ClientConfig;
use client::routes::AppRoute;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list_with_exclusions};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

/// State shared by all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub client: ClientConfig,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

/// Full host router: root redirect, health check, SSR pages, static assets.
pub fn app(state: AppState) -> Router {
    // `/` is answered with a redirect before the app is rendered.
    let routes = generate_route_list_with_exclusions(App, Some(vec![client::routes::ROOT.to_owned()]));

    let page_context = {
        let client = state.client.clone();
        move || provide_context(client.clone())
    };
    let fallback_context = page_context.clone();
    let page_shell = {
        let opts = state.leptos_options.clone();
        move || shell(opts.clone())
    };

    Router::new()
        .route(client::routes::ROOT, get(redirect_to_page))
        .route("/healthz", get(healthz))
        .leptos_routes_with_context(&state, routes, page_context, page_shell)
        .fallback(file_and_error_handler_with_context::<AppState, _>(fallback_context, shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Send paths the client never renders (currently only `/`) to their page.
async fn redirect_to_page(uri: Uri) -> Response {
    match AppRoute::resolve(uri.path()).redirect_target() {
        Some(target) => Redirect::temporary(target).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
