//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. The Leptos app lives under `/app`; `/` only
//! redirects there.

pub mod recommendations;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}

/// JSON API routes.
pub fn api_routes(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_app))
        .route("/api", get(recommendations::index))
        .route(
            "/api/recommendations/skin-tone/{skin_tone}",
            get(recommendations::skin_tone_recommendations),
        )
        .route("/api/data", get(recommendations::catalog_data))
        .route("/healthz", get(healthz))
        .layer(cors_layer(cors_origin))
        .with_state(state)
}

async fn redirect_root_to_app() -> Redirect {
    Redirect::temporary("/app")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// API routes + Leptos SSR at `/app` + static assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState, cors_origin: Option<HeaderValue>) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, cors_origin)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
