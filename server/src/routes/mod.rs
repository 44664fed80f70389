//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. The API is a thin proxy over the hosted
//! backend; every page route is rendered by the `client` crate.

pub mod account;
pub mod admin;
pub mod auth;
pub mod bookings;
pub mod cars;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{delete, get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes plus the health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origin.as_deref());

    let router = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/cars", get(cars::list_cars))
        .route("/api/cars/{id}", get(cars::get_car))
        .route("/api/bookings", get(bookings::list_my_bookings).post(bookings::create_booking))
        .route("/api/account", get(account::get_account).patch(account::update_account))
        .route("/api/admin/cars", post(admin::create_car))
        .route("/api/admin/cars/{id}", delete(admin::delete_car))
        .route("/api/admin/bookings", get(admin::list_bookings))
        .route("/api/admin/bookings/{id}", patch(admin::update_booking))
        .route("/healthz", get(healthz));
    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };
    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Credentialed CORS for one configured origin; `None` keeps the API same-origin only.
pub(crate) fn cors_layer(origin: Option<&str>) -> Option<CorsLayer> {
    let origin = origin?;
    let Ok(value) = HeaderValue::from_str(origin) else {
        tracing::warn!(%origin, "ignoring unparsable CORS_ORIGIN");
        return None;
    };
    Some(
        CorsLayer::new()
            .allow_origin(value)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// API routes + Leptos SSR pages + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
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

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
