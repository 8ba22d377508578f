//! Top-level router combining web, health, redirect, and API routes.
//!
//! # Route Structure
//!
//! - `GET    /`                  - Management page (HTML)
//! - `POST   /shorturls`         - Form-based link creation
//! - `GET    /healthz`           - Liveness probe (plain text)
//! - `GET    /{prefix}/healthz`  - Per-link health probe (JSON)
//! - `GET    /{code}`            - Short link redirect
//! - `POST   /{id}`              - Delete by id (HTML form fallback)
//! - `DELETE /{id}`              - Delete by id
//! - `/api/*`                    - REST API (JSON)
//!
//! # Shadowing
//!
//! `/{code}` matches any single path segment. Axum resolves static segments
//! before captures, so `/healthz`, `/shorturls`, and `/api/*` always win over
//! the catch-all regardless of registration order; no declaration-order
//! discipline is needed.

use crate::api;
use crate::api::handlers::{health_handler, link_health_handler, redirect_handler};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::delete_link_form_handler;
use axum::{Router, routing::get};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and request tracing.
///
/// Integration tests use this directly; [`app_router`] adds the
/// trailing-slash normalization wrapper for the real server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/healthz", get(health_handler))
        .route("/{prefix}/healthz", get(link_health_handler))
        .route(
            "/{code}",
            get(redirect_handler)
                .post(delete_link_form_handler)
                .delete(delete_link_form_handler),
        )
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// The full application service: router plus trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
