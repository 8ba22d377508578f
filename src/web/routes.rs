//! Web route configuration for the server-rendered pages.
//!
//! The id-based delete routes live in the top-level router because they share
//! their single-segment path with the redirect catch-all.

use crate::state::AppState;
use crate::web::handlers::{create_link_form_handler, index_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Server-rendered routes.
///
/// # Endpoints
///
/// - `GET  /`          - Management page listing all links
/// - `POST /shorturls` - Form-based link creation
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorturls", post(create_link_form_handler))
}
