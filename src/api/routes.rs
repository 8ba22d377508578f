//! API route configuration for the `/api` subtree.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, link_stats_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// REST API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET    /links`        - List all links
/// - `POST   /links`        - Create a link (custom or generated code)
/// - `GET    /links/{code}` - Stats for one link
/// - `DELETE /links/{code}` - Delete a link by code
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(link_stats_handler).delete(delete_link_handler),
        )
}
