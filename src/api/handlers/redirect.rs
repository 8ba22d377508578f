//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::http::found;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Looks up the code, records the click (best-effort), and answers with a
/// `302 Found` pointing at the destination.
///
/// Static routes (`/healthz`, `/shorturls`, `/api/*`) take priority over this
/// capture in Axum's router, so the catch-all cannot shadow them.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.visit(&code).await?;

    debug!(code = %link.short, target = %link.full_url, "redirecting");

    Ok(found(&link.full_url))
}
