//! Form handlers for creating and deleting links from the management page.
//!
//! These flows answer with plain-text error bodies and `302` redirects back
//! to `/`, matching what a browser form expects; the JSON error format is
//! reserved for the `/api` subtree.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::http::found;

/// Body of the creation form on the management page.
#[derive(Debug, Deserialize)]
pub struct ShortUrlForm {
    #[serde(rename = "fullUrl")]
    pub full_url: Option<String>,
    pub code: Option<String>,
}

/// Creates a link from the management page form.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// An empty `code` field means "generate one". On success the browser is
/// redirected back to `/`; on failure it gets a plain-text 400 or 409.
pub async fn create_link_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortUrlForm>,
) -> Response {
    let Some(full) = form.full_url.filter(|f| !f.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Invalid full URL").into_response();
    };

    // Presence is judged on the trimmed value, but the code itself is
    // validated as submitted, so whitespace padding is rejected rather than
    // silently stripped.
    let code = form.code.filter(|c| !c.trim().is_empty());

    match state.link_service.create_link(full, code).await {
        Ok(_) => found("/"),
        Err(AppError::InvalidInput { code, .. }) if code == "invalid_full_url" => {
            (StatusCode::BAD_REQUEST, "Invalid full URL").into_response()
        }
        Err(AppError::InvalidInput { .. }) => (
            StatusCode::BAD_REQUEST,
            "Invalid short code. Must be 6-8 alphanumeric characters.",
        )
            .into_response(),
        Err(AppError::Conflict) => (
            StatusCode::CONFLICT,
            "Short code already exists. Please choose a different one.",
        )
            .into_response(),
        Err(e) => {
            tracing::error!("form link creation failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

/// Deletes a link by id and returns to the management page.
///
/// # Endpoint
///
/// `DELETE /{id}` - used by forms with method override
/// `POST /{id}` - fallback for clients that cannot send DELETE
///
/// # Errors
///
/// Returns 404 Not Found if no link has that id.
pub async fn delete_link_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.link_service.delete_by_id(id).await?;

    Ok(found("/"))
}
