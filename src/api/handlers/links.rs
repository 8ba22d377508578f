//! Handlers for the `/api/links` endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, LinkBody};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Returns a JSON array of links in insertion order.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkBody>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkBody::from).collect()))
}

/// Creates a link from a JSON body.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "full": "https://example.com", "code": "mylink1" }
/// ```
///
/// `code` is optional; when omitted or empty, a random 7-character code is
/// generated.
///
/// # Errors
///
/// - 400 `{"error":"missing_full_url"}` when `full` is absent or empty
/// - 400 `{"error":"invalid_full_url"}` when `full` is not absolute http(s)
/// - 400 `{"error":"invalid_short_code"}` when `code` is not 6-8 alphanumerics
/// - 409 (no body) when `code` is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkBody>), AppError> {
    let full = match payload.full {
        Some(full) if !full.is_empty() => full,
        _ => {
            return Err(AppError::invalid_input(
                "missing_full_url",
                "request body must contain a full URL",
            ));
        }
    };

    // An empty code field means "generate one", same as omitting it.
    let code = payload.code.filter(|c| !c.is_empty());

    let link = state.link_service.create_link(full, code).await?;

    Ok((StatusCode::CREATED, Json(LinkBody::from(link))))
}

/// Returns stats for one short code.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn link_stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkBody>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(LinkBody::from(link)))
}

/// Deletes a link by its short code.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// Returns 204 No Content on success, 404 if the code doesn't exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_by_code(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
