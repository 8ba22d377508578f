//! Health check handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::health::LinkHealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Process liveness probe.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Always answers `200 OK` with a plain-text body; no store access.
pub async fn health_handler() -> &'static str {
    "OK"
}

/// Per-link health probe.
///
/// # Endpoint
///
/// `GET /{prefix}/healthz`
///
/// Treats `prefix` as a short code and reports whether the service can
/// resolve it.
///
/// # Responses
///
/// - 200 with `{status, code, message, link: {short, full, clicks}, timestamp}`
/// - 404 with `{status: "not_found", code: 404, message}` for unknown codes
pub async fn link_health_handler(
    State(state): State<AppState>,
    Path(prefix): Path<String>,
) -> Result<(StatusCode, Json<LinkHealthResponse>), AppError> {
    match state.link_service.get_link(&prefix).await {
        Ok(link) => Ok((StatusCode::OK, Json(LinkHealthResponse::ok(&link)))),
        Err(AppError::NotFound) => {
            tracing::debug!(code = %prefix, "health probe for unknown link");
            Ok((
                StatusCode::NOT_FOUND,
                Json(LinkHealthResponse::not_found(&prefix)),
            ))
        }
        Err(e) => Err(e),
    }
}
