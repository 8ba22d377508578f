use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-level error taxonomy.
///
/// Every handler returns `Result<_, AppError>`; the [`IntoResponse`]
/// implementation maps each variant to the wire format the API promises:
///
/// - `InvalidInput` → 400 with `{"error": "<code>"}`
/// - `Conflict` → 409, empty body
/// - `NotFound` → 404, empty body
/// - `Internal` / `Database` → 500 with `{"error": "internal_error"}`
///
/// Database unique-constraint violations are translated to `Conflict` in the
/// repository layer, so a duplicate short code surfaces as 409 even when two
/// requests race past the pre-insert existence check.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidInput {
        /// Machine-readable code returned in the JSON error body.
        code: &'static str,
        message: &'static str,
    },

    #[error("short code already exists")]
    Conflict,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Internal(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn invalid_input(code: &'static str, message: &'static str) -> Self {
        Self::InvalidInput { code, message }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput { code, .. } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": code }))).into_response()
            }
            AppError::Conflict => StatusCode::CONFLICT.into_response(),
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal(message) => {
                tracing::error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal_error" })),
                )
                    .into_response()
            }
            AppError::Database(e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal_error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Maps an SQLx error from an INSERT into the application taxonomy.
///
/// A unique violation on the `short` column is the authoritative duplicate
/// signal; everything else is a generic database failure.
pub fn map_insert_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::Conflict;
        }
    }

    AppError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::invalid_input("invalid_full_url", "bad url").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Conflict.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_input_displays_message() {
        let err = AppError::invalid_input("invalid_short_code", "code must be 6-8 characters");
        assert_eq!(err.to_string(), "code must be 6-8 characters");
    }

    #[test]
    fn test_row_not_found_is_database_error() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
