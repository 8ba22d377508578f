//! Small HTTP response helpers shared by the API and web layers.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Builds a `302 Found` redirect to `location`.
///
/// Axum's [`axum::response::Redirect`] only offers 303/307/308; the redirect
/// and form flows here promise a plain 302.
pub fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
