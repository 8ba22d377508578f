//! Response bodies for the per-link health endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Body for `GET /{prefix}/healthz`.
///
/// The not-found variant carries only `status`, `code`, and `message`;
/// the ok variant adds the link summary and a current timestamp.
#[derive(Debug, Serialize)]
pub struct LinkHealthResponse {
    pub status: &'static str,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Minimal link view embedded in a healthy probe response.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub short: String,
    pub full: String,
    pub clicks: i64,
}

impl LinkHealthResponse {
    pub fn ok(link: &Link) -> Self {
        Self {
            status: "ok",
            code: 200,
            message: "Service is running and link exists".to_string(),
            link: Some(LinkSummary {
                short: link.short.clone(),
                full: link.full_url.clone(),
                clicks: link.clicks,
            }),
            timestamp: Some(Utc::now()),
        }
    }

    pub fn not_found(code: &str) -> Self {
        Self {
            status: "not_found",
            code: 404,
            message: format!("Link with code '{code}' not found"),
            link: None,
            timestamp: None,
        }
    }
}
