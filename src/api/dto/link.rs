//! Request and response bodies for the `/api/links` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Wire representation of a link.
///
/// `lastClicked` is camelCase on the wire and `null` until the first
/// redirect.
#[derive(Debug, Serialize)]
pub struct LinkBody {
    pub id: i64,
    pub full: String,
    pub short: String,
    pub clicks: i64,
    #[serde(rename = "lastClicked")]
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<Link> for LinkBody {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            full: link.full_url,
            short: link.short,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
        }
    }
}

/// Body for `POST /api/links`.
///
/// `full` is an `Option` so a missing field can be reported as
/// `missing_full_url` rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub full: Option<String>,
    pub code: Option<String>,
}
