//! Management page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the management page.
///
/// Renders `templates/index.html` with the creation form and a table of all
/// links.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub links: Vec<Link>,
}

/// Renders the management page listing all links.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(IndexTemplate { links })
}
