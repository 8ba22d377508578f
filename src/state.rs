use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(links)),
        }
    }
}
