//! Link creation, lookup, deletion, and click tracking.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::validation::{is_valid_code, is_valid_url};

/// Service for managing shortened links.
///
/// All handler-facing logic lives here: URL and code validation, code
/// generation with collision retry, and the conflict pre-check for custom
/// codes. Handlers only map the results to HTTP responses.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Creates a short link.
    ///
    /// # Code Resolution
    ///
    /// - If `custom_code` is provided, it must be 6-8 alphanumeric characters
    ///   and not already taken.
    /// - Otherwise a random code is generated, retrying up to 10 times on
    ///   collision.
    ///
    /// The existence check for custom codes is a fast path only; the unique
    /// constraint on `short` catches the race where two requests carrying the
    /// same code pass the check concurrently, and the repository reports that
    /// as [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] with code `invalid_full_url` or
    /// `invalid_short_code`, or [`AppError::Conflict`] if the code is taken.
    pub async fn create_link(
        &self,
        full_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if !is_valid_url(&full_url) {
            return Err(AppError::invalid_input(
                "invalid_full_url",
                "full URL must be an absolute http(s) URL",
            ));
        }

        let short = match custom_code {
            Some(custom) => {
                if !is_valid_code(&custom) {
                    return Err(AppError::invalid_input(
                        "invalid_short_code",
                        "short code must be 6-8 alphanumeric characters",
                    ));
                }

                if self.links.find_by_code(&custom).await?.is_some() {
                    return Err(AppError::Conflict);
                }

                custom
            }
            None => self.generate_unique_code().await?,
        };

        self.links.create(NewLink { short, full_url }).await
    }

    /// Returns every link in insertion order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.links.list_all().await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.links
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Resolves a short code for a redirect and records the click.
    ///
    /// Click recording is best-effort: a failed update is logged and the
    /// visitor is still redirected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn visit(&self, code: &str) -> Result<Link, AppError> {
        let link = self.get_link(code).await?;

        if let Err(e) = self.links.record_click(link.id).await {
            tracing::warn!(code = %link.short, "failed to record click: {e}");
        }

        Ok(link)
    }

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.links
            .delete_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Deletes a link by its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the id.
    pub async fn delete_by_id(&self, id: i64) -> Result<Link, AppError> {
        self.links.delete_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Generates a short code not currently in use, with collision retry.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.links.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::Internal("failed to generate a unique short code"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use axum::http::StatusCode;
    use chrono::Utc;
    use mockall::Sequence;

    fn test_link(id: i64, short: &str, full_url: &str) -> Link {
        Link::new(
            id,
            short.to_string(),
            full_url.to_string(),
            0,
            None,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_link_with_generated_code() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|new_link| {
            Ok(test_link(10, &new_link.short, &new_link.full_url))
        });

        let service = LinkService::new(Arc::new(repo));
        let link = service
            .create_link("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(link.full_url, "https://example.com");
        assert!(link.short.len() >= 6 && link.short.len() <= 8);
        assert_eq!(link.clicks, 0);
    }

    #[tokio::test]
    async fn test_create_link_with_custom_code() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "mylink1")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|new_link| {
            Ok(test_link(11, &new_link.short, &new_link.full_url))
        });

        let service = LinkService::new(Arc::new(repo));
        let link = service
            .create_link(
                "https://example.com".to_string(),
                Some("mylink1".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.short, "mylink1");
    }

    #[tokio::test]
    async fn test_create_link_rejects_invalid_url() {
        // No repository expectations: validation fails before any store call.
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo));

        let err = service
            .create_link("not-a-url".to_string(), None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        match err {
            AppError::InvalidInput { code, .. } => assert_eq!(code, "invalid_full_url"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_link_rejects_bad_code_shape() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo));

        let err = service
            .create_link(
                "https://example.com".to_string(),
                Some("ab!".to_string()),
            )
            .await
            .unwrap_err();

        match err {
            AppError::InvalidInput { code, .. } => assert_eq!(code, "invalid_short_code"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_link_conflict_on_taken_code() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(test_link(1, code, "https://example.com"))));
        repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(repo));
        let err = service
            .create_link(
                "https://example.org".to_string(),
                Some("taken1".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict));
    }

    #[tokio::test]
    async fn test_generated_code_retries_on_collision() {
        let mut repo = MockLinkRepository::new();
        let mut seq = Sequence::new();

        // First generated code collides, second one is free.
        repo.expect_find_by_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|code| Ok(Some(test_link(1, code, "https://example.com"))));
        repo.expect_find_by_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|new_link| {
            Ok(test_link(2, &new_link.short, &new_link.full_url))
        });

        let service = LinkService::new(Arc::new(repo));
        let link = service
            .create_link("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert!(link.short.len() >= 6 && link.short.len() <= 8);
    }

    #[tokio::test]
    async fn test_visit_records_click() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(test_link(7, code, "https://example.com"))));
        repo.expect_record_click()
            .withf(|&id| id == 7)
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::new(Arc::new(repo));
        let link = service.visit("abc123").await.unwrap();

        assert_eq!(link.full_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_visit_unknown_code_is_not_found() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_record_click().times(0);

        let service = LinkService::new(Arc::new(repo));
        let err = service.visit("nosuch1").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_link_is_not_found() {
        let mut repo = MockLinkRepository::new();

        repo.expect_delete_by_id().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(repo));
        let err = service.delete_by_id(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound));
    }
}
