//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link collection.
///
/// Provides CRUD operations plus the click-recording mutation used by the
/// redirect path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists (the
    /// table's unique constraint is the authoritative signal).
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns every link in insertion order.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Deletes a link by code, returning the deleted row if one existed.
    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Deletes a link by id, returning the deleted row if one existed.
    async fn delete_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Increments `clicks` and sets `last_clicked` to now for one link.
    async fn record_click(&self, id: i64) -> Result<(), AppError>;
}
