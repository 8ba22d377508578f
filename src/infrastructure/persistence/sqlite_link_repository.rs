//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_insert_error};

/// Row shape shared by every query touching the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short: String,
    full_url: String,
    clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short,
            row.full_url,
            row.clicks,
            row.last_clicked,
            row.created_at,
        )
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Uses SQLx bound parameters throughout for SQL injection protection.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short, full_url, created_at)
            VALUES (?, ?, ?)
            RETURNING id, short, full_url, clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.short)
        .bind(&new_link.full_url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short, full_url, clicks, last_clicked, created_at
            FROM links
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short, full_url, clicks, last_clicked, created_at
            FROM links
            WHERE short = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short, full_url, clicks, last_clicked, created_at
            FROM links
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            DELETE FROM links
            WHERE short = ?
            RETURNING id, short, full_url, clicks, last_clicked, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            DELETE FROM links
            WHERE id = ?
            RETURNING id, short, full_url, clicks, last_clicked, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn record_click(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = ?
            WHERE id = ?
            "#,
        )
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
