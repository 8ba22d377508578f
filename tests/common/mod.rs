#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use shorturl::infrastructure::persistence::SqliteLinkRepository;
use shorturl::routes::router;
use shorturl::state::AppState;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(SqliteLinkRepository::new(Arc::new(pool))))
}

/// Builds a test server running the full application router.
pub fn make_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Inserts a link directly and returns its id.
pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (short, full_url, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE short = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_last_clicked(pool: &SqlitePool, code: &str) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT last_clicked FROM links WHERE short = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
