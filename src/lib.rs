//! # shorturl
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity and repository trait
//! - **Application Layer** ([`application`]) - Link creation, lookup, and click tracking
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence via SQLx
//! - **API Layer** ([`api`]) - REST handlers, DTOs, redirect and health endpoints
//! - **Web Layer** ([`web`]) - Server-rendered management page and form handlers
//!
//! ## Features
//!
//! - Short codes: custom (6-8 alphanumeric characters) or randomly generated
//! - Click counting with last-click timestamps
//! - HTML management page plus a JSON API under `/api`
//! - Per-link health probe at `/{code}/healthz`
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export DATABASE_URL="sqlite://shorturl.db"
//! export PORT=5000
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
