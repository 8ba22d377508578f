//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the server starts.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - SQLite connection string, e.g. `sqlite://shorturl.db`
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `5000`)
//! - `BIND_ADDR` - Bind address (default: `0.0.0.0`)
//! - `RUST_LOG` - Log filter (default: `info`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or `PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set (e.g. sqlite://shorturl.db)")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            Err(_) => 5000,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Self {
            database_url,
            port,
            bind_addr,
        })
    }

    /// The socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
