//! CLI administration tool for shorturl.
//!
//! Provides link management without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link with a generated code
//! cargo run --bin admin -- add https://example.com
//!
//! # Create a link with a custom code
//! cargo run --bin admin -- add https://example.com --code mylink1
//!
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Show stats for one code
//! cargo run --bin admin -- stats mylink1
//!
//! # Delete a link by code
//! cargo run --bin admin -- rm mylink1
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): SQLite connection string

use shorturl::application::services::LinkService;
use shorturl::infrastructure::persistence::SqliteLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// CLI tool for managing shorturl links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Add {
        /// Destination URL (absolute http/https)
        url: String,

        /// Custom short code (6-8 alphanumeric characters, generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// List all links
    List,

    /// Show stats for one short code
    Stats {
        /// The short code to look up
        code: String,
    },

    /// Delete a link by short code
    Rm {
        /// The short code to delete
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set (e.g. sqlite://shorturl.db)")?;

    let connect_options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let service = LinkService::new(Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Add { url, code } => {
            let link = service
                .create_link(url, code)
                .await
                .context("failed to create link")?;
            println!("created /{} -> {}", link.short, link.full_url);
        }
        Commands::List => {
            let links = service.list_links().await.context("failed to list links")?;
            if links.is_empty() {
                println!("no links");
            }
            for link in links {
                println!(
                    "{:>6}  /{:<10} {:>6} clicks  {}",
                    link.id, link.short, link.clicks, link.full_url
                );
            }
        }
        Commands::Stats { code } => {
            let link = service
                .get_link(&code)
                .await
                .with_context(|| format!("no link with code '{code}'"))?;
            println!("code:         {}", link.short);
            println!("full URL:     {}", link.full_url);
            println!("clicks:       {}", link.clicks);
            println!("created at:   {}", link.created_at);
            match link.last_clicked {
                Some(ts) => println!("last clicked: {ts}"),
                None => println!("last clicked: never"),
            }
        }
        Commands::Rm { code } => {
            service
                .delete_by_code(&code)
                .await
                .with_context(|| format!("no link with code '{code}'"))?;
            println!("deleted /{code}");
        }
    }

    pool.close().await;

    Ok(())
}
