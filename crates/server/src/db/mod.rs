//! Database operations for the OrderDesk SQLite database.
//!
//! # Tables
//!
//! - `orders` - One row per submitted order (see [`orders::OrderRepository`])
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and embedded via
//! [`MIGRATOR`]. The server applies them at startup; they can also be run
//! standalone:
//! ```bash
//! cargo run -p orderdesk-cli -- migrate
//! ```

pub mod orders;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use orders::OrderRepository;

/// Embedded migrations for the orders database.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a SQLite connection pool with sensible defaults.
///
/// The database file is created if it does not exist, matching the
/// zero-setup expectation of a single-file local database.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://orderdesk.db`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
