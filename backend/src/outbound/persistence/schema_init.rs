//! Schema initializer run once at process start.
//!
//! Applies the embedded Diesel migrations. Already-applied migrations are
//! skipped and the table DDL is guarded by `IF NOT EXISTS`, so running this on
//! every start never touches existing rows.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

/// Migrations compiled into the binary from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures that abort startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The database file could not be opened or created.
    #[error("failed to open database for schema setup: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply schema migrations: {message}")]
    Migration {
        /// Underlying failure description.
        message: String,
    },
    /// The blocking migration task panicked or was cancelled.
    #[error("schema setup task failed: {message}")]
    Task {
        /// Underlying failure description.
        message: String,
    },
}

/// Ensure the `users` table exists with its uniqueness constraints.
///
/// Safe to call on every start. Migration work runs on Tokio's blocking pool
/// because the SQLite driver is synchronous.
///
/// # Errors
///
/// Returns [`SchemaError`] when the store is unreachable or unwritable. The
/// caller is expected to abort startup; nothing is retried here.
pub async fn ensure_schema(database_url: &str) -> Result<(), SchemaError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_migrations(&url))
        .await
        .map_err(|err| SchemaError::Task {
            message: err.to_string(),
        })?
}

fn run_migrations(database_url: &str) -> Result<(), SchemaError> {
    let mut conn =
        SqliteConnection::establish(database_url).map_err(|err| SchemaError::Connection {
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaError::Migration {
            message: err.to_string(),
        })?;

    if applied.is_empty() {
        debug!(database = database_url, "schema already up to date");
    }
    for version in &applied {
        info!(database = database_url, %version, "applied schema migration");
    }
    Ok(())
}
