//! Async connection pool for SQLite via Diesel.
//!
//! SQLite connections are synchronous; `diesel-async` wraps each one in a
//! [`SyncConnectionWrapper`] that runs queries on Tokio's blocking pool. The
//! wrapped connections are pooled with `bb8`.
//!
//! # Design
//!
//! - Every checkout is scoped: the [`PooledConnection`] guard returns the
//!   connection to the pool when dropped, whichever way the caller exits.
//! - Each new connection sets `busy_timeout` so concurrent writers queue on
//!   the database file lock instead of failing with `SQLITE_BUSY`.
//! - All errors are mapped to [`PoolError`] variants.

use std::time::Duration;

use diesel::result::{ConnectionError, ConnectionResult};
use diesel::sqlite::SqliteConnection;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::future::{BoxFuture, FutureExt};

/// Async-capable SQLite connection used by the persistence adapters.
pub type SqliteAsyncConnection = SyncConnectionWrapper<SqliteConnection>;

/// How long SQLite waits on a locked database before reporting busy.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Underlying failure description.
        message: String,
    },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying failure description.
        message: String,
    },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use registration::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("users.db")
///     .with_max_size(4)
///     .with_min_idle(Some(1))
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "users.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the given database path or URL.
    ///
    /// Defaults: `max_size` 10, `min_idle` 2, `connection_timeout` 30 seconds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Database path or URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn establish_connection(url: &str) -> BoxFuture<'_, ConnectionResult<SqliteAsyncConnection>> {
    async move {
        let mut conn = SqliteAsyncConnection::establish(url).await?;
        conn.batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

/// Pool of SQLite connections.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(PoolConfig::new("users.db")).await?;
/// let mut conn = pool.get().await?;
/// // Use conn for Diesel operations; it returns to the pool on drop.
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<SqliteAsyncConnection>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed, for
    /// example when the database file cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(establish_connection);
        let manager = AsyncDieselConnectionManager::<SqliteAsyncConnection>::new_with_config(
            &config.database_url,
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check out a connection for the duration of one operation.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, SqliteAsyncConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
