//! Shared fixtures for the registration integration suites.
//!
//! Every test gets its own SQLite file inside a temporary directory, so
//! suites run in parallel without sharing state.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tempfile::TempDir;

use registration::Trace;
use registration::domain::RegistrationService;
use registration::inbound::http::configure;
use registration::inbound::http::health::HealthState;
use registration::inbound::http::state::HttpState;
use registration::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, ensure_schema,
};

/// Temporary on-disk database with its schema applied.
pub struct TestDatabase {
    _dir: TempDir,
    url: String,
}

impl TestDatabase {
    /// Create a fresh database file and run migrations against it.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = dir.path().join("users.db").to_string_lossy().into_owned();
        ensure_schema(&url).await.expect("schema applies");
        Self { _dir: dir, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build a connection pool over this database.
    pub async fn pool(&self) -> DbPool {
        DbPool::new(PoolConfig::new(self.url.clone()).with_min_idle(None))
            .await
            .expect("pool builds")
    }

    /// Build a repository over a fresh pool.
    pub async fn repository(&self) -> DieselUserRepository {
        DieselUserRepository::new(self.pool().await)
    }

    /// Read the stored `(username, email)` pairs directly, bypassing the
    /// service.
    pub fn stored_users(&self) -> Vec<(String, String)> {
        let mut conn = SqliteConnection::establish(&self.url).expect("direct connection");
        diesel::sql_query("SELECT username, email FROM users ORDER BY id")
            .load::<StoredUser>(&mut conn)
            .expect("read users")
            .into_iter()
            .map(|row| (row.username, row.email))
            .collect()
    }

    /// Drop the `users` table behind the service's back.
    pub fn drop_users_table(&self) {
        let mut conn = SqliteConnection::establish(&self.url).expect("direct connection");
        diesel::sql_query("DROP TABLE users")
            .execute(&mut conn)
            .expect("drop users table");
    }

    /// Count rows in the `users` table.
    pub fn user_count(&self) -> i64 {
        let mut conn = SqliteConnection::establish(&self.url).expect("direct connection");
        diesel::sql_query("SELECT COUNT(*) AS count FROM users")
            .get_result::<RowCount>(&mut conn)
            .expect("count users")
            .count
    }
}

#[derive(QueryableByName)]
struct StoredUser {
    #[diesel(sql_type = diesel::sql_types::Text)]
    username: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    email: String,
}

#[derive(QueryableByName)]
struct RowCount {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Initialise the full HTTP application over the given database.
pub async fn init_app(
    db: &TestDatabase,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let repository = Arc::new(db.repository().await);
    let registration = Arc::new(RegistrationService::new(repository));
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(registration)))
            .app_data(web::Data::new(HealthState::new()))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}
