//! SQLite persistence adapters using Diesel.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) are private to this module.
//! - **Scoped pooling**: connections come from a `bb8` pool of
//!   `diesel-async` wrapped SQLite connections and go back on drop.
//!
//! # Example
//!
//! ```ignore
//! use registration::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, ensure_schema,
//! };
//!
//! ensure_schema("users.db").await?;
//! let pool = DbPool::new(PoolConfig::new("users.db")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod schema_init;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError, SqliteAsyncConnection};
pub use schema_init::{MIGRATIONS, SchemaError, ensure_schema};
