//! Driven port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// A uniqueness constraint rejected the insert.
        Duplicate { constraint: String } => "user already exists: {constraint}",
        /// The store could not be reached or a connection could not be checked out.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Any other failure while executing a query.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for registered users.
///
/// Implementations must enforce username and email uniqueness atomically in
/// the store itself; callers take no lock around [`UserRepository::insert`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored record with its assigned id.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by exact username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;
}
