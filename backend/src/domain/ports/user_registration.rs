//! Driving port for the registration use-case.
//!
//! Inbound adapters depend on this trait rather than on persistence, so HTTP
//! handlers can be exercised with a stub.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Register a new user.
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Persist `user`, returning the stored record.
    ///
    /// Fails with [`crate::domain::ErrorCode::Conflict`] when the username or
    /// email is already taken and [`crate::domain::ErrorCode::InternalError`]
    /// for any other storage failure.
    async fn register(&self, user: NewUser) -> Result<User, Error>;
}
