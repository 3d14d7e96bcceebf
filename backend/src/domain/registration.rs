//! Registration use-case.
//!
//! Translates repository outcomes into domain errors. Uniqueness is enforced
//! by the store: two racing registrations for the same username or email
//! both reach the repository, and exactly one of them observes
//! [`UserPersistenceError::Duplicate`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{UserPersistenceError, UserRegistration, UserRepository};
use crate::domain::{Error, NewUser, User};

/// Client-facing message for a uniqueness conflict.
///
/// The message deliberately does not say which field collided.
pub const DUPLICATE_USER_MESSAGE: &str = "Username or email already exists.";

/// Registration service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
}

impl RegistrationService {
    /// Create a service over the given repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Duplicate { constraint } => {
            info!(%constraint, "registration rejected by uniqueness constraint");
            Error::conflict(DUPLICATE_USER_MESSAGE)
        }
        UserPersistenceError::Connection { message } => {
            error!(%message, "user store unavailable during registration");
            Error::internal(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user insert failed");
            Error::internal(format!("user insert failed: {message}"))
        }
    }
}

#[async_trait]
impl UserRegistration for RegistrationService {
    async fn register(&self, user: NewUser) -> Result<User, Error> {
        let stored = self
            .users
            .insert(&user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %stored.id(), "user registered");
        Ok(stored)
    }
}
