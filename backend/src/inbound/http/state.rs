//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on domain ports, so
//! they can be tested with in-memory stubs.

use std::sync::Arc;

use crate::domain::ports::UserRegistration;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration use-case.
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    /// Construct state from its ports.
    pub fn new(registration: Arc<dyn UserRegistration>) -> Self {
        Self { registration }
    }
}
