//! Domain ports.
//!
//! Driving ports are implemented by domain services and called by inbound
//! adapters. Driven ports are implemented by outbound adapters.

mod macros;
mod user_registration;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use user_registration::UserRegistration;
pub use user_repository::{UserPersistenceError, UserRepository};
