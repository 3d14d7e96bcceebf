//! Domain primitives, ports, and the registration use-case.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`NewUser`], [`User`], [`Username`], [`EmailAddress`], [`UserId`]:
//!   user data as supplied by clients and the store.
//! - [`RegistrationService`]: implements [`ports::UserRegistration`].

pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::{DUPLICATE_USER_MESSAGE, RegistrationService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, User, UserId, Username};
