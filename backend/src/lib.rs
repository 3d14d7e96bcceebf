//! User registration service.
//!
//! Accepts a username and email over HTTP, persists them in SQLite under
//! uniqueness constraints, and reports success or a conflict.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
