//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every endpoint and the JSON extractor configuration.
///
/// Callers still provide the [`state::HttpState`] and [`health::HealthState`]
/// app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use registration::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(users::register)
        .service(health::ready)
        .service(health::live);
}
