//! Registration service entry point: loads settings, prepares the schema and
//! connection pool, then serves HTTP until shutdown.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use registration::inbound::http::health::HealthState;
use registration::outbound::persistence::{DbPool, ensure_schema};
use registration::settings::ServiceSettings;
use server::{ServerConfig, create_server};

/// Load [`ServiceSettings`] from the command line and `REGISTRATION_*`
/// environment.
fn load_settings<I, T>(args: I) -> std::io::Result<ServiceSettings>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ServiceSettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;

    ensure_schema(settings.database_path())
        .await
        .map_err(std::io::Error::other)?;
    info!(database = settings.database_path(), "schema ready");

    let pool = DbPool::new(settings.pool_config())
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr()?, pool);
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
