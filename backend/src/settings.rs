//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `REGISTRATION_*` environment variables, an optional
//! configuration file, or command-line flags. Unset values fall back to the
//! defaults below.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_PATH: &str = "users.db";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

fn default_host() -> String {
    String::from(DEFAULT_HOST)
}

fn default_database_path() -> String {
    String::from(DEFAULT_DATABASE_PATH)
}

/// Startup settings for the registration service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct ServiceSettings {
    /// Interface to listen on.
    #[ortho_config(default = default_host())]
    pub host: String,
    /// TCP port to listen on.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// SQLite database file.
    #[ortho_config(default = default_database_path())]
    pub database_path: String,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: u32,
    /// Seconds to wait for a pooled connection before failing the request.
    #[ortho_config(default = DEFAULT_CONNECTION_TIMEOUT_SECS)]
    pub connection_timeout_secs: u64,
}

impl ServiceSettings {
    /// Configured SQLite database file.
    pub fn database_path(&self) -> &str {
        &self.database_path
    }

    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_path.as_str())
            .with_max_size(self.pool_max_size)
            .with_connection_timeout(Duration::from_secs(self.connection_timeout_secs))
    }

    /// Resolve the listen address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the host does not resolve to any address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("{} resolved to no addresses", self.host),
                )
            })
    }
}
