//! # Gateway Configuration
//!
//! Process-wide configuration: the listening socket, the ambient database
//! defaults, and the per-request time bounds. Built once at startup (seeded
//! from the environment) and injected into the transports. Nothing here is
//! mutable after boot.

use std::env;
use std::time::Duration;

/// Default listening port for the HTTP transport.
pub const DEFAULT_PORT: u16 = 54321;

/// Ambient connection defaults for the database engine.
///
/// The database name itself comes from the request path; everything else is
/// fixed per process, read from the usual libpq environment variables.
#[derive(Debug, Clone)]
pub struct DatabaseDefaults {
    /// Database server host.
    pub host: String,
    /// Database server port.
    pub port: u16,
    /// Role to connect as.
    pub user: String,
    /// Password, when the server requires one.
    pub password: Option<String>,
}

impl Default for DatabaseDefaults {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
        }
    }
}

impl DatabaseDefaults {
    /// Seed defaults from `PGHOST`, `PGPORT`, `PGUSER` and `PGPASSWORD`.
    ///
    /// `PGUSER` falls back to `USER`, then to the built-in default. A
    /// non-numeric `PGPORT` is ignored.
    pub fn from_env() -> Self {
        let base = Self::default();

        let host = env::var("PGHOST").unwrap_or(base.host);
        let port = env::var("PGPORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(base.port);
        let user = env::var("PGUSER")
            .or_else(|_| env::var("USER"))
            .unwrap_or(base.user);
        let password = env::var("PGPASSWORD").ok();

        Self { host, port, user, password }
    }
}

/// Configuration for the request gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port the HTTP transport listens on.
    pub port: u16,
    /// Address the HTTP transport binds to.
    pub bind_address: String,
    /// Ambient database connection defaults.
    pub database: DatabaseDefaults,
    /// Bound on establishing a database connection.
    pub connect_timeout: Duration,
    /// Bound on statement preparation and execution.
    pub query_timeout: Duration,
    /// Bound on receiving the request head from a client.
    pub receive_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: "0.0.0.0".to_string(),
            database: DatabaseDefaults::default(),
            connect_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(30),
            receive_timeout: Duration::from_secs(10),
        }
    }
}

impl GatewayConfig {
    /// Build a config with database defaults seeded from the environment.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseDefaults::from_env(),
            ..Self::default()
        }
    }

    /// Get the full bind address with port.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
