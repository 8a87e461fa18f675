use std::env;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SHUTDOWN_TIMEOUT_SECONDS};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_seconds: u64,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `SHUTDOWN_TIMEOUT_SECONDS`.
    ///
    /// Missing or unparsable values fall back to the defaults in
    /// [`crate::constants`].
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            shutdown_timeout_seconds: env::var("SHUTDOWN_TIMEOUT_SECONDS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS),
        }
    }
}
