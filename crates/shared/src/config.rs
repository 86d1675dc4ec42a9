//! Application configuration management.

use serde::Deserialize;
use tracing::warn;

use crate::error::AppResult;
use crate::types::CloudProvider;

/// Default bind address (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Cloud provider label echoed in responses.
    #[serde(default)]
    pub cloud_provider: CloudProvider,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` socket address string.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Sources are layered in order: built-in defaults, the optional
    /// `config/default` and `config/{RUN_MODE}` files, then the plain
    /// `HOST`, `PORT` and `CLOUD_PROVIDER` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is malformed.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.apply_env(|key| std::env::var(key).ok());
        Ok(app_config)
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// An unparseable `PORT` is ignored with a warning and the previously
    /// resolved port is kept. An empty `CLOUD_PROVIDER` counts as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }

        if let Some(raw) = lookup("PORT") {
            match parse_port(&raw) {
                Some(port) => self.server.port = port,
                None => warn!(
                    value = %raw,
                    fallback = self.server.port,
                    "Ignoring invalid PORT"
                ),
            }
        }

        if let Some(label) = lookup("CLOUD_PROVIDER") {
            self.cloud_provider = CloudProvider::new(label);
        }
    }
}

/// Parses a port number, rejecting anything outside `u16`.
fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests;
