use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;

/// Default config file, resolved relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/aceest-fitness";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

impl Config {
    /// Load defaults, then the (optional) file at `path`, then `ACEEST_*` env vars.
    ///
    /// Nested keys use `__` in env var names, e.g. `ACEEST_HTTP__PORT=9000`.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "ACEestFitness")?
            .set_default("http.bind", "0.0.0.0")?
            .set_default("http.port", 8000_i64)?
            .set_default("http.cors", false)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("ACEEST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.http.bind, self.http.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid listen address {}:{}",
                    self.http.bind, self.http.port
                )
            })
    }
}
