//! Config module contains the top-level config for the app.
use std::env;

use config_crate::{Config as RawConfig, ConfigError, Environment, File};

/// Basic settings - HTTP binding address and database DSN
#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: String,
    pub database: String,
    pub thread_count: usize,
    pub pool_size: u32,
}

/// Where the admin client finds the catalog API
#[derive(Debug, Deserialize, Clone)]
pub struct Client {
    pub api_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SentryConfig {
    pub dsn: String,
}

/// Service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: Server,
    pub client: Client,
    pub sentry: Option<SentryConfig>,
}

impl Config {
    /// Creates config from base.toml, which is overwritten by <env>.toml, where env is taken from
    /// RUN_MODE (`development` if unset). After that it could be overwritten by env variables like
    /// CATALOG_SERVER__PORT.
    pub fn new() -> Result<Self, ConfigError> {
        let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Config::with_env(env)
    }

    pub fn with_env(env: impl Into<String>) -> Result<Self, ConfigError> {
        let mut s = RawConfig::new();

        s.merge(File::with_name("config/base"))?;
        // Optional file specific for environment
        s.merge(File::with_name(&format!("config/{}", env.into())).required(false))?;
        s.merge(Environment::with_prefix("CATALOG").separator("__"))?;

        s.try_into()
    }
}
