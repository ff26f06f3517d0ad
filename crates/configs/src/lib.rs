//! # configs
//!
//! Layered runtime settings. Later sources win:
//!
//! 1. built-in defaults (and a bare `DATABASE_URL`, the sqlx convention)
//! 2. `config/default.toml`, then `config/local.toml` (both optional)
//! 3. `FORUM__*` environment variables, e.g. `FORUM__SERVER__PORT=8080`
//!
//! A `.env` file is loaded into the environment first.

use std::collections::HashMap;
use std::time::Duration;

use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Comma separated. `*` allows any origin.
    pub allow_origins: String,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: SecretString,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    pub access_token_key: SecretString,
    pub refresh_token_key: SecretString,
    pub access_token_age_secs: u64,
    pub refresh_token_age_secs: u64,
}

impl AuthSettings {
    pub fn access_token_age(&self) -> Duration {
        Duration::from_secs(self.access_token_age_secs)
    }

    pub fn refresh_token_age(&self) -> Duration {
        Duration::from_secs(self.refresh_token_age_secs)
    }
}

#[derive(Debug, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` overrides it.
    pub filter: String,
    pub json: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(error = %err, "ignoring unreadable .env file");
            }
        }
        Self::build(None)
    }

    /// `env` replaces the process environment; used by tests.
    pub fn build(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let bare_database_url = match &env {
            Some(vars) => vars.get("DATABASE_URL").cloned(),
            None => std::env::var("DATABASE_URL").ok(),
        };

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.allow_origins", "*")?
            .set_default("database.max_connections", 10)?
            .set_default("auth.access_token_age_secs", 3000)?
            .set_default("auth.refresh_token_age_secs", 60 * 60 * 24 * 30)?
            .set_default("log.filter", "info,tower_http=debug,sqlx=warn")?
            .set_default("log.json", false)?;

        if let Some(url) = bare_database_url {
            builder = builder.set_default("database.url", url)?;
        }

        let settings = builder
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("FORUM")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
