//! Process configuration from environment variables. Every key has a default.

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/frameworks";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Which record store the server runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `DATABASE_URL`
    pub database_url: String,
    /// `DATABASE_MAX_CONNECTIONS`
    pub database_max_connections: u32,
    /// `FRAMEWORKS_SCHEMA`: schema holding the frameworks table.
    pub schema: String,
    /// `STORE_BACKEND`: `postgres` or `memory`.
    pub store_backend: StoreBackend,
    /// `BIND_ADDR`
    pub bind_addr: String,
    /// `REQUEST_BODY_LIMIT`, in bytes.
    pub request_body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            schema: DEFAULT_SCHEMA.into(),
            store_backend: StoreBackend::Postgres,
            bind_addr: DEFAULT_BIND_ADDR.into(),
            request_body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = AppConfig::default();
        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                defaults.database_max_connections,
            )?,
            schema: get("FRAMEWORKS_SCHEMA").unwrap_or(defaults.schema),
            store_backend: parse("STORE_BACKEND", get("STORE_BACKEND"), defaults.store_backend)?,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            request_body_limit: parse(
                "REQUEST_BODY_LIMIT",
                get("REQUEST_BODY_LIMIT"),
                defaults.request_body_limit,
            )?,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
