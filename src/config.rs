use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::db::DbConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },

    #[error("DB_POOL_SIZE must be at least 1")]
    EmptyPool,
}

/// Runtime settings, read from the process environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db: DbConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9003,
            db: DbConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup, falling back to
    /// defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let pool_size = parse_or("DB_POOL_SIZE", &lookup, defaults.db.pool_size)?;
        if pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", &lookup, defaults.port)?,
            db: DbConfig {
                url: lookup("DATABASE_URL").unwrap_or(defaults.db.url),
                pool_size,
                foreign_keys: parse_or("DB_FOREIGN_KEYS", &lookup, defaults.db.foreign_keys)?,
                busy_timeout_ms: parse_or(
                    "DB_BUSY_TIMEOUT_MS",
                    &lookup,
                    defaults.db.busy_timeout_ms,
                )?,
            },
        })
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
