use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub assets_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "wanderlust.db".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: try_load(&lookup, "WANDERLUST_HOST", defaults.host)?,
            port: try_load(&lookup, "PORT", defaults.port)?,
            database_url: try_load(&lookup, "DATABASE_URL", defaults.database_url)?,
            assets_dir: try_load(&lookup, "ASSETS_DIR", defaults.assets_dir)?,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
