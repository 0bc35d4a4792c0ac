use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (a `.env` file is loaded by
/// `main` beforehand).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080)?;
        let db_pool_size = parse_or(&lookup, "DB_POOL_SIZE", 10)?;

        Ok(Self {
            database_url,
            host,
            port,
            db_pool_size,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
