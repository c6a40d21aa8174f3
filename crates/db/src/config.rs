//! Database configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured via `dotenvy`.

use crate::error::DbError;

const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_MIN_CONNECTIONS: u32 = 0;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Connection settings for the PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of connections held by the pool.
    pub max_connections: u32,

    /// Idle connections kept open.
    pub min_connections: u32,

    /// Seconds to wait when acquiring a connection.
    pub connect_timeout_secs: u64,
}

impl DbConfig {
    /// Build a config with defaults for everything but the URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// `DATABASE_URL` is required. The pool sizing variables fall back to
    /// defaults when unset but are rejected when set to garbage.
    pub fn from_env() -> Result<Self, DbError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DbError> {
        let database_url = lookup("DATABASE_URL").ok_or(DbError::MissingVar("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS", DEFAULT_MIN_CONNECTIONS)?,
            connect_timeout_secs: parse_var(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, DbError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| DbError::InvalidVar { key, value }),
    }
}
