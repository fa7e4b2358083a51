/**
 * Server Configuration
 *
 * Configuration is read from environment variables, after loading a `.env`
 * file if one is present.
 *
 * | variable           | default                                  |
 * |--------------------|------------------------------------------|
 * | `PORT`             | `3000`                                   |
 * | `DATABASE_URL`     | unset: in-memory store                   |
 * | `JWT_SECRET`       | required, at least 16 bytes              |
 * | `TOKEN_TTL_SECS`   | `2592000` (30 days)                      |
 * | `BCRYPT_COST`      | `12`                                     |
 * | `FUTURAMA_API_URL` | `https://futuramaapi.herokuapp.com/api`  |
 * | `STATIC_DIR`       | `public`                                 |
 */

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::backend::auth::sessions::{DEFAULT_TOKEN_TTL, MAX_TOKEN_TTL};
use crate::backend::search::DEFAULT_FUTURAMA_API_URL;

const MIN_SECRET_BYTES: usize = 16;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub futurama_api_url: String,
    pub static_dir: PathBuf,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("futurama_api_url", &self.futurama_api_url)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::InvalidValue {
                key: "JWT_SECRET",
                message: format!("must be at least {MIN_SECRET_BYTES} bytes"),
            });
        }

        let bcrypt_cost = parse_or(get("BCRYPT_COST"), "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
            });
        }

        let ttl_secs = parse_or(get("TOKEN_TTL_SECS"), "TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL.as_secs())?;
        if ttl_secs == 0 || ttl_secs > MAX_TOKEN_TTL.as_secs() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                message: format!("must be between 1 and {}", MAX_TOKEN_TTL.as_secs()),
            });
        }

        Ok(Self {
            port: parse_or(get("PORT"), "PORT", 3000)?,
            database_url: get("DATABASE_URL"),
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_secs),
            bcrypt_cost,
            futurama_api_url: get("FUTURAMA_API_URL")
                .unwrap_or_else(|| DEFAULT_FUTURAMA_API_URL.to_string()),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            message: e.to_string(),
        }),
    }
}
