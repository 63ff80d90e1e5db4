//! Application configuration module
//!
//! Everything the server needs at startup lives in one `AppConfig` value,
//! built once in `main` and handed to the components that need it. Nothing
//! reads the environment after startup.
//!
//! | Variable         | Default  | Meaning                                 |
//! |------------------|----------|-----------------------------------------|
//! | `JWT_SECRET`     | dev key  | HMAC secret for signing tokens          |
//! | `TOKEN_TTL_SECS` | `360000` | Token lifetime in seconds (max 1 year)  |
//! | `BCRYPT_COST`    | `10`     | bcrypt work factor (4..=31)             |
//! | `SERVER_PORT`    | `5000`   | HTTP listen port                        |
//! | `DATABASE_URL`   | unset    | PostgreSQL URL; in-memory store if unset |

use std::time::Duration;
use thiserror::Error;

/// Lifetime of an issued token unless overridden
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(360_000);

/// bcrypt work factor unless overridden
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Longest token lifetime accepted, one year
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

pub const DEFAULT_PORT: u16 = 5000;

const DEVELOPMENT_SECRET: &str = "devconnect-development-secret";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify tokens
    pub jwt_secret: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
    /// bcrypt cost factor for new password hashes
    pub bcrypt_cost: u32,
    /// HTTP listen port
    pub port: u16,
    /// PostgreSQL connection URL
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    ///
    /// A missing `JWT_SECRET` falls back to a fixed development secret and
    /// logs a warning; any value that is present but unparsable is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                builder = builder.jwt_secret(DEVELOPMENT_SECRET);
            }
        }

        if let Some(secs) = read_var::<u64>("TOKEN_TTL_SECS")? {
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(cost) = read_var::<u32>("BCRYPT_COST")? {
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(port) = read_var::<u16>("SERVER_PORT")? {
            builder = builder.port(port);
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl.is_zero() || self.token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: self.token_ttl.as_secs().to_string(),
            });
        }
        Ok(())
    }
}

fn read_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    port: Option<u16>,
    database_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the PostgreSQL URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
