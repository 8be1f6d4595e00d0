//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and administrator bootstrap
//! - `database` - Document store connection settings
//! - `environment` - Environment detection
//! - `server` - HTTP listener settings
//!
//! Everything is read from process environment variables. `DB_USER`,
//! `DB_PASSWORD` and `JWT_TOKEN_SECRET` are required; the rest have defaults
//! or are optional.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Errors raised while assembling configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Document store configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "ENVIRONMENT",
                value,
            })?,
            None => Environment::default(),
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => server::DEFAULT_PORT,
        };
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let mut database = DatabaseConfig::new(required("DB_USER")?, required("DB_PASSWORD")?);
        if let Some(cluster) = lookup("DB_CLUSTER") {
            database.cluster = cluster;
        }
        if let Some(name) = lookup("DB_NAME") {
            database.database = name;
        }
        database.categories_file = lookup("CATEGORIES_FILE").filter(|path| !path.is_empty());

        let mut jwt = JwtConfig::new(required("JWT_TOKEN_SECRET")?);
        if let Some(value) = lookup("JWT_EXPIRY_DAYS") {
            let days = value
                .parse::<i64>()
                .ok()
                .filter(|days| (1..=auth::MAX_TOKEN_EXPIRY_DAYS).contains(days))
                .ok_or(ConfigError::Invalid {
                    name: "JWT_EXPIRY_DAYS",
                    value,
                })?;
            jwt = jwt.with_expiry_days(days);
        }

        let admin_emails = lookup("ADMIN_EMAILS")
            .map(|raw| auth::parse_admin_emails(&raw))
            .unwrap_or_default();

        Ok(Self {
            environment,
            server: ServerConfig::new(host, port),
            database,
            auth: AuthConfig { jwt, admin_emails },
        })
    }
}
