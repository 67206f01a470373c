//! Server configuration

use std::path::PathBuf;

use sqlx::mysql::MySqlConnectOptions;
use thiserror::Error;

/// Environment name that allows built-in fallbacks for secrets
pub const DEVELOPMENT: &str = "development";

/// Configuration errors, reported before anything is started
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set in {environment} environment")]
    MissingSecret {
        name: &'static str,
        environment: String,
    },

    #[error("{name} must not be empty in {environment} environment")]
    EmptySecret {
        name: &'static str,
        environment: String,
    },
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | ENVIRONMENT | development | development \| staging \| production |
/// | PORT | 3000 | HTTP listen port |
/// | DB_HOST | localhost | |
/// | DB_PORT | 3306 | |
/// | DB_USER | root | |
/// | DB_PASSWORD | empty | required outside development |
/// | DB_NAME | cb_admin | |
/// | DB_MAX_CONNECTIONS | 5 | 1 serializes every request on one connection |
/// | JWT_SECRET | dev fallback | required outside development |
/// | UPLOADS_DIR | uploads | served under `/uploads` |
/// | LOG_LEVEL | info | used when `RUST_LOG` is unset |
/// | LOG_JSON | false | |
/// | LOG_DIR | unset | enables daily rotated log files |
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub http_port: u16,
    pub database: DatabaseConfig,
    /// HS256 secret for session tokens
    pub jwt_secret: String,
    pub uploads_dir: PathBuf,
    pub log: LogConfig,
}

/// MySQL connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| DEVELOPMENT.into());

        Ok(Self {
            http_port: parsed(&lookup, "PORT").unwrap_or(3000),
            database: DatabaseConfig {
                host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
                port: parsed(&lookup, "DB_PORT").unwrap_or(3306),
                user: lookup("DB_USER").unwrap_or_else(|| "root".into()),
                password: require_secret(&lookup, "DB_PASSWORD", &environment, "")?,
                name: lookup("DB_NAME").unwrap_or_else(|| "cb_admin".into()),
                max_connections: parsed::<u32, _>(&lookup, "DB_MAX_CONNECTIONS")
                    .unwrap_or(5)
                    .max(1),
            },
            jwt_secret: require_secret(
                &lookup,
                "JWT_SECRET",
                &environment,
                "dev-JWT_SECRET-not-for-production",
            )?,
            uploads_dir: lookup("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            log: LogConfig {
                level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
                json: lookup("LOG_JSON").is_some_and(|v| matches!(v.as_str(), "1" | "true")),
                dir: lookup("LOG_DIR").filter(|s| !s.is_empty()).map(PathBuf::from),
            },
            environment,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }
}

fn parsed<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|v| v.parse().ok())
}

/// Require a secret: it must be set and non-empty outside development.
fn require_secret<F>(
    lookup: &F,
    name: &'static str,
    environment: &str,
    dev_default: &str,
) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let is_dev = environment == DEVELOPMENT;
    match lookup(name) {
        Some(v) if v.is_empty() && !is_dev => Err(ConfigError::EmptySecret {
            name,
            environment: environment.to_string(),
        }),
        Some(v) => Ok(v),
        None if is_dev => Ok(dev_default.to_string()),
        None => Err(ConfigError::MissingSecret {
            name,
            environment: environment.to_string(),
        }),
    }
}
