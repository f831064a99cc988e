use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("HOST/PORT do not form a valid socket address: {0}")]
    InvalidAddress(String),

    #[error("DATABASE_URL is invalid: {0}")]
    InvalidDatabaseUrl(#[from] sqlx::Error),
}

/// Where the MySQL server lives.
///
/// `DATABASE_URL` wins when present; otherwise the discrete `DB_*` variables
/// are used, each with the same default the service has always shipped with.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl DatabaseTarget {
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, ConfigError> {
        match self {
            Self::Url(url) => Ok(MySqlConnectOptions::from_str(url)?),
            Self::Parts {
                host,
                port,
                user,
                password,
                database,
            } => Ok(MySqlConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database)),
        }
    }
}

/// Environment configuration
/// Loaded once at startup and handed to whatever needs it
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseTarget,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
}

impl Config {
    /// Reads the process environment; `main` loads `.env` beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts {
                host: var("DB_HOST", "localhost"),
                port: parse_number("DB_PORT", lookup("DB_PORT"), 3306)?,
                user: var("DB_USER", "root"),
                password: var("DB_PASSWORD", ""),
                database: var("DB_NAME", "gestion_stages"),
            },
        };

        Ok(Self {
            database,
            max_connections: parse_number("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 10)?,
            acquire_timeout: Duration::from_secs(parse_number(
                "DB_ACQUIRE_TIMEOUT_SECS",
                lookup("DB_ACQUIRE_TIMEOUT_SECS"),
                5,
            )?),
            host: var("HOST", "0.0.0.0"),
            port: parse_number("PORT", lookup("PORT"), 5000)?,
            frontend_dir: PathBuf::from(var("FRONTEND_DIR", "../frontend")),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

fn parse_number<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
