use async_trait::async_trait;
use serde::Serialize;
use sqlx::{mysql::MySqlPoolOptions, Connection, MySql, Pool};

use super::environment::{Config, ConfigError};

pub type DbPool = Pool<MySql>;

/// Builds the MySQL pool without connecting.
///
/// Connections are opened on first use so the service can start (and report
/// `disconnected` on `/api/health`) while the database is still down.
pub fn init_db(config: &Config) -> Result<DbPool, ConfigError> {
    let options = config.database.connect_options()?;

    Ok(MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
    Error,
}

/// Reachability check used by the health endpoint.
#[async_trait]
pub trait StorageProbe: Send + Sync {
    async fn ping(&self) -> DatabaseStatus;
}

#[async_trait]
impl StorageProbe for DbPool {
    async fn ping(&self) -> DatabaseStatus {
        let mut conn = match self.acquire().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "health check could not acquire a connection");
                return DatabaseStatus::Disconnected;
            }
        };

        match conn.ping().await {
            Ok(()) => DatabaseStatus::Connected,
            Err(e) => {
                tracing::error!(error = %e, "health check ping failed");
                DatabaseStatus::Error
            }
        }
    }
}
