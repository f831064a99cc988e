pub mod database;
pub mod environment;

pub use database::{init_db, DatabaseStatus, DbPool, StorageProbe};
pub use environment::{Config, ConfigError};
