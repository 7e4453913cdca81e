use serde::{Deserialize, Serialize};

use crate::enums::DatabaseDriver;

/// Database connection settings as entered during setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub driver: DatabaseDriver,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    /// Database name, or the database file path for SQLite
    pub database: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub prefix: String,
}

impl DatabaseConfig {
    pub fn sqlite(path: impl Into<String>) -> Self {
        Self {
            driver: DatabaseDriver::Sqlite,
            host: String::new(),
            port: None,
            database: path.into(),
            username: String::new(),
            password: String::new(),
            prefix: String::new(),
        }
    }
}

/// Contents of the forum configuration file read at every boot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumConfig {
    pub database: DatabaseConfig,
    pub route_prefix: String,
}

impl ForumConfig {
    pub fn new(database: DatabaseConfig) -> Self {
        Self {
            database,
            route_prefix: String::new(),
        }
    }
}
