use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use fluxbb_types::{DatabaseConfig, DatabaseDriver};

use crate::error::{InstallError, InstallResult};

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Create a new database connection pool
    pub fn new<P: AsRef<Path>>(path: P) -> InstallResult<Self> {
        let path_str = path.as_ref().to_string_lossy();

        // Every in-memory connection is its own database, so the pool
        // must hand out the same one each time
        let pool = if path_str.trim().eq_ignore_ascii_case(MEMORY_DB_PATH) {
            Pool::builder()
                .max_size(1)
                .build(SqliteConnectionManager::memory())?
        } else {
            Pool::new(SqliteConnectionManager::file(path))?
        };

        Ok(Self { pool })
    }

    /// Open the database described by the setup settings
    pub fn from_config(config: &DatabaseConfig) -> InstallResult<Self> {
        match config.driver {
            DatabaseDriver::Sqlite => Self::new(&config.database),
            other => Err(InstallError::UnsupportedDriver(other)),
        }
    }

    /// Create an in-memory database pool (useful for testing)
    pub fn in_memory() -> InstallResult<Self> {
        Self::new(MEMORY_DB_PATH)
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> InstallResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Names of all tables, sorted
    pub fn table_names(&self) -> InstallResult<Vec<String>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;

        let tables = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(tables)
    }
}
