use rusqlite::OptionalExtension;

use fluxbb_types::BoardOption;

use crate::db::DbPool;
use crate::error::InstallResult;

/// Access to the flat `config` table of board options
pub struct ConfigRepository {
    pool: DbPool,
}

impl ConfigRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert one option row, no upsert
    pub fn insert(&self, option: &BoardOption) -> InstallResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO config (conf_name, conf_value) VALUES (?, ?)",
            (&option.name, option.value.to_db_value()),
        )?;
        Ok(())
    }

    /// Stored value of an option; `None` when the key is missing,
    /// `Some(None)` when it is stored as NULL
    pub fn get(&self, name: &str) -> InstallResult<Option<Option<String>>> {
        let conn = self.pool.get()?;
        let value = conn
            .query_row(
                "SELECT conf_value FROM config WHERE conf_name = ? ORDER BY rowid LIMIT 1",
                [name],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// All rows in insertion order
    pub fn list_all(&self) -> InstallResult<Vec<(String, Option<String>)>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT conf_name, conf_value FROM config ORDER BY rowid")?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}
