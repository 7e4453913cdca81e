use rusqlite::Row;

use fluxbb_types::Forum;

use crate::db::DbPool;
use crate::error::InstallResult;

pub struct ForumRepository {
    pool: DbPool,
}

impl ForumRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Forum> {
        Ok(Forum {
            id: row.get(0)?,
            forum_name: row.get(1)?,
            forum_desc: row.get(2)?,
            disp_position: row.get(3)?,
            cat_id: row.get(4)?,
        })
    }

    /// Create a forum inside the given category
    pub fn create_in_category(
        &self,
        cat_id: i64,
        forum_name: &str,
        forum_desc: Option<&str>,
        disp_position: i64,
    ) -> InstallResult<Forum> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO forums (forum_name, forum_desc, disp_position, cat_id) VALUES (?, ?, ?, ?)",
            (forum_name, forum_desc, disp_position, cat_id),
        )?;

        Ok(Forum {
            id: conn.last_insert_rowid(),
            forum_name: forum_name.to_string(),
            forum_desc: forum_desc.map(|s| s.to_string()),
            disp_position,
            cat_id,
        })
    }

    pub fn list_all(&self) -> InstallResult<Vec<Forum>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, forum_name, forum_desc, disp_position, cat_id FROM forums ORDER BY id",
        )?;

        let forums = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(forums)
    }
}
