use rusqlite::OptionalExtension;

use fluxbb_types::Group;

use crate::db::DbPool;
use crate::error::InstallResult;

pub struct GroupRepository {
    pool: DbPool,
}

impl GroupRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a group with its reserved id
    pub fn create(&self, group: &Group) -> InstallResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            r#"INSERT INTO "groups" (id, title) VALUES (?, ?)"#,
            (group.id, &group.title),
        )?;
        Ok(())
    }

    /// First group with the given id
    pub fn find_by_id(&self, id: i64) -> InstallResult<Option<Group>> {
        let conn = self.pool.get()?;
        let group = conn
            .query_row(
                r#"SELECT id, title FROM "groups" WHERE id = ? ORDER BY rowid LIMIT 1"#,
                [id],
                |row| {
                    Ok(Group {
                        id: row.get(0)?,
                        title: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(group)
    }

    pub fn list_all(&self) -> InstallResult<Vec<Group>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(r#"SELECT id, title FROM "groups" ORDER BY rowid"#)?;

        let groups = stmt
            .query_map([], |row| {
                Ok(Group {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(groups)
    }
}
