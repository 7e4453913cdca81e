use fluxbb_types::Category;

use crate::db::DbPool;
use crate::error::InstallResult;

pub struct CategoryRepository {
    pool: DbPool,
}

impl CategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a category; the returned id is the one just persisted
    pub fn create(&self, cat_name: &str, disp_position: i64) -> InstallResult<Category> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO categories (cat_name, disp_position) VALUES (?, ?)",
            (cat_name, disp_position),
        )?;

        Ok(Category {
            id: conn.last_insert_rowid(),
            cat_name: cat_name.to_string(),
            disp_position,
        })
    }

    pub fn list_all(&self) -> InstallResult<Vec<Category>> {
        let conn = self.pool.get()?;
        let mut stmt =
            conn.prepare("SELECT id, cat_name, disp_position FROM categories ORDER BY disp_position, id")?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    cat_name: row.get(1)?,
                    disp_position: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }
}
