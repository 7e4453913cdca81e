use rusqlite::Row;

use fluxbb_types::{NewUser, User};

use crate::db::DbPool;
use crate::error::InstallResult;

const USER_COLUMNS: &str = "id, username, password, email, language, style, registered, registration_ip, last_visit, group_id";

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            password: row.get(2)?,
            email: row.get(3)?,
            language: row.get(4)?,
            style: row.get(5)?,
            registered: row.get(6)?,
            registration_ip: row.get(7)?,
            last_visit: row.get(8)?,
            group_id: row.get(9)?,
        })
    }

    /// Save a new user and return it with its assigned id
    pub fn create(&self, user: &NewUser) -> InstallResult<User> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO users (username, password, email, language, style, registered, registration_ip, last_visit, group_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            (
                &user.username,
                &user.password,
                &user.email,
                &user.language,
                &user.style,
                user.registered,
                &user.registration_ip,
                user.last_visit,
                user.group_id,
            ),
        )?;

        Ok(User {
            id: conn.last_insert_rowid(),
            username: user.username.clone(),
            password: user.password.clone(),
            email: user.email.clone(),
            language: user.language.clone(),
            style: user.style.clone(),
            registered: user.registered,
            registration_ip: user.registration_ip.clone(),
            last_visit: user.last_visit,
            group_id: user.group_id,
        })
    }

    pub fn list_all(&self) -> InstallResult<Vec<User>> {
        let conn = self.pool.get()?;
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let mut stmt = conn.prepare(&sql)?;

        let users = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }
}
