use rusqlite::Connection;

use super::schema;

/// One schema-definition unit: creates a single table and its indexes
pub trait Migration {
    fn name(&self) -> &'static str;

    fn up(&self, conn: &Connection) -> rusqlite::Result<()>;
}

/// A migration backed by a fixed SQL batch
#[derive(Debug, Clone, Copy)]
pub struct CreateTable {
    pub name: &'static str,
    pub sql: &'static str,
}

impl Migration for CreateTable {
    fn name(&self) -> &'static str {
        self.name
    }

    fn up(&self, conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(self.sql)
    }
}

/// Install migrations in the order they must be applied
pub const INSTALL_TABLES: [CreateTable; 14] = [
    CreateTable { name: "bans", sql: schema::BANS },
    CreateTable { name: "categories", sql: schema::CATEGORIES },
    CreateTable { name: "config", sql: schema::CONFIG },
    CreateTable { name: "forum_perms", sql: schema::FORUM_PERMS },
    CreateTable { name: "forum_subscriptions", sql: schema::FORUM_SUBSCRIPTIONS },
    CreateTable { name: "forums", sql: schema::FORUMS },
    CreateTable { name: "groups", sql: schema::GROUPS },
    CreateTable { name: "group_permissions", sql: schema::GROUP_PERMISSIONS },
    CreateTable { name: "posts", sql: schema::POSTS },
    CreateTable { name: "reports", sql: schema::REPORTS },
    CreateTable { name: "sessions", sql: schema::SESSIONS },
    CreateTable { name: "topic_subscriptions", sql: schema::TOPIC_SUBSCRIPTIONS },
    CreateTable { name: "topics", sql: schema::TOPICS },
    CreateTable { name: "users", sql: schema::USERS },
];

pub fn install_migrations() -> Vec<Box<dyn Migration>> {
    INSTALL_TABLES
        .iter()
        .map(|table| Box::new(*table) as Box<dyn Migration>)
        .collect()
}
