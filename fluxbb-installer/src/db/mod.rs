pub mod schema;
pub mod connection;
pub mod migrations;
pub mod repositories;

pub use connection::{Database, DbPool};
pub use migrations::{install_migrations, Migration};
