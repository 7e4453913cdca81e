use std::path::PathBuf;

use fluxbb_types::DatabaseDriver;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error(
        "Unable to write config file. Please create the file \"{}\" with the following contents:\n\n{contents}",
        .path.display()
    )]
    ConfigWrite {
        path: PathBuf,
        contents: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to serialize config file: {0}")]
    ConfigRender(#[source] serde_json::Error),

    #[error("Unable to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to read seed strings file {}: {source}", .path.display())]
    SeedStringsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed strings file {}: {source}", .path.display())]
    SeedStrings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The admin group has to be seeded before the admin user
    #[error("Could not find admin group (id {0})")]
    MissingAdminGroup(i64),

    /// `o_default_user_group` refers to this group
    #[error("Could not find default user group (id {0})")]
    MissingDefaultGroup(i64),

    #[error("Database driver {0} is not supported by this build, only sqlite is")]
    UnsupportedDriver(DatabaseDriver),

    #[error("Database error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

pub type InstallResult<T> = Result<T, InstallError>;
