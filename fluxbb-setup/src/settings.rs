use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File holding setup defaults, looked up in the app root
pub const SETTINGS_FILE: &str = "setup.toml";

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub driver: String,
    pub host: String,
    pub port: Option<u16>,
    pub name: String,
    pub username: String,
    pub password: String,
    pub prefix: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardSettings {
    pub title: String,
    pub description: String,
    pub style: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub board: BoardSettings,
    pub locale: String,
    pub file_uploads: Option<String>,
}

impl Settings {
    /// Load defaults, then `setup.toml`, then `FLUXBB_*` environment variables
    pub fn new(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("database.driver", "sqlite")?
            .set_default("database.host", "")?
            .set_default("database.name", "fluxbb.db")?
            .set_default("database.username", "")?
            .set_default("database.password", "")?
            .set_default("database.prefix", "")?
            .set_default("board.title", "My FluxBB forum")?
            .set_default("board.description", "Unfortunately no one can be told what FluxBB is - you have to see it for yourself.")?
            .set_default("board.style", "Air")?
            .set_default("locale", "en")?;

        // An explicitly named file must exist, the one in the app root is optional
        match explicit {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path: PathBuf = root.join(SETTINGS_FILE);
                builder = builder.add_source(File::from(default_path).required(false));
            }
        }

        // FLUXBB_DATABASE__HOST overrides database.host
        builder = builder.add_source(
            Environment::with_prefix("FLUXBB")
                .prefix_separator("_")
                .separator("__"),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::new(temp_dir.path(), None).unwrap();

        assert_eq!(settings.database.driver, "sqlite");
        assert_eq!(settings.database.name, "fluxbb.db");
        assert_eq!(settings.database.port, None);
        assert_eq!(settings.board.style, "Air");
        assert_eq!(settings.locale, "en");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(SETTINGS_FILE),
            r#"
locale = "fr"
file_uploads = "On"

[database]
name = "data/forum.db"
prefix = "fluxbb_"

[board]
title = "Le forum"
"#,
        )
        .unwrap();

        let settings = Settings::new(temp_dir.path(), None).unwrap();
        assert_eq!(settings.locale, "fr");
        assert_eq!(settings.file_uploads.as_deref(), Some("On"));
        assert_eq!(settings.database.name, "data/forum.db");
        assert_eq!(settings.database.prefix, "fluxbb_");
        assert_eq!(settings.board.title, "Le forum");
        assert_eq!(settings.board.style, "Air");
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(Settings::new(temp_dir.path(), Some(&missing)).is_err());
    }
}
