use std::fs;
use std::path::{Path, PathBuf};

use fluxbb_types::{DatabaseConfig, ForumConfig};

use crate::error::{InstallError, InstallResult};

/// Directory below the application root holding the forum config
pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "fluxbb.json";

/// Location of the forum config file for an application root
pub fn config_path<P: AsRef<Path>>(root: P) -> PathBuf {
    root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Render the config file exactly as it is written to disk
pub fn render_config(config: &ForumConfig) -> InstallResult<String> {
    let mut contents =
        serde_json::to_string_pretty(config).map_err(InstallError::ConfigRender)?;
    contents.push('\n');
    Ok(contents)
}

/// Write `{database, route_prefix: ""}` to `path`.
///
/// There is a single attempt. On failure the error carries the full file
/// contents so an operator can create the file by hand.
pub fn write_config(path: &Path, database: &DatabaseConfig) -> InstallResult<ForumConfig> {
    let config = ForumConfig::new(database.clone());
    let contents = render_config(&config)?;

    let result = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
    .and_then(|_| fs::write(path, &contents));

    if let Err(source) = result {
        return Err(InstallError::ConfigWrite {
            path: path.to_path_buf(),
            contents,
            source,
        });
    }

    tracing::info!("Wrote config file {}", path.display());
    Ok(config)
}

/// Load a previously written config file
pub fn load_config(path: &Path) -> InstallResult<ForumConfig> {
    let contents = fs::read_to_string(path).map_err(|source| InstallError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| InstallError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
