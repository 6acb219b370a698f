//! Locations under the user config directory and default file creation.

use rpsyntax_common::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "rpsyntax";
const CONFIG_FILE: &str = "config.toml";
const THEMES_DIR: &str = "themes";

/// `<platform config dir>/rpsyntax`, holding both `config.toml` and user themes.
pub fn config_root() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_root()?.join(CONFIG_FILE))
}

/// Directory searched for `<name>.yaml` after `./themes`.
pub fn user_themes_dir() -> Result<PathBuf, ConfigError> {
    Ok(config_root()?.join(THEMES_DIR))
}

/// Write the commented default config to `path`, creating parent
/// directories. An existing file is left as is.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("{} already exists, not overwriting", path.display());
            return Ok(());
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!("created default config at {}", path.display());
    Ok(())
}
