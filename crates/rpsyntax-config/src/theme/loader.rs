//! Theme file resolution and loading.
//!
//! Resolves theme names to filesystem paths and parses YAML theme files
//! into [`ThemeFile`].

use super::types::{ThemeFile, DEFAULT_THEME};
use crate::toml_loader::user_themes_dir;
use rpsyntax_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve the filesystem path for a theme by name.
///
/// If the name looks like a file path (contains `/` or ends in
/// `.yaml`/`.yml`), it is used directly. Otherwise `themes/<name>.yaml` is
/// tried relative to the working directory, then under the user config
/// directory.
fn resolve_theme_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::ThemeNotFound(path.display().to_string()));
    }

    let file_name = format!("{name}.yaml");
    let search_dirs = std::iter::once(PathBuf::from("themes")).chain(user_themes_dir().ok());

    for dir in search_dirs {
        let candidate = dir.join(&file_name);
        debug!("looking for theme at {}", candidate.display());
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(ConfigError::ThemeNotFound(format!(
        "'{name}' is not built in and no {file_name} was found"
    )))
}

/// Load a theme by name.
///
/// The built-in theme name always succeeds without touching the
/// filesystem.
pub fn load_theme(name: &str) -> Result<ThemeFile, ConfigError> {
    if name == DEFAULT_THEME {
        return Ok(ThemeFile::built_in());
    }

    let path = resolve_theme_path(name)?;
    load_theme_from_path(&path)
}

/// Load a theme from a specific filesystem path.
pub fn load_theme_from_path(path: &Path) -> Result<ThemeFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ThemeNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme: ThemeFile = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse theme YAML {}: {e}",
            path.display()
        ))
    })?;

    info!("loaded theme from {}", path.display());
    Ok(theme)
}
