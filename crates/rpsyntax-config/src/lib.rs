//! rpsyntax configuration system.
//!
//! Provides TOML-based configuration, YAML syntax themes, and the
//! user-facing color parsing layer. All config sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rpsyntax_config::{load_config, load_theme, resolve_theme};
//!
//! let config = load_config().expect("failed to load config");
//! let theme = load_theme(&config.theme.name).expect("failed to load theme");
//! let resolved = resolve_theme(&theme, &config.colors).expect("invalid theme colors");
//! println!("keyword = {}", resolved.color_for("keyword"));
//! ```

pub mod colors;
pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use colors::{parse_color, resolve_color, validate_color, InvalidColorPolicy};
pub use schema::{RpSyntaxConfig, CONFIG_SCHEMA_VERSION};
pub use theme::{
    load_theme, load_theme_from_path, resolve_theme, ResolvedTheme, ThemeFile, TokenKind,
    DEFAULT_THEME,
};

use rpsyntax_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<RpSyntaxConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &RpSyntaxConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
