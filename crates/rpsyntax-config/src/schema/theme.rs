//! Theme selection and color handling configuration types.

use crate::colors::{parse_color, InvalidColorPolicy};
use crate::theme::DEFAULT_THEME;
use rpsyntax_common::{Color, ConfigError};
use serde::{Deserialize, Serialize};

/// Theme selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in theme name or path to custom theme YAML.
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME.into(),
        }
    }
}

/// How theme colors that fail to parse are handled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub invalid_policy: InvalidColorPolicy,
    /// Substituted for invalid colors under [`InvalidColorPolicy::Fallback`].
    pub fallback: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            invalid_policy: InvalidColorPolicy::Reject,
            fallback: "#000000".into(),
        }
    }
}

impl ColorSettings {
    pub fn fallback_color(&self) -> Result<Color, ConfigError> {
        parse_color(&self.fallback)
    }
}
