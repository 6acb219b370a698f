//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod system;
mod theme;

pub use system::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct RpSyntaxConfig {
    pub theme: ThemeConfig,
    pub colors: ColorSettings,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::InvalidColorPolicy;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn default_config_values() {
        let config = RpSyntaxConfig::default();
        assert_eq!(config.theme.name, DEFAULT_THEME);
        assert_eq!(config.colors.invalid_policy, InvalidColorPolicy::Reject);
        assert_eq!(config.colors.fallback, "#000000");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: RpSyntaxConfig = toml::from_str(
            r#"
[colors]
invalid_policy = "fallback"
"#,
        )
        .unwrap();
        assert_eq!(config.colors.invalid_policy, InvalidColorPolicy::Fallback);
        assert_eq!(config.colors.fallback, "#000000");
        assert_eq!(config.theme.name, DEFAULT_THEME);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: RpSyntaxConfig = toml::from_str("").unwrap();
        assert_eq!(config.theme.name, DEFAULT_THEME);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = toml::from_str::<RpSyntaxConfig>("[logging]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Info.directive(), "rpsyntax=info");
        assert_eq!(LogLevel::Trace.directive(), "rpsyntax=trace");
        assert_eq!(LogLevel::Error.directive(), "rpsyntax=error");
    }

    #[test]
    fn fallback_color_parses() {
        let settings = ColorSettings::default();
        assert_eq!(settings.fallback_color().unwrap(), rpsyntax_common::Color::BLACK);

        let settings = ColorSettings {
            fallback: "#zz".into(),
            ..Default::default()
        };
        assert!(settings.fallback_color().is_err());
    }
}
