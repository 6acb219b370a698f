//! Turns a [`ThemeFile`] into a [`ResolvedTheme`].

use super::types::{ResolvedTheme, ThemeFile};
use crate::colors::resolve_color;
use crate::schema::ColorSettings;
use rpsyntax_common::{Color, ConfigError};
use std::collections::BTreeMap;

/// Parse every color in `theme` according to `settings`.
///
/// Under [`InvalidColorPolicy::Reject`](crate::colors::InvalidColorPolicy::Reject) all bad entries are reported in a
/// single error. Under [`InvalidColorPolicy::Fallback`](crate::colors::InvalidColorPolicy::Fallback) each bad entry is
/// replaced with the fallback color and logged.
pub fn resolve_theme(
    theme: &ThemeFile,
    settings: &ColorSettings,
) -> Result<ResolvedTheme, ConfigError> {
    let fallback = settings.fallback_color()?;
    let mut errors: Vec<String> = Vec::new();

    let mut resolve = |key: &str, value: &str| -> Color {
        match resolve_color(value, settings.invalid_policy, fallback) {
            Ok(color) => color,
            Err(e) => {
                errors.push(format!("{key}: {e}"));
                fallback
            }
        }
    };

    let background = resolve("background", &theme.background);
    let foreground = resolve("foreground", &theme.foreground);
    let tokens: BTreeMap<String, Color> = theme
        .tokens
        .iter()
        .map(|(token, value)| (token.clone(), resolve(&format!("tokens.{token}"), value)))
        .collect();

    if !errors.is_empty() {
        return Err(ConfigError::ParseError(errors.join("; ")));
    }

    Ok(ResolvedTheme {
        name: theme.name.clone().unwrap_or_else(|| "unnamed".into()),
        background,
        foreground,
        tokens,
    })
}
