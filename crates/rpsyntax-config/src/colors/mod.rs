//! Color parsing, validation and invalid-color policy.
//!
//! Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`, with or without the `#`.
//! Surrounding whitespace is ignored here, unlike [`Color::from_hex`].

mod parse;


use rpsyntax_common::types::Color;
use rpsyntax_common::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::warn;

use parse::HEX_RE;

/// What to do with a color string that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidColorPolicy {
    /// Fail with a [`ConfigError::ParseError`].
    #[default]
    Reject,
    /// Log a warning and substitute the configured fallback color.
    Fallback,
}

/// Parse a user-supplied color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    Color::from_hex(s.trim()).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

/// Parse `s`, applying `policy` when it is not a valid color.
pub fn resolve_color(
    s: &str,
    policy: InvalidColorPolicy,
    fallback: Color,
) -> Result<Color, ConfigError> {
    match parse_color(s) {
        Ok(color) => Ok(color),
        Err(e) => match policy {
            InvalidColorPolicy::Reject => Err(e),
            InvalidColorPolicy::Fallback => {
                warn!("{e}; using fallback {fallback}");
                Ok(fallback)
            }
        },
    }
}
