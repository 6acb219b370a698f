//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` instead of stopping
//! at the first one.

use crate::colors::validate_color;
use crate::schema::RpSyntaxConfig;
use rpsyntax_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RpSyntaxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.theme.name.trim().is_empty() {
        errors.push("theme.name is empty".into());
    }

    if !validate_color(&config.colors.fallback) {
        errors.push(format!(
            "colors.fallback = {:?} is not a hex color",
            config.colors.fallback
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
