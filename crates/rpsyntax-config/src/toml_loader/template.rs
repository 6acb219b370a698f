//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# rpsyntax configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
# Built-in theme name, a name found under themes/, or a path to a YAML file.
name = "rpsyntax-default"

[colors]
# What to do with theme colors that are not #RGB, #RRGGBB or #RRGGBBAA:
#   "reject"   -- refuse to load the theme
#   "fallback" -- log a warning and use the fallback color
invalid_policy = "reject"
fallback = "#000000"

[logging]
# trace, debug, info, warn, error
level = "info"
"##
}
