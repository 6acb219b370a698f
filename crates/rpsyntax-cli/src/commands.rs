//! Subcommand implementations. Each returns the text to print so the
//! formatting can be tested without a terminal.

use rpsyntax_common::Color;
use rpsyntax_config::{
    config_to_json, load_theme, parse_color, resolve_theme, ResolvedTheme, RpSyntaxConfig,
};

/// Format one parsed color for `rpsyntax parse`.
pub fn describe_color(input: &str, color: Color, normalized: bool) -> String {
    if normalized {
        let [r, g, b, a] = color.to_normalized();
        format!("{input} -> [{r:.3}, {g:.3}, {b:.3}, {a:.3}]")
    } else {
        format!("{input} -> {} {}", color.to_hex(), color.to_rgba_string())
    }
}

/// Parse every input; returns printed lines and per-input errors.
pub fn parse_colors(inputs: &[String], normalized: bool) -> (Vec<String>, Vec<String>) {
    let mut lines = Vec::new();
    let mut errors = Vec::new();
    for input in inputs {
        match parse_color(input) {
            Ok(color) => lines.push(describe_color(input, color, normalized)),
            Err(e) => errors.push(format!("{input}: {e}")),
        }
    }
    (lines, errors)
}

pub fn render_theme(theme: &ResolvedTheme) -> String {
    let mut out = format!(
        "theme: {}\nbackground: {}\nforeground: {}\n",
        theme.name, theme.background, theme.foreground
    );
    for (token, color) in &theme.tokens {
        out.push_str(&format!("{token}: {color}\n"));
    }
    out
}

pub fn theme(name: Option<&str>, config: &RpSyntaxConfig) -> rpsyntax_common::Result<String> {
    let name = name.unwrap_or(&config.theme.name);
    let file = load_theme(name)?;
    let resolved = resolve_theme(&file, &config.colors)?;
    tracing::debug!("resolved {} token colors", resolved.tokens.len());
    Ok(render_theme(&resolved))
}

pub fn config(config: &RpSyntaxConfig) -> String {
    config_to_json(config)
}
