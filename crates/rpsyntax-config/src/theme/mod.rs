//! Theme loading and resolution.
//!
//! Themes are YAML files mapping token kinds to hex colors. The built-in
//! theme needs no file; others are looked up by name or path.

mod loader;
mod resolve;
mod types;

pub use loader::{load_theme, load_theme_from_path};
pub use resolve::resolve_theme;
pub use types::{ResolvedTheme, ThemeFile, TokenKind, DEFAULT_THEME};
