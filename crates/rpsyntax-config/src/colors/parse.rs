//! Internal color format checks.
//!
//! Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: RGB, RRGGBB or RRGGBBAA with an optional `#`.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});
