use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    ///
    /// Shorthand digits are duplicated (`#abc` is `#aabbcc`) and alpha
    /// defaults to fully opaque when absent.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat(hex.to_string());

        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return Err(invalid());
        }

        let pair = |i: usize| (nibble(digits[i]) << 4) | nibble(digits[i + 1]);
        match digits.len() {
            3 => {
                let r = nibble(digits[0]) * 17;
                let g = nibble(digits[1]) * 17;
                let b = nibble(digits[2]) * 17;
                Ok(Self::from_rgba(r, g, b, 255))
            }
            6 => Ok(Self::from_rgba(pair(0), pair(2), pair(4), 255)),
            8 => Ok(Self::from_rgba(pair(0), pair(2), pair(4), pair(6))),
            _ => Err(invalid()),
        }
    }

    /// Build a color from `[r, g, b, a]` floats in `[0, 1]`.
    ///
    /// Out-of-range components are clamped and NaN maps to zero.
    pub fn from_normalized(rgba: [f32; 4]) -> Self {
        let to_byte = |v: f32| {
            if v.is_nan() {
                0
            } else {
                (v.clamp(0.0, 1.0) * 255.0).round() as u8
            }
        };
        Self::from_rgba(to_byte(rgba[0]), to_byte(rgba[1]), to_byte(rgba[2]), to_byte(rgba[3]))
    }

    pub fn to_normalized(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| f32::from(c) / 255.0)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

// Callers check `is_ascii_hexdigit` first.
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
