//! Theme type definitions and constants.
//!
//! A theme file names a color for each kind of token the highlighter
//! emits, plus the editor background and default foreground. Colors stay
//! as strings until the theme is resolved.

use rpsyntax_common::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the built-in theme, available without any file on disk.
pub const DEFAULT_THEME: &str = "rpsyntax-default";

/// Well-known token kinds.
///
/// Theme files may use other names as well; these are the ones the
/// built-in theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Plain,
    Keyword,
    String,
    Comment,
    Number,
    Type,
    Function,
    Variable,
    Operator,
    Punctuation,
    Attribute,
    Constant,
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Plain,
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Number,
        TokenKind::Type,
        TokenKind::Function,
        TokenKind::Variable,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Attribute,
        TokenKind::Constant,
    ];

    /// Key used for this token in theme files.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Plain => "plain",
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::Type => "type",
            TokenKind::Function => "function",
            TokenKind::Variable => "variable",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Attribute => "attribute",
            TokenKind::Constant => "constant",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme as written on disk. All fields are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFile {
    pub name: Option<String>,
    pub background: String,
    pub foreground: String,
    pub tokens: BTreeMap<String, String>,
}

impl Default for ThemeFile {
    fn default() -> Self {
        Self {
            name: None,
            background: "#ffffff".into(),
            foreground: "#000000".into(),
            tokens: BTreeMap::new(),
        }
    }
}

impl ThemeFile {
    /// The theme shipped with the crate.
    pub fn built_in() -> Self {
        let tokens = [
            (TokenKind::Plain, "#000000"),
            (TokenKind::Keyword, "#aa0d91"),
            (TokenKind::String, "#c41a16"),
            (TokenKind::Comment, "#007400"),
            (TokenKind::Number, "#1c00cf"),
            (TokenKind::Type, "#5c2699"),
            (TokenKind::Function, "#26474b"),
            (TokenKind::Variable, "#3f6e74"),
            (TokenKind::Operator, "#000000"),
            (TokenKind::Punctuation, "#000000"),
            (TokenKind::Attribute, "#836c28"),
            (TokenKind::Constant, "#643820"),
        ]
        .into_iter()
        .map(|(kind, hex)| (kind.as_str().to_string(), hex.to_string()))
        .collect();

        Self {
            name: Some(DEFAULT_THEME.into()),
            background: "#ffffff".into(),
            foreground: "#000000".into(),
            tokens,
        }
    }
}

/// Theme with every color parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub tokens: BTreeMap<String, Color>,
}

impl ResolvedTheme {
    /// Color for a token name, or the foreground if the theme has none.
    pub fn color_for(&self, token: &str) -> Color {
        self.tokens.get(token).copied().unwrap_or(self.foreground)
    }

    pub fn color_for_kind(&self, kind: TokenKind) -> Color {
        self.color_for(kind.as_str())
    }
}
