//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive scoped to this workspace's crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "rpsyntax=trace",
            LogLevel::Debug => "rpsyntax=debug",
            LogLevel::Info => "rpsyntax=info",
            LogLevel::Warn => "rpsyntax=warn",
            LogLevel::Error => "rpsyntax=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
