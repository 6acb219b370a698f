pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, RpSyntaxError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, RpSyntaxError>;
