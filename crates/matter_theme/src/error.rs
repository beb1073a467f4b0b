//! Theme error types

use thiserror::Error;

/// Errors raised while building color schemes from configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The configuration text is not valid TOML for a scheme
    #[error("scheme config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color entry is not a `#RRGGBB` / `#RRGGBBAA` string
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor { field: String, value: String },

    /// A color entry names no known token
    #[error("unknown color token `{0}`")]
    UnknownToken(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
