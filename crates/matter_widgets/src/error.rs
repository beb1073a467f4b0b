//! Widget error types

use thiserror::Error;

use crate::state::ControlState;

/// Errors raised by widget configuration calls
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The widget keeps no styles for this control state
    #[error("{widget} does not support control state {state:?}")]
    InvalidState {
        widget: &'static str,
        state: ControlState,
    },

    /// An argument broke the documented contract (non-finite or negative geometry)
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A widget configuration file could not be parsed
    #[error("widget config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
