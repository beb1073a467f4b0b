//! Core error types

use thiserror::Error;

/// Errors raised by core primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A state machine received an event its current state does not handle
    #[error("no transition from state {state} on event {event}")]
    InvalidTransition { state: String, event: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
