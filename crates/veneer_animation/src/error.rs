//! Timer error types

use thiserror::Error;

/// Errors raised by the periodic timer primitive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The timer could not be armed
    #[error("Failed to create timer: {0}")]
    Create(String),

    /// The timer could not be disarmed and was not already gone
    #[error("Failed to delete timer: {0}")]
    Delete(String),
}

/// Result type for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;
