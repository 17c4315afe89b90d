//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The host has no native window yet
    #[error("Host has no window handle")]
    NoHandle,

    /// The host cannot own chrome (not a top-level window)
    #[error("Host is not a top-level container")]
    NotContainer,

    /// Operation not supported by this host
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Native window operation failed
    #[error("Window operation failed: {0}")]
    WindowOperation(String),

    /// Failed to create event loop
    #[error("Failed to create event loop: {0}")]
    EventLoop(String),

    /// Failed to create window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
