//! Theme error types

use thiserror::Error;

/// Named-color lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The name was never registered with the store
    #[error("Unknown color: {0}")]
    UnknownColor(String),
}

/// Reasons a customization string is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomizationError {
    #[error("Customization is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Customization holds {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
