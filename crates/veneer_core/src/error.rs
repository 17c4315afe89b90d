//! Surface error types

use thiserror::Error;
use veneer_animation::TimerError;
use veneer_theme::ThemeError;

/// Errors surfaced to the owner of a [`Surface`](crate::Surface)
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// A property change that would leave the surface inconsistent
    #[error("Invalid surface configuration: {0}")]
    Configuration(String),

    /// The shared animation timer could not be started or stopped
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// A skin looked up a color it never registered
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Surface configuration file could not be parsed
    #[error("Failed to parse surface config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize surface config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
