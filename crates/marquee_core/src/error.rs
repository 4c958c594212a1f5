//! Marquee configuration errors

use thiserror::Error;

/// Contract violations detected while building a [`MarqueeConfig`](crate::MarqueeConfig)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Separator spacing only exists between the duplicated copies of endless mode
    #[error("interval_spaces is only valid in endless mode")]
    IntervalSpacesInBouncingMode,

    /// There is no far end to rest at while scrolling endlessly
    #[error("pause_on_bounce is only valid in bouncing mode")]
    PauseOnBounceInEndlessMode,

    /// Velocity must be finite and strictly positive
    #[error("velocity must be a positive number of pixels per second, got {0}")]
    InvalidVelocity(f32),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
