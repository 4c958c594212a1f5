//! Marquee Core
//!
//! The scroll-animation state machine behind auto-scrolling text:
//!
//! - **Configuration**: Validated [`MarqueeConfig`] with bouncing and endless modes
//! - **Viewport**: The [`Viewport`] trait the host toolkit implements
//! - **Animator**: [`ScrollAnimator`], the tick-driven cycle runner
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_core::{MarqueeConfig, ScrollAnimator};
//!
//! let config = MarqueeConfig::builder("Breaking news: Rust is fun")
//!     .velocity(60.0)
//!     .pause_between(std::time::Duration::from_secs(1))
//!     .build()?;
//!
//! // Inside a tokio LocalSet
//! let animator = ScrollAnimator::attach(config, viewport, ticker);
//!
//! // From the host's frame callback
//! animator.on_tick(elapsed);
//! ```

pub mod animator;
pub mod config;
pub mod error;
pub mod viewport;

pub use animator::{scroll_duration, ScrollAnimator};
pub use config::{
    MarqueeConfig, MarqueeConfigBuilder, ScrollMode, DEFAULT_INTERVAL_SPACES, DEFAULT_VELOCITY,
    SEPARATOR_GLYPH,
};
pub use error::{ConfigError, Result};
pub use viewport::{ScrollMetrics, Viewport};

pub use marquee_animation::{Easing, TickSource};
