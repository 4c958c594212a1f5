//! Marquee Animation Primitives
//!
//! Building blocks shared by the scroll animator and its hosts.
//!
//! # Features
//!
//! - **Easing**: Curve applied to offset animations
//! - **Tweens**: Time-based offset interpolation sampled per frame
//! - **Tick Sources**: Start/stop control over a host's frame callbacks

pub mod easing;
pub mod ticker;
pub mod tween;

pub use easing::Easing;
pub use ticker::{frame_interval, FrameTicker, TickSource};
pub use tween::OffsetTween;
