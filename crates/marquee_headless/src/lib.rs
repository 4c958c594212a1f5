//! Headless host for the marquee animator.
//!
//! Provides a window-less implementation of the host collaborators, useful for:
//! - Unit and integration testing of scroll behaviour
//! - Deterministic simulation on tokio's paused clock
//! - The `marquee simulate` command
//!
//! Everything here is single-threaded and must run inside a
//! [`tokio::task::LocalSet`].

pub mod config;
pub mod driver;
pub mod harness;
pub mod viewport;

pub use config::HeadlessConfig;
pub use driver::FrameDriver;
pub use harness::{HeadlessAnimator, HeadlessMarquee};
pub use viewport::{HeadlessViewport, ScrollEvent, TimedEvent};
