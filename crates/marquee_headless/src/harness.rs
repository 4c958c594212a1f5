//! A complete headless marquee: animator, viewport, ticker and frame loop
//!
//! # Example
//!
//! ```rust,ignore
//! let local = tokio::task::LocalSet::new();
//! local.run_until(async {
//!     let config = MarqueeConfig::builder("Hello, marquee").bouncing().build()?;
//!     let mut marquee = HeadlessMarquee::attach(config, HeadlessConfig::new(80.0, 8.0));
//!     marquee.run_for(Duration::from_secs(5)).await;
//!     println!("{:?}", marquee.viewport().events());
//! }).await;
//! ```

use std::rc::Rc;
use std::time::Duration;

use marquee_animation::FrameTicker;
use marquee_core::{MarqueeConfig, ScrollAnimator};

use crate::config::HeadlessConfig;
use crate::driver::FrameDriver;
use crate::viewport::HeadlessViewport;

/// Animator type used by headless hosts
pub type HeadlessAnimator = ScrollAnimator<Rc<HeadlessViewport>, Rc<FrameTicker>>;

/// Headless marquee host
pub struct HeadlessMarquee {
    animator: HeadlessAnimator,
    viewport: Rc<HeadlessViewport>,
    ticker: Rc<FrameTicker>,
    driver: FrameDriver,
}

impl HeadlessMarquee {
    /// Attach a new animator. Must be called inside a `LocalSet`.
    pub fn attach(config: MarqueeConfig, host: HeadlessConfig) -> Self {
        let fps = host.fps;
        let viewport = Rc::new(HeadlessViewport::new(host));
        let ticker = Rc::new(FrameTicker::with_target_fps(fps));
        let driver = FrameDriver::new(ticker.frame_interval());
        let animator = ScrollAnimator::attach(config, Rc::clone(&viewport), Rc::clone(&ticker));

        Self {
            animator,
            viewport,
            ticker,
            driver,
        }
    }

    pub fn animator(&self) -> &HeadlessAnimator {
        &self.animator
    }

    pub fn viewport(&self) -> &HeadlessViewport {
        &self.viewport
    }

    pub fn ticker(&self) -> &FrameTicker {
        &self.ticker
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    /// Run the frame loop for `span` of (virtual) time
    pub async fn run_for(&mut self, span: Duration) -> u64 {
        self.driver.run_for(&self.animator, span).await
    }

    /// Change the marquee text, as a host would when its input changes
    pub fn set_text(&self, text: impl Into<String>) {
        self.animator.set_text(text);
    }

    /// Detach the animator while keeping the viewport around for inspection
    pub fn detach(&self) {
        self.animator.detach();
    }
}
