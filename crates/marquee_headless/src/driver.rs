//! Frame loop for headless hosts
//!
//! Stands in for a display-synchronized frame callback: every frame the
//! driver asks the tick source whether ticks are wanted and, if so, calls
//! [`ScrollAnimator::on_tick`] with the time since the driver was created.

use std::time::Duration;

use marquee_core::{ScrollAnimator, TickSource, Viewport};
use tokio::time::{Instant, MissedTickBehavior};

/// Fixed-rate frame loop on the tokio clock
#[derive(Debug)]
pub struct FrameDriver {
    frame_interval: Duration,
    origin: Instant,
    frame_count: u64,
    tick_count: u64,
}

impl FrameDriver {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            origin: Instant::now(),
            frame_count: 0,
            tick_count: 0,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Time since the driver was created
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Frames produced so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames that were delivered to the animator
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Produce frames for `span`, returning how many reached the animator.
    pub async fn run_for<V, T>(&mut self, animator: &ScrollAnimator<V, T>, span: Duration) -> u64
    where
        V: Viewport + 'static,
        T: TickSource + 'static,
    {
        let deadline = Instant::now() + span;
        let mut interval = tokio::time::interval(self.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut delivered = 0;
        loop {
            let frame = interval.tick().await;
            if frame > deadline {
                break;
            }
            self.frame_count += 1;

            if animator.ticker().is_active() {
                animator.on_tick(self.origin.elapsed());
                delivered += 1;
            }
        }

        self.tick_count += delivered;
        delivered
    }
}
