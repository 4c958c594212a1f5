//! Frame tick sources
//!
//! A tick source is the on/off switch for per-frame callbacks. The host owns
//! the actual frame loop and only delivers ticks while the source is active.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Start/stop control over a per-frame callback registration
pub trait TickSource {
    /// Begin delivering ticks. Idempotent.
    fn start(&self);

    /// Stop delivering ticks. Idempotent.
    fn stop(&self);

    fn is_active(&self) -> bool;
}

impl<T: TickSource + ?Sized> TickSource for Rc<T> {
    fn start(&self) {
        (**self).start()
    }

    fn stop(&self) {
        (**self).stop()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

/// Time between two frames at `fps`, treating zero as one frame per second
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / fps.max(1) as u64)
}

/// Tick source for a fixed-rate frame loop
#[derive(Debug)]
pub struct FrameTicker {
    active: Cell<bool>,
    target_fps: u32,
    start_count: Cell<u32>,
    stop_count: Cell<u32>,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::with_target_fps(60)
    }

    pub fn with_target_fps(fps: u32) -> Self {
        Self {
            active: Cell::new(false),
            target_fps: fps.max(1),
            start_count: Cell::new(0),
            stop_count: Cell::new(0),
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Time between two frames at the target rate
    pub fn frame_interval(&self) -> Duration {
        frame_interval(self.target_fps)
    }

    /// Number of inactive -> active transitions so far
    pub fn start_count(&self) -> u32 {
        self.start_count.get()
    }

    /// Number of active -> inactive transitions so far
    pub fn stop_count(&self) -> u32 {
        self.stop_count.get()
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for FrameTicker {
    fn start(&self) {
        if !self.active.replace(true) {
            self.start_count.set(self.start_count.get() + 1);
            tracing::trace!(fps = self.target_fps, "frame ticker started");
        }
    }

    fn stop(&self) {
        if self.active.replace(false) {
            self.stop_count.set(self.stop_count.get() + 1);
            tracing::trace!("frame ticker stopped");
        }
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_idempotent() {
        let ticker = FrameTicker::new();
        assert!(!ticker.is_active());

        ticker.start();
        ticker.start();
        assert!(ticker.is_active());
        assert_eq!(ticker.start_count(), 1);

        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_active());
        assert_eq!(ticker.stop_count(), 1);
    }

    #[test]
    fn test_frame_interval() {
        let ticker = FrameTicker::with_target_fps(50);
        assert_eq!(ticker.frame_interval(), Duration::from_millis(20));

        // A zero rate would never produce frames
        assert_eq!(FrameTicker::with_target_fps(0).target_fps(), 1);
        assert_eq!(frame_interval(0), Duration::from_secs(1));
        assert_eq!(frame_interval(60), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_shared_ticker() {
        let ticker = Rc::new(FrameTicker::new());
        let handle: Rc<FrameTicker> = Rc::clone(&ticker);
        handle.start();
        assert!(ticker.is_active());
    }
}
