//! Headless scroll viewport
//!
//! Implements [`Viewport`] without a window: text is measured with a fixed
//! glyph advance, animations are [`OffsetTween`]s stepped once per frame on
//! the tokio clock, and every call the animator makes is appended to an
//! event log that tests and the CLI can inspect.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use marquee_animation::{frame_interval, Easing, OffsetTween};
use marquee_core::{ScrollMetrics, Viewport};
use tokio::time::Instant;

use crate::config::HeadlessConfig;

/// A call made on the viewport, in order of arrival
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollEvent {
    /// New content was laid out
    Text(String),
    /// An animated scroll started
    Animate {
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
    },
    /// The offset was moved instantly
    Jump { to: f32 },
}

/// A [`ScrollEvent`] with the virtual time it happened at
#[derive(Clone, Debug, PartialEq)]
pub struct TimedEvent {
    /// Time since the viewport was created
    pub at: Duration,
    pub event: ScrollEvent,
}

/// Window-less horizontal scroll viewport
pub struct HeadlessViewport {
    config: HeadlessConfig,
    text: RefCell<String>,
    offset: Cell<f32>,
    live: Cell<bool>,
    /// Bumped by jumps so a running animation knows it was interrupted
    generation: Cell<u64>,
    created: Instant,
    events: RefCell<Vec<TimedEvent>>,
}

impl HeadlessViewport {
    pub fn new(config: HeadlessConfig) -> Self {
        Self {
            config,
            text: RefCell::new(String::new()),
            offset: Cell::new(0.0),
            live: Cell::new(true),
            generation: Cell::new(0),
            created: Instant::now(),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &HeadlessConfig {
        &self.config
    }

    /// Currently laid out text
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn content_width(&self) -> f32 {
        self.config.measure(&self.text.borrow())
    }

    /// Simulate the surface being attached or torn down
    pub fn set_live(&self, live: bool) {
        self.live.set(live);
    }

    /// Every call so far, with timestamps
    pub fn timed_events(&self) -> Vec<TimedEvent> {
        self.events.borrow().clone()
    }

    /// Every call so far
    pub fn events(&self) -> Vec<ScrollEvent> {
        self.events
            .borrow()
            .iter()
            .map(|timed| timed.event.clone())
            .collect()
    }

    /// Only the animated scrolls
    pub fn animations(&self) -> Vec<ScrollEvent> {
        self.events()
            .into_iter()
            .filter(|event| matches!(event, ScrollEvent::Animate { .. }))
            .collect()
    }

    /// Only the instant jumps
    pub fn jumps(&self) -> Vec<f32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ScrollEvent::Jump { to } => Some(to),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: ScrollEvent) {
        self.events.borrow_mut().push(TimedEvent {
            at: self.created.elapsed(),
            event,
        });
    }

    fn max_offset(&self) -> f32 {
        (self.content_width() - self.config.viewport_width).max(0.0)
    }

    fn frame_interval(&self) -> Duration {
        frame_interval(self.config.fps)
    }
}

impl Viewport for HeadlessViewport {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            current: self.offset.get(),
            min: 0.0,
            max: self.max_offset(),
            viewport: self.config.viewport_width,
        }
    }

    async fn animate_to(&self, offset: f32, duration: Duration, easing: Easing) {
        let from = self.offset.get();
        self.record(ScrollEvent::Animate {
            from,
            to: offset,
            duration,
            easing,
        });

        let generation = self.generation.get();
        let started = Instant::now();
        let mut tween = OffsetTween::new(from, offset, duration, easing);

        while tween.is_playing() {
            tokio::time::sleep(self.frame_interval()).await;
            if self.generation.get() != generation {
                tracing::trace!(offset = self.offset.get(), "animation interrupted");
                return;
            }
            tween.seek(started.elapsed());
            self.offset.set(tween.value());
        }

        self.offset.set(tween.value());
    }

    fn jump_to(&self, offset: f32) {
        self.generation.set(self.generation.get() + 1);
        self.offset.set(offset);
        self.record(ScrollEvent::Jump { to: offset });
    }

    fn is_live(&self) -> bool {
        self.live.get()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
        // Layout clamps the position into the new scroll range
        let max = self.max_offset();
        if self.offset.get() > max {
            self.offset.set(max);
        }
        self.record(ScrollEvent::Text(text.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_from_text() {
        let viewport = HeadlessViewport::new(HeadlessConfig::new(100.0, 10.0));
        viewport.set_text("abcdefghijklmnop");

        let metrics = viewport.metrics();
        assert_eq!(metrics.max, 60.0);
        assert_eq!(metrics.content_extent(), 160.0);

        viewport.set_text("short");
        assert_eq!(viewport.metrics().max, 0.0);
    }

    #[test]
    fn test_set_text_clamps_offset() {
        let viewport = HeadlessViewport::new(HeadlessConfig::new(100.0, 10.0));
        viewport.set_text("abcdefghijklmnop");
        viewport.jump_to(60.0);

        viewport.set_text("abcdefghijkl");
        assert_eq!(viewport.offset(), 20.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_reaches_target() {
        let viewport = HeadlessViewport::new(HeadlessConfig::new(100.0, 10.0));
        viewport.set_text("abcdefghijklmnop");

        viewport
            .animate_to(60.0, Duration::from_millis(500), Easing::Linear)
            .await;

        assert_eq!(viewport.offset(), 60.0);
        assert_eq!(
            viewport.animations(),
            vec![ScrollEvent::Animate {
                from: 0.0,
                to: 60.0,
                duration: Duration::from_millis(500),
                easing: Easing::Linear,
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_jump_interrupts_animation() {
        let viewport = HeadlessViewport::new(HeadlessConfig::new(100.0, 10.0));
        viewport.set_text("abcdefghijklmnop");

        let animation = viewport.animate_to(60.0, Duration::from_secs(1), Easing::Linear);
        let interrupt = async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            viewport.jump_to(0.0);
        };
        tokio::join!(animation, interrupt);

        assert_eq!(viewport.offset(), 0.0);
        assert_eq!(viewport.jumps(), vec![0.0]);
    }
}
