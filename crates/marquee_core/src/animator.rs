//! Scroll animation state machine
//!
//! [`ScrollAnimator`] decides, once per frame, whether a new scroll cycle
//! should start and runs each cycle as a local async task that drives the
//! host [`Viewport`].
//!
//! # Lifecycle
//!
//! ```text
//! attach ──► [delay_before] ──► ticker started
//!                                  │
//!        on_tick ◄─────────────────┘
//!          ├─ not live          ──► ticker stopped
//!          ├─ reps exhausted    ──► ticker stopped
//!          └─ idle              ──► spawn cycle (endless | bouncing)
//! ```
//!
//! Cycles are never aborted. Every resumption point re-checks liveness and
//! the reset epoch, so a continuation that outlives a reset or a
//! detach becomes a no-op.
//!
//! The animator spawns with [`tokio::task::spawn_local`]; it must be attached
//! and ticked from inside a [`tokio::task::LocalSet`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use marquee_animation::{Easing, TickSource};
use tokio::task::JoinHandle;

use crate::config::{MarqueeConfig, ScrollMode};
use crate::viewport::Viewport;

/// Time needed to scroll `extent` pixels at `velocity` pixels per second,
/// rounded to the nearest millisecond
pub fn scroll_duration(extent: f32, velocity: f32) -> Duration {
    let millis = (extent as f64 * 1000.0 / velocity as f64).round();
    if !millis.is_finite() || millis <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_millis(millis as u64)
}

/// Changes the displayed text or the meaning of `cycle_count`
fn resets_run_state(current: &MarqueeConfig, next: &MarqueeConfig) -> bool {
    current.text() != next.text()
        || current.mode() != next.mode()
        || current.interval_spaces() != next.interval_spaces()
        || current.number_of_reps() != next.number_of_reps()
}

/// Endless-mode display state: the doubled text plus the content width
/// measured before it was laid out
#[derive(Clone, Debug, PartialEq)]
struct DoubledText {
    text: String,
    baseline_extent: f32,
}

#[derive(Debug, Default)]
struct RunState {
    /// A cycle is in flight
    running: bool,
    /// Cycles started since attach or the last reset
    cycle_count: u32,
    doubled: Option<DoubledText>,
}

struct Inner<V, T> {
    config: RefCell<MarqueeConfig>,
    viewport: V,
    ticker: T,
    attached: Cell<bool>,
    /// Set once the startup delay has elapsed
    started: Cell<bool>,
    /// Bumped on every reset and on detach
    epoch: Cell<u64>,
    state: RefCell<RunState>,
}

/// Drives auto-scrolling of overflowing text
pub struct ScrollAnimator<V, T>
where
    V: Viewport + 'static,
    T: TickSource + 'static,
{
    inner: Rc<Inner<V, T>>,
    startup: RefCell<Option<JoinHandle<()>>>,
}

impl<V, T> ScrollAnimator<V, T>
where
    V: Viewport + 'static,
    T: TickSource + 'static,
{
    /// Attach to a viewport and schedule the startup sequence.
    ///
    /// The tick source is started once `delay_before` (if any) has elapsed,
    /// provided the animator is still attached by then.
    pub fn attach(config: MarqueeConfig, viewport: V, ticker: T) -> Self {
        let delay = config.delay_before();
        viewport.set_text(config.text());

        tracing::debug!(
            mode = ?config.mode(),
            velocity = config.velocity(),
            reps = ?config.number_of_reps(),
            "attaching scroll animator"
        );

        let inner = Rc::new(Inner {
            config: RefCell::new(config),
            viewport,
            ticker,
            attached: Cell::new(true),
            started: Cell::new(false),
            epoch: Cell::new(0),
            state: RefCell::new(RunState::default()),
        });

        let startup_inner = Rc::clone(&inner);
        let startup = tokio::task::spawn_local(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if !startup_inner.attached.get() {
                return;
            }
            startup_inner.started.set(true);
            startup_inner.ticker.start();
        });

        Self {
            inner,
            startup: RefCell::new(Some(startup)),
        }
    }

    /// Per-frame callback. Never blocks; a new cycle is spawned as a task.
    pub fn on_tick(&self, elapsed: Duration) {
        let inner = &self.inner;

        if !inner.is_live() {
            inner.ticker.stop();
            return;
        }

        if inner.reps_exhausted() {
            tracing::debug!(
                cycles = inner.state.borrow().cycle_count,
                "repetitions exhausted, stopping ticker"
            );
            inner.ticker.stop();
            return;
        }

        if inner.state.borrow().running {
            return;
        }

        if !inner.ticker.is_active() {
            inner.ticker.start();
        }

        // Claimed before spawning so ticks arriving ahead of the task's
        // first poll cannot launch a second cycle.
        inner.state.borrow_mut().running = true;
        tracing::trace!(?elapsed, "launching scroll cycle");
        tokio::task::spawn_local(Inner::run_cycle(Rc::clone(inner)));
    }

    /// Replace the configuration.
    ///
    /// A different text, mode, separator width or repetition cap resets the
    /// run state. Velocity and pauses take effect from the next cycle.
    pub fn update_config(&self, config: MarqueeConfig) {
        let needs_reset = resets_run_state(&self.inner.config.borrow(), &config);
        *self.inner.config.borrow_mut() = config;
        if needs_reset {
            self.inner.reset();
        }
    }

    /// Replace only the text, keeping every other option
    pub fn set_text(&self, text: impl Into<String>) {
        let config = self.inner.config.borrow().clone().with_text(text);
        self.update_config(config);
    }

    /// Detach from the host. Pending continuations become no-ops.
    pub fn detach(&self) {
        if !self.inner.attached.replace(false) {
            return;
        }

        self.inner.bump_epoch();
        self.inner.ticker.stop();
        if let Some(startup) = self.startup.borrow_mut().take() {
            startup.abort();
        }
        tracing::debug!("scroll animator detached");
    }

    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }

    /// Attached and the viewport can be measured
    pub fn is_live(&self) -> bool {
        self.inner.is_live()
    }

    /// A cycle is currently in flight
    pub fn is_running(&self) -> bool {
        self.inner.state.borrow().running
    }

    /// Cycles started since attach or the last reset
    pub fn cycle_count(&self) -> u32 {
        self.inner.state.borrow().cycle_count
    }

    /// Derived text shown instead of the configured one, if any
    pub fn display_text(&self) -> Option<String> {
        self.inner
            .state
            .borrow()
            .doubled
            .as_ref()
            .map(|d| d.text.clone())
    }

    /// Content width measured when the text was first doubled
    pub fn baseline_extent(&self) -> Option<f32> {
        self.inner
            .state
            .borrow()
            .doubled
            .as_ref()
            .map(|d| d.baseline_extent)
    }

    /// Text the viewport should be showing right now
    pub fn effective_text(&self) -> String {
        self.display_text()
            .unwrap_or_else(|| self.inner.config.borrow().text().to_owned())
    }

    pub fn config(&self) -> MarqueeConfig {
        self.inner.config.borrow().clone()
    }

    pub fn viewport(&self) -> &V {
        &self.inner.viewport
    }

    pub fn ticker(&self) -> &T {
        &self.inner.ticker
    }
}

impl<V, T> Drop for ScrollAnimator<V, T>
where
    V: Viewport + 'static,
    T: TickSource + 'static,
{
    fn drop(&mut self) {
        self.detach();
    }
}

impl<V, T> Inner<V, T>
where
    V: Viewport + 'static,
    T: TickSource + 'static,
{
    fn is_live(&self) -> bool {
        self.attached.get() && self.viewport.is_live()
    }

    /// Live and no reset or detach happened since `epoch` was captured
    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch && self.is_live()
    }

    fn bump_epoch(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }

    fn reps_exhausted(&self) -> bool {
        match self.config.borrow().number_of_reps() {
            Some(reps) => self.state.borrow().cycle_count >= reps,
            None => false,
        }
    }

    fn reset(&self) {
        self.bump_epoch();
        {
            let mut state = self.state.borrow_mut();
            state.cycle_count = 0;
            state.doubled = None;
        }

        let text = self.config.borrow().text().to_owned();
        self.viewport.set_text(&text);

        if self.is_live() {
            let start = self.viewport.metrics().min;
            self.viewport.jump_to(start);
        }

        // A capped marquee that already finished scrolls again
        if self.attached.get() && self.started.get() && !self.ticker.is_active() {
            self.ticker.start();
        }

        tracing::debug!(text_len = text.chars().count(), "configuration changed, run state reset");
    }

    async fn run_cycle(self: Rc<Self>) {
        let epoch = self.epoch.get();

        let admitted = {
            let mut state = self.state.borrow_mut();
            match self.config.borrow().number_of_reps() {
                Some(reps) if state.cycle_count >= reps => false,
                _ => {
                    state.cycle_count += 1;
                    true
                }
            }
        };

        if admitted {
            let mode = self.config.borrow().mode();
            match mode {
                ScrollMode::Endless => self.endless_cycle(epoch).await,
                ScrollMode::Bouncing => self.bouncing_cycle(epoch).await,
            }
        }

        self.state.borrow_mut().running = false;
    }

    async fn endless_cycle(&self, epoch: u64) {
        if !self.is_current(epoch) {
            return;
        }

        let metrics = self.viewport.metrics();

        if !metrics.needs_scrolling() {
            let collapsed = self.state.borrow_mut().doubled.take().is_some();
            if collapsed {
                let text = self.config.borrow().text().to_owned();
                self.viewport.set_text(&text);
                tracing::trace!("content fits again, showing single copy");
            }
            return;
        }

        let baseline = self
            .state
            .borrow()
            .doubled
            .as_ref()
            .map(|d| d.baseline_extent);

        let Some(baseline) = baseline else {
            // The doubled text has to be laid out before the distance of one
            // round can be measured, so this cycle does not animate.
            let text = self.config.borrow().doubled_text();
            self.state.borrow_mut().doubled = Some(DoubledText {
                text: text.clone(),
                baseline_extent: metrics.content_extent(),
            });
            self.viewport.set_text(&text);
            tracing::trace!(
                baseline = metrics.content_extent(),
                "doubling text for endless scroll"
            );
            return;
        };

        let (velocity, pause) = {
            let config = self.config.borrow();
            (config.velocity(), config.pause_between())
        };

        let single_round = metrics.content_extent() - baseline;
        let duration = scroll_duration(single_round, velocity);
        if duration.is_zero() {
            return;
        }

        tracing::trace!(single_round, ?duration, "endless round");
        self.viewport
            .animate_to(metrics.min + single_round, duration, Easing::Linear)
            .await;

        if !self.is_current(epoch) {
            return;
        }
        self.viewport.jump_to(metrics.min);

        if let Some(pause) = pause {
            tokio::time::sleep(pause).await;
        }
    }

    async fn bouncing_cycle(&self, epoch: u64) {
        if !self.is_current(epoch) {
            return;
        }

        let (velocity, pause_on_bounce, pause) = {
            let config = self.config.borrow();
            (
                config.velocity(),
                config.pause_on_bounce(),
                config.pause_between(),
            )
        };

        let metrics = self.viewport.metrics();
        let duration = scroll_duration(metrics.scroll_extent(), velocity);
        if duration.is_zero() {
            return;
        }

        tracing::trace!(extent = metrics.scroll_extent(), ?duration, "bounce");
        self.viewport
            .animate_to(metrics.max, duration, Easing::Linear)
            .await;

        if let Some(pause) = pause_on_bounce {
            tokio::time::sleep(pause).await;
        }

        if !self.is_current(epoch) {
            return;
        }
        self.viewport
            .animate_to(metrics.min, duration, Easing::Linear)
            .await;

        if !self.is_current(epoch) {
            return;
        }
        if let Some(pause) = pause {
            tokio::time::sleep(pause).await;
        }
    }
}
