//! Headless marquee simulation

use std::time::Duration;

use anyhow::{Context, Result};
use marquee_core::TickSource;
use marquee_headless::{HeadlessMarquee, ScrollEvent, TimedEvent};
use tokio::task::LocalSet;

use crate::config::MarqueeFile;

/// Options for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulateOptions {
    pub duration: Duration,
    /// Run on the wall clock instead of a paused virtual clock
    pub realtime: bool,
}

/// Outcome of a simulation run
#[derive(Debug)]
pub struct SimulationReport {
    pub events: Vec<TimedEvent>,
    pub cycles: u32,
    pub frames: u64,
    pub ticks: u64,
    pub ticker_active: bool,
}

/// Run the animator against a headless viewport
pub fn run(file: MarqueeFile, options: SimulateOptions) -> Result<SimulationReport> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(!options.realtime)
        .build()
        .context("Failed to build runtime")?;

    let local = LocalSet::new();
    let report = local.block_on(&runtime, async move {
        let mut marquee = HeadlessMarquee::attach(file.marquee, file.viewport);
        marquee.run_for(options.duration).await;

        SimulationReport {
            events: marquee.viewport().timed_events(),
            cycles: marquee.animator().cycle_count(),
            frames: marquee.driver().frame_count(),
            ticks: marquee.driver().tick_count(),
            ticker_active: marquee.ticker().is_active(),
        }
    });

    Ok(report)
}

/// One line per viewport event
pub fn format_event(timed: &TimedEvent) -> String {
    let at = timed.at.as_millis();
    match &timed.event {
        ScrollEvent::Text(text) => {
            format!("{at:>7}ms  text     {:?}", text.replace('\u{00A0}', "·"))
        }
        ScrollEvent::Animate {
            from,
            to,
            duration,
            easing,
        } => format!(
            "{at:>7}ms  animate  {from:.1} -> {to:.1} over {}ms ({easing:?})",
            duration.as_millis()
        ),
        ScrollEvent::Jump { to } => format!("{at:>7}ms  jump     {to:.1}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_runs_on_virtual_clock() {
        let file = MarqueeFile::parse(
            r#"
            [marquee]
            text = "abcdefghijklmnop"
            mode = "bouncing"
            number_of_reps = 2

            [viewport]
            viewport_width = 100.0
            glyph_width = 10.0
            "#,
        )
        .unwrap();

        let report = run(
            file,
            SimulateOptions {
                duration: Duration::from_secs(60),
                realtime: false,
            },
        )
        .unwrap();

        let animations = report
            .events
            .iter()
            .filter(|timed| matches!(timed.event, ScrollEvent::Animate { .. }))
            .count();
        assert_eq!(animations, 4);
        assert_eq!(report.cycles, 2);
        assert!(!report.ticker_active);
        assert!(report.frames >= report.ticks);
    }

    #[test]
    fn test_format_event() {
        let line = format_event(&TimedEvent {
            at: Duration::from_millis(1250),
            event: ScrollEvent::Jump { to: 0.0 },
        });
        assert_eq!(line, "   1250ms  jump     0.0");

        let line = format_event(&TimedEvent {
            at: Duration::ZERO,
            event: ScrollEvent::Text("ab\u{00A0}ab".to_string()),
        });
        assert_eq!(line, "      0ms  text     \"ab·ab\"");
    }
}
