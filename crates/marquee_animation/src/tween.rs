//! Time-based offset interpolation
//!
//! An [`OffsetTween`] moves a scroll offset from one value to another over a
//! fixed duration. Hosts seek it to the elapsed time once per frame and read
//! back the eased value.

use std::time::Duration;

use crate::easing::Easing;

/// A single scroll offset animation
#[derive(Clone, Debug)]
pub struct OffsetTween {
    from: f32,
    to: f32,
    duration_ms: f32,
    current_time: f32,
    easing: Easing,
    playing: bool,
}

impl OffsetTween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        let duration_ms = duration.as_secs_f32() * 1000.0;
        Self {
            from,
            to,
            duration_ms,
            current_time: 0.0,
            easing,
            // Zero-length tweens land on their target immediately
            playing: duration_ms > 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Progress in 0.0..=1.0
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current interpolated offset
    pub fn value(&self) -> f32 {
        if !self.playing && self.progress() >= 1.0 {
            return self.to;
        }
        self.easing.interpolate(self.from, self.to, self.progress())
    }

    /// Jump the tween to an absolute elapsed time
    pub fn seek(&mut self, elapsed: Duration) {
        self.current_time = (elapsed.as_secs_f32() * 1000.0).min(self.duration_ms);
        self.playing = self.current_time < self.duration_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = OffsetTween::new(0.0, 100.0, Duration::from_millis(500), Easing::Linear);
        assert!(tween.is_playing());

        tween.seek(Duration::from_millis(250));
        assert_eq!(tween.value(), 50.0);

        tween.seek(Duration::from_millis(650));
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), 100.0);
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let tween = OffsetTween::new(10.0, 40.0, Duration::ZERO, Easing::Linear);
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), 40.0);
    }

    #[test]
    fn test_seek_backwards_resumes() {
        let mut tween = OffsetTween::new(0.0, 80.0, Duration::from_secs(1), Easing::Linear);
        tween.seek(Duration::from_secs(2));
        assert!(!tween.is_playing());

        tween.seek(Duration::from_millis(250));
        assert!(tween.is_playing());
        assert_eq!(tween.value(), 20.0);
    }
}
