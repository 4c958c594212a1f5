//! Easing curves for scroll offset animations

/// Easing curve applied to a tween's progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// Constant velocity. Marquee cycles always scroll with this curve.
    #[default]
    Linear,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
        }
    }

    /// Interpolate between `from` and `to` at progress `t`
    pub fn interpolate(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        assert_eq!(Easing::default().apply(0.0), 0.0);
        assert_eq!(Easing::default().apply(1.0), 1.0);
    }

    #[test]
    fn test_linear_interpolation() {
        assert_eq!(Easing::Linear.interpolate(0.0, 120.0, 0.25), 30.0);
        assert_eq!(Easing::Linear.interpolate(120.0, 0.0, 0.5), 60.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.apply(-0.2), 0.0);
    }
}
