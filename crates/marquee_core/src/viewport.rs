//! Host viewport collaborator
//!
//! The animator never renders or measures text itself. It asks the host's
//! horizontal scroll viewport for metrics and drives its offset.

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use marquee_animation::Easing;

/// Snapshot of a horizontal scroll position
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset
    pub current: f32,
    /// Smallest reachable offset (the start)
    pub min: f32,
    /// Largest reachable offset
    pub max: f32,
    /// Visible width
    pub viewport: f32,
}

impl ScrollMetrics {
    /// Distance the content can scroll (content width - viewport width)
    pub fn scroll_extent(&self) -> f32 {
        self.max - self.min
    }

    /// Total content width
    pub fn content_extent(&self) -> f32 {
        self.scroll_extent() + self.viewport
    }

    /// Whether the content overflows the viewport
    pub fn needs_scrolling(&self) -> bool {
        self.scroll_extent() > 0.0
    }
}

/// A scrollable, measurable text viewport provided by the host toolkit
pub trait Viewport {
    /// Measure the current layout. Only meaningful while [`is_live`](Self::is_live).
    fn metrics(&self) -> ScrollMetrics;

    /// Animate the offset to `offset` over `duration`.
    ///
    /// Resolves when the host's animation driver finishes or interrupts the
    /// animation (for example because of a [`jump_to`](Self::jump_to)).
    fn animate_to(
        &self,
        offset: f32,
        duration: Duration,
        easing: Easing,
    ) -> impl Future<Output = ()>;

    /// Move the offset instantly, cancelling any running animation
    fn jump_to(&self, offset: f32);

    /// Attached and backed by a surface that can be measured and scrolled
    fn is_live(&self) -> bool;

    /// Lay out `text` as the viewport's content
    fn set_text(&self, text: &str);
}

impl<V: Viewport> Viewport for Rc<V> {
    fn metrics(&self) -> ScrollMetrics {
        (**self).metrics()
    }

    fn animate_to(
        &self,
        offset: f32,
        duration: Duration,
        easing: Easing,
    ) -> impl Future<Output = ()> {
        (**self).animate_to(offset, duration, easing)
    }

    fn jump_to(&self, offset: f32) {
        (**self).jump_to(offset)
    }

    fn is_live(&self) -> bool {
        (**self).is_live()
    }

    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_extents() {
        let metrics = ScrollMetrics {
            current: 0.0,
            min: 0.0,
            max: 60.0,
            viewport: 100.0,
        };
        assert_eq!(metrics.scroll_extent(), 60.0);
        assert_eq!(metrics.content_extent(), 160.0);
        assert!(metrics.needs_scrolling());
    }

    #[test]
    fn test_fitting_content_does_not_scroll() {
        let metrics = ScrollMetrics {
            viewport: 100.0,
            ..Default::default()
        };
        assert!(!metrics.needs_scrolling());
        assert_eq!(metrics.content_extent(), 100.0);
    }
}
