//! Headless host configuration

use serde::{Deserialize, Serialize};

/// Geometry and frame rate of a headless marquee host
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HeadlessConfig {
    /// Visible width in logical pixels
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    /// Advance of every glyph in logical pixels
    #[serde(default = "default_glyph_width")]
    pub glyph_width: f32,
    /// Frames per second delivered to the animator
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_viewport_width() -> f32 {
    200.0
}

fn default_glyph_width() -> f32 {
    8.0
}

fn default_fps() -> u32 {
    60
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            glyph_width: default_glyph_width(),
            fps: default_fps(),
        }
    }
}

impl HeadlessConfig {
    /// Create a new config with the given viewport and glyph widths.
    pub fn new(viewport_width: f32, glyph_width: f32) -> Self {
        Self {
            viewport_width,
            glyph_width,
            ..Default::default()
        }
    }

    /// Set the frame rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Width of `text` laid out with fixed-advance glyphs.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }
}
