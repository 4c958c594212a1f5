//! Marquee configuration
//!
//! A [`MarqueeConfig`] can only be obtained through validation, either from
//! [`MarqueeConfigBuilder::build`] or by deserializing it. Invalid mode/option
//! combinations are rejected up front so the animator never has to care.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default scroll speed in pixels per second
pub const DEFAULT_VELOCITY: f32 = 80.0;

/// Default number of separator glyphs between endless copies
pub const DEFAULT_INTERVAL_SPACES: u32 = 1;

/// Glyph placed between the two copies of endless text (NO-BREAK SPACE)
pub const SEPARATOR_GLYPH: char = '\u{00A0}';

/// Animation policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Scroll to the far end, then back to the start
    Bouncing,
    /// Scroll in one direction forever by duplicating the text
    #[default]
    Endless,
}

/// Validated marquee configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MarqueeConfigFile", into = "MarqueeConfigFile")]
pub struct MarqueeConfig {
    text: String,
    mode: ScrollMode,
    velocity: f32,
    number_of_reps: Option<u32>,
    delay_before: Option<Duration>,
    pause_between: Option<Duration>,
    interval_spaces: Option<u32>,
    pause_on_bounce: Option<Duration>,
}

impl MarqueeConfig {
    /// Start building a configuration for `text`
    pub fn builder(text: impl Into<String>) -> MarqueeConfigBuilder {
        MarqueeConfigBuilder::new(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// Scroll speed in pixels per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn number_of_reps(&self) -> Option<u32> {
        self.number_of_reps
    }

    pub fn delay_before(&self) -> Option<Duration> {
        self.delay_before
    }

    pub fn pause_between(&self) -> Option<Duration> {
        self.pause_between
    }

    pub fn interval_spaces(&self) -> Option<u32> {
        self.interval_spaces
    }

    pub fn pause_on_bounce(&self) -> Option<Duration> {
        self.pause_on_bounce
    }

    /// Separator inserted between the two copies of endless text
    pub fn separator(&self) -> String {
        let count = self.interval_spaces.unwrap_or(DEFAULT_INTERVAL_SPACES) as usize;
        std::iter::repeat(SEPARATOR_GLYPH).take(count).collect()
    }

    /// `text + separator + text`
    pub fn doubled_text(&self) -> String {
        let separator = self.separator();
        let mut doubled = String::with_capacity(self.text.len() * 2 + separator.len());
        doubled.push_str(&self.text);
        doubled.push_str(&separator);
        doubled.push_str(&self.text);
        doubled
    }

    /// Same configuration with different text
    ///
    /// Text never participates in validation, so this cannot fail.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn to_builder(&self) -> MarqueeConfigBuilder {
        MarqueeConfigBuilder {
            text: self.text.clone(),
            mode: self.mode,
            velocity: self.velocity,
            number_of_reps: self.number_of_reps,
            delay_before: self.delay_before,
            pause_between: self.pause_between,
            interval_spaces: self.interval_spaces,
            pause_on_bounce: self.pause_on_bounce,
        }
    }
}

/// Builder for [`MarqueeConfig`]
#[derive(Clone, Debug)]
pub struct MarqueeConfigBuilder {
    text: String,
    mode: ScrollMode,
    velocity: f32,
    number_of_reps: Option<u32>,
    delay_before: Option<Duration>,
    pause_between: Option<Duration>,
    interval_spaces: Option<u32>,
    pause_on_bounce: Option<Duration>,
}

impl MarqueeConfigBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: ScrollMode::default(),
            velocity: DEFAULT_VELOCITY,
            number_of_reps: None,
            delay_before: None,
            pause_between: None,
            interval_spaces: None,
            pause_on_bounce: None,
        }
    }

    pub fn mode(mut self, mode: ScrollMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(ScrollMode::Bouncing)`
    pub fn bouncing(self) -> Self {
        self.mode(ScrollMode::Bouncing)
    }

    /// Shorthand for `mode(ScrollMode::Endless)`
    pub fn endless(self) -> Self {
        self.mode(ScrollMode::Endless)
    }

    /// Set scroll speed in pixels per second
    pub fn velocity(mut self, pixels_per_second: f32) -> Self {
        self.velocity = pixels_per_second;
        self
    }

    /// Cap the number of cycles
    pub fn number_of_reps(mut self, reps: u32) -> Self {
        self.number_of_reps = Some(reps);
        self
    }

    pub fn delay_before(mut self, delay: Duration) -> Self {
        self.delay_before = Some(delay);
        self
    }

    pub fn pause_between(mut self, pause: Duration) -> Self {
        self.pause_between = Some(pause);
        self
    }

    /// Endless mode only
    pub fn interval_spaces(mut self, spaces: u32) -> Self {
        self.interval_spaces = Some(spaces);
        self
    }

    /// Bouncing mode only
    pub fn pause_on_bounce(mut self, pause: Duration) -> Self {
        self.pause_on_bounce = Some(pause);
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<MarqueeConfig> {
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return Err(ConfigError::InvalidVelocity(self.velocity));
        }

        match self.mode {
            ScrollMode::Bouncing if self.interval_spaces.is_some() => {
                return Err(ConfigError::IntervalSpacesInBouncingMode);
            }
            ScrollMode::Endless if self.pause_on_bounce.is_some() => {
                return Err(ConfigError::PauseOnBounceInEndlessMode);
            }
            _ => {}
        }

        Ok(MarqueeConfig {
            text: self.text,
            mode: self.mode,
            velocity: self.velocity,
            number_of_reps: self.number_of_reps,
            delay_before: self.delay_before,
            pause_between: self.pause_between,
            interval_spaces: self.interval_spaces,
            pause_on_bounce: self.pause_on_bounce,
        })
    }
}

// ============================================================================
// Serialized Form
// ============================================================================

/// On-disk shape of a marquee configuration (durations in milliseconds)
#[derive(Debug, Deserialize, Serialize)]
struct MarqueeConfigFile {
    text: String,
    #[serde(default)]
    mode: ScrollMode,
    #[serde(default = "default_velocity")]
    velocity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number_of_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delay_before_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pause_between_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval_spaces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pause_on_bounce_ms: Option<u64>,
}

fn default_velocity() -> f32 {
    DEFAULT_VELOCITY
}

impl TryFrom<MarqueeConfigFile> for MarqueeConfig {
    type Error = ConfigError;

    fn try_from(file: MarqueeConfigFile) -> Result<Self> {
        MarqueeConfigBuilder {
            text: file.text,
            mode: file.mode,
            velocity: file.velocity,
            number_of_reps: file.number_of_reps,
            delay_before: file.delay_before_ms.map(Duration::from_millis),
            pause_between: file.pause_between_ms.map(Duration::from_millis),
            interval_spaces: file.interval_spaces,
            pause_on_bounce: file.pause_on_bounce_ms.map(Duration::from_millis),
        }
        .build()
    }
}

impl From<MarqueeConfig> for MarqueeConfigFile {
    fn from(config: MarqueeConfig) -> Self {
        let millis = |d: Duration| d.as_millis() as u64;
        Self {
            text: config.text,
            mode: config.mode,
            velocity: config.velocity,
            number_of_reps: config.number_of_reps,
            delay_before_ms: config.delay_before.map(millis),
            pause_between_ms: config.pause_between.map(millis),
            interval_spaces: config.interval_spaces,
            pause_on_bounce_ms: config.pause_on_bounce.map(millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarqueeConfig::builder("hello").build().unwrap();
        assert_eq!(config.mode(), ScrollMode::Endless);
        assert_eq!(config.velocity(), 80.0);
        assert_eq!(config.number_of_reps(), None);
        assert_eq!(config.delay_before(), None);
        assert_eq!(config.pause_between(), None);
        assert_eq!(config.separator(), "\u{00A0}");
    }

    #[test]
    fn test_doubled_text_uses_interval_spaces() {
        let config = MarqueeConfig::builder("ab")
            .interval_spaces(3)
            .build()
            .unwrap();
        assert_eq!(config.doubled_text(), "ab\u{00A0}\u{00A0}\u{00A0}ab");
    }

    #[test]
    fn test_zero_interval_spaces_concatenates() {
        let config = MarqueeConfig::builder("ab")
            .interval_spaces(0)
            .build()
            .unwrap();
        assert_eq!(config.doubled_text(), "abab");
    }

    #[test]
    fn test_bouncing_rejects_interval_spaces() {
        let err = MarqueeConfig::builder("ab")
            .bouncing()
            .interval_spaces(2)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::IntervalSpacesInBouncingMode);
    }

    #[test]
    fn test_endless_rejects_pause_on_bounce() {
        let err = MarqueeConfig::builder("ab")
            .pause_on_bounce(Duration::from_millis(200))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::PauseOnBounceInEndlessMode);
    }

    #[test]
    fn test_velocity_must_be_positive() {
        for velocity in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let result = MarqueeConfig::builder("ab").velocity(velocity).build();
            assert!(matches!(result, Err(ConfigError::InvalidVelocity(_))));
        }
    }

    #[test]
    fn test_with_text_keeps_options() {
        let config = MarqueeConfig::builder("old")
            .bouncing()
            .number_of_reps(2)
            .build()
            .unwrap()
            .with_text("new");
        assert_eq!(config.text(), "new");
        assert_eq!(config.mode(), ScrollMode::Bouncing);
        assert_eq!(config.number_of_reps(), Some(2));
    }

    #[test]
    fn test_deserialize_validates() {
        let config: MarqueeConfig = serde_json::from_str(
            r#"{ "text": "news", "mode": "bouncing", "pause_between_ms": 1500 }"#,
        )
        .unwrap();
        assert_eq!(config.mode(), ScrollMode::Bouncing);
        assert_eq!(config.pause_between(), Some(Duration::from_millis(1500)));
        assert_eq!(config.velocity(), DEFAULT_VELOCITY);

        let invalid = serde_json::from_str::<MarqueeConfig>(
            r#"{ "text": "news", "mode": "bouncing", "interval_spaces": 2 }"#,
        );
        assert!(invalid.is_err());
    }

    #[test]
    fn test_serialize_uses_milliseconds() {
        let config = MarqueeConfig::builder("news")
            .delay_before(Duration::from_secs(2))
            .build()
            .unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["delay_before_ms"], 2000);
        assert_eq!(json["mode"], "endless");
        assert!(json.get("pause_between_ms").is_none());
    }
}
