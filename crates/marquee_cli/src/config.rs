//! Marquee configuration file handling

use anyhow::{Context, Result};
use marquee_core::MarqueeConfig;
use marquee_headless::HeadlessConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE: &str = "marquee.toml";

/// Top-level configuration (marquee.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct MarqueeFile {
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub viewport: HeadlessConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Simulation settings
#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// How long to run the frame loop
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    10_000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

/// Resolve a file or directory argument to the configuration file path
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}

impl MarqueeFile {
    /// Load configuration from a file, or from marquee.toml inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = resolve_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `marquee init` to create one.",
                CONFIG_FILE,
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Starter configuration written by `marquee init`
    pub fn starter() -> Result<Self> {
        let marquee = MarqueeConfig::builder("Breaking: this sentence is too long to fit")
            .interval_spaces(4)
            .pause_between(std::time::Duration::from_millis(1000))
            .build()?;

        Ok(Self {
            marquee,
            viewport: HeadlessConfig::default(),
            simulation: SimulationConfig::default(),
        })
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
