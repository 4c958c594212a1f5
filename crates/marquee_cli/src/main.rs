//! Marquee CLI
//!
//! Create, validate and simulate marquee configurations without a GUI.

mod config;
mod simulate;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{resolve_path, MarqueeFile};
use crate::simulate::SimulateOptions;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Auto-scrolling text animator toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter marquee.toml
    Init {
        /// Target file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a configuration file
    Check {
        /// Configuration file or directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Run the animator against a headless viewport and print every scroll call
    Simulate {
        /// Configuration file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Override the simulated duration
        #[arg(long)]
        duration_ms: Option<u64>,

        /// Override the frame rate
        #[arg(long)]
        fps: Option<u32>,

        /// Use the wall clock instead of a virtual one
        #[arg(long)]
        realtime: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { path, force } => cmd_init(path, force),
        Commands::Check { path } => cmd_check(path),
        Commands::Simulate {
            path,
            duration_ms,
            fps,
            realtime,
        } => cmd_simulate(path, duration_ms, fps, realtime),
    }
}

fn cmd_init(path: PathBuf, force: bool) -> Result<()> {
    let target = resolve_path(&path);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            target.display()
        );
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = MarqueeFile::starter()?.to_toml()?;
    fs::write(&target, content).with_context(|| format!("Failed to write {}", target.display()))?;

    tracing::info!("Created {}", target.display());
    Ok(())
}

fn cmd_check(path: PathBuf) -> Result<()> {
    let file = MarqueeFile::load(&path)?;
    let marquee = &file.marquee;

    println!("{} is valid", resolve_path(&path).display());
    println!("  mode:      {:?}", marquee.mode());
    println!("  velocity:  {} px/s", marquee.velocity());
    match marquee.number_of_reps() {
        Some(reps) => println!("  reps:      {reps}"),
        None => println!("  reps:      unlimited"),
    }

    let content_width = file.viewport.measure(marquee.text());
    if content_width <= file.viewport.viewport_width {
        tracing::warn!(
            "text is {content_width}px wide and fits the {}px viewport; it will not scroll",
            file.viewport.viewport_width
        );
    }

    Ok(())
}

fn cmd_simulate(
    path: PathBuf,
    duration_ms: Option<u64>,
    fps: Option<u32>,
    realtime: bool,
) -> Result<()> {
    let mut file = MarqueeFile::load(&path)?;
    if let Some(fps) = fps {
        file.viewport = file.viewport.with_fps(fps);
    }

    let duration = Duration::from_millis(duration_ms.unwrap_or(file.simulation.duration_ms));
    tracing::info!(
        "Simulating {} for {}ms at {} fps",
        resolve_path(&path).display(),
        duration.as_millis(),
        file.viewport.fps
    );

    let report = simulate::run(file, SimulateOptions { duration, realtime })?;

    for event in &report.events {
        println!("{}", simulate::format_event(event));
    }
    println!(
        "{} cycles, {} of {} frames ticked, ticker {}",
        report.cycles,
        report.ticks,
        report.frames,
        if report.ticker_active {
            "running"
        } else {
            "stopped"
        }
    );

    Ok(())
}
