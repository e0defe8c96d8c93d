//! Glide CLI
//!
//! Inspect and simulate cursor-driven carousel geometry.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use glide_core::{
    compute_translation_with, CarouselConfig, TrackGeometry, Transform, Translation,
};

mod config;
mod simulate;

use simulate::{Scene, Step};

#[derive(Parser)]
#[command(name = "glide")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cursor-driven carousel geometry tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./glide.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the strip translation for one pointer position
    Compute {
        /// Window region width in pixels
        #[arg(long)]
        window_width: f64,

        /// Strip content width in pixels
        #[arg(long)]
        content_width: f64,

        /// Pointer client X
        #[arg(long, allow_negative_numbers = true)]
        pointer_x: f64,

        /// Window region left edge in client coordinates
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        window_left: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Tabulate translation across the window and a little beyond
    Sweep {
        /// Window region width in pixels
        #[arg(long)]
        window_width: f64,

        /// Strip content width in pixels
        #[arg(long)]
        content_width: f64,

        /// Number of intervals across the window
        #[arg(long, default_value = "10")]
        steps: u32,
    },

    /// Replay a pointer trace against a headless page
    Simulate {
        /// Window region width in pixels
        #[arg(long)]
        window_width: f64,

        /// Strip content width in pixels
        #[arg(long)]
        content_width: f64,

        /// Window region left edge in client coordinates
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        window_left: f64,

        /// Pointer X positions; `leave` emits a pointer-leave
        #[arg(required = true, allow_negative_numbers = true)]
        trace: Vec<Step>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Serialize)]
struct ComputeReport {
    pointer_x: f64,
    window_left: f64,
    window_width: f64,
    content_width: f64,
    scrollable_width: f64,
    sensitivity: f64,
    outcome: &'static str,
    translate: Option<f64>,
    transform: Option<String>,
}

impl ComputeReport {
    fn new(pointer_x: f64, geometry: TrackGeometry, sensitivity: f64) -> Self {
        let translation = compute_translation_with(pointer_x, &geometry, sensitivity);
        let outcome = match translation {
            Translation::Rest => "rest",
            Translation::Offset(_) => "offset",
            Translation::Unavailable => "unavailable",
        };
        let translate = translation.offset();
        Self {
            pointer_x,
            window_left: geometry.window_left,
            window_width: geometry.window_width,
            content_width: geometry.content_width,
            scrollable_width: geometry.scrollable_width(),
            sensitivity,
            outcome,
            translate,
            transform: translate.map(|x| Transform::translate_x(x).to_string()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Compute {
            window_width,
            content_width,
            pointer_x,
            window_left,
            json,
        } => cmd_compute(
            &config,
            TrackGeometry::new(window_left, window_width, content_width),
            pointer_x,
            json,
        ),

        Commands::Sweep {
            window_width,
            content_width,
            steps,
        } => cmd_sweep(
            &config,
            TrackGeometry::new(0.0, window_width, content_width),
            steps,
        ),

        Commands::Simulate {
            window_width,
            content_width,
            window_left,
            trace,
        } => cmd_simulate(
            &config,
            Scene {
                window_left,
                window_width,
                content_width,
            },
            &trace,
        ),

        Commands::Config => cmd_config(&config),
    }
}

fn cmd_compute(
    config: &CarouselConfig,
    geometry: TrackGeometry,
    pointer_x: f64,
    json: bool,
) -> Result<()> {
    let report = ComputeReport::new(pointer_x, geometry, config.sensitivity);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.transform {
        Some(transform) => println!("{} ({})", transform, report.outcome),
        None => println!("no change (window has no usable width)"),
    }
    Ok(())
}

fn cmd_sweep(config: &CarouselConfig, geometry: TrackGeometry, steps: u32) -> Result<()> {
    let steps = steps.max(1);
    let width = geometry.window_width;
    let margin = width * 0.1;

    info!(
        "Sweeping {}px window over {}px strip (sensitivity {})",
        width, geometry.content_width, config.sensitivity
    );

    println!("{:>12}  {:>12}", "pointer_x", "translate_x");
    let points = std::iter::once(-margin)
        .chain((0..=steps).map(|i| width * i as f64 / steps as f64))
        .chain(std::iter::once(width + margin));
    for x in points {
        let translation = compute_translation_with(x, &geometry, config.sensitivity);
        match translation.offset() {
            Some(t) => println!("{:>12.2}  {:>12.2}", x, t),
            None => println!("{:>12.2}  {:>12}", x, "-"),
        }
    }
    Ok(())
}

fn cmd_simulate(config: &CarouselConfig, scene: Scene, trace: &[Step]) -> Result<()> {
    let styles = simulate::run(scene, config, trace)?;
    for (step, style) in trace.iter().zip(&styles) {
        println!("{:<14} {}", step.to_string(), style.to_css());
    }
    Ok(())
}

fn cmd_config(config: &CarouselConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_simulate_trace() {
        let cli = Cli::try_parse_from([
            "glide",
            "simulate",
            "--window-width",
            "400",
            "--content-width",
            "1000",
            "-20",
            "400",
            "leave",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate { trace, .. } => {
                assert_eq!(trace, vec![Step::Move(-20.0), Step::Move(400.0), Step::Leave]);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_compute_report() {
        let report = ComputeReport::new(400.0, TrackGeometry::new(0.0, 400.0, 1000.0), 1.2);
        assert_eq!(report.outcome, "offset");
        assert_eq!(report.translate, Some(-600.0));
        assert_eq!(report.transform.as_deref(), Some("translateX(-600px)"));

        let report = ComputeReport::new(10.0, TrackGeometry::new(0.0, 500.0, 500.0), 1.2);
        assert_eq!(report.outcome, "rest");
        assert_eq!(report.scrollable_width, 0.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "rest");
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
