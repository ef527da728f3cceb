//! Radar Sweep headless runner
//!
//! Drives a radar session against the tessellating surface, either as fast as
//! possible or paced in real time, and reports what was drawn.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use radar_sweep::consts::*;
use radar_sweep::renderer::{RenderSurface, Tessellator};
use radar_sweep::{QualityPreset, RadarConfig, RadarSession};

#[derive(Parser)]
#[command(name = "radar-sweep", about = "Animated radar sweep simulation (headless)")]
struct Cli {
    /// Random seed for target generation
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of ticks to run
    #[arg(long, default_value_t = 250)]
    ticks: u64,
    /// Sweep speed in degrees per tick
    #[arg(long, default_value_t = DEFAULT_SCAN_SPEED)]
    speed: f32,
    /// Targets per generation
    #[arg(long, default_value_t = DEFAULT_TARGET_COUNT)]
    targets: usize,
    /// Surface width in pixels
    #[arg(long, default_value_t = 700.0)]
    width: f32,
    /// Surface height in pixels
    #[arg(long, default_value_t = 560.0)]
    height: f32,
    /// Tessellation quality (low, medium, high)
    #[arg(long, default_value = "medium", value_parser = parse_quality)]
    quality: QualityPreset,
    /// Draw a fading trail of past sweep angles
    #[arg(long)]
    afterglow: bool,
    /// Regenerate targets every N ticks
    #[arg(long)]
    regenerate_every: Option<u64>,
    /// Pace ticks on the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Write the last composed frame as JSON
    #[arg(long)]
    dump_frame: Option<PathBuf>,
}

fn parse_quality(s: &str) -> Result<QualityPreset, String> {
    QualityPreset::parse(s).ok_or_else(|| format!("unknown quality preset: {s}"))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Radar Sweep (native) starting...");

    let config = RadarConfig {
        seed: cli.seed,
        scan_speed: cli.speed,
        target_count: cli.targets,
        afterglow: cli.afterglow,
        quality: cli.quality,
        ..RadarConfig::default()
    };
    if !config.scan_speed_in_ui_range() {
        log::warn!(
            "Scan speed {} is outside the slider range [{SCAN_SPEED_MIN}, {SCAN_SPEED_MAX}]",
            config.scan_speed
        );
    }

    let mut surface = Tessellator::new(cli.width, cli.height, config.quality.circle_segments());
    let mut session = RadarSession::new(config).context("invalid radar configuration")?;
    run(&mut session, &mut surface, &cli);

    let (width, height) = surface.size();
    println!(
        "{} ticks, {} frames, sweep at {:.1}°, {} targets, last frame {} triangles on {}x{}",
        session.state().time_ticks,
        session.frames_rendered(),
        session.state().sweep_angle_deg,
        session.state().targets().len(),
        surface.vertices().len() / 3,
        width,
        height,
    );

    if let Some(path) = &cli.dump_frame {
        let frame = session.frame(&surface);
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &frame)
            .with_context(|| format!("writing frame to {}", path.display()))?;
        log::info!("Frame with {} commands written to {}", frame.len(), path.display());
    }

    Ok(())
}

fn run(session: &mut RadarSession, surface: &mut Tessellator, cli: &Cli) {
    let period_ms = session.config().tick_interval_ms as f64;
    let mut last = Instant::now();

    session.start();
    while session.state().time_ticks < cli.ticks {
        let elapsed_ms = if cli.realtime {
            std::thread::sleep(Duration::from_millis(session.config().tick_interval_ms as u64));
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f64() * 1000.0;
            last = now;
            elapsed
        } else {
            period_ms
        };

        let before = session.state().time_ticks;
        let remaining = u32::try_from(cli.ticks - before).unwrap_or(u32::MAX);
        session.pump_at_most(elapsed_ms, remaining, surface);
        let now_ticks = session.state().time_ticks;

        if let Some(every) = cli.regenerate_every.filter(|n| *n > 0) {
            if before / every != now_ticks / every {
                session.regenerate_targets();
            }
        }

        if before / 25 != now_ticks / 25 {
            log::debug!(
                "tick {}: sweep {:.1}°, {} vertices, {} labels",
                now_ticks,
                session.state().sweep_angle_deg,
                surface.vertices().len(),
                surface.labels().len()
            );
        }
    }
    session.stop();
}
