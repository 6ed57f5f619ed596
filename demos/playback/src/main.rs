//! playback — play a route back and report where the vehicle is.
//!
//! Without a route file a built-in three-leg loop around Delhi is used.
//!
//! ```text
//! playback routes/delhi_loop.csv --steps 50 --output output/delhi
//! playback routes/delhi_loop.json --realtime --speed 120 --pause-at 40 --pause-for 2
//! ```

mod report;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ds_clock::{Clock, IntervalClock, ManualClock};
use ds_core::GeoPoint;
use ds_output::{CsvWriter, SnapshotOutputObserver};
use ds_route::{RouteInput, load_route_csv};
use ds_sim::{IntervalPolicy, Phase, PlaybackConfig, SimulationController};

use report::ProgressReporter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about = "Play a waypoint route back at a fixed step cadence")]
struct Args {
    /// Route file (`.csv` or `.json`).  Defaults to a built-in demo route.
    route: Option<PathBuf>,

    /// JSON playback config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Steps per segment.
    #[arg(long)]
    steps: Option<u32>,

    /// Real-time multiplier (only meaningful with --realtime).
    #[arg(long)]
    speed: Option<f64>,

    /// When the wall-clock tick interval is recomputed.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Pace ticks against the wall clock instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// Seek to this percentage before playing.
    #[arg(long)]
    seek: Option<f64>,

    /// Pause once progress reaches this percentage ...
    #[arg(long)]
    pause_at: Option<f64>,

    /// ... for this many seconds, then resume.
    #[arg(long, default_value = "1")]
    pause_for: f64,

    /// Write `snapshots.csv` into this directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log a progress line every N percent.
    #[arg(long, default_value = "10")]
    report_every: f64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PolicyArg {
    RecomputeOnResume,
    FixedAtStart,
}

impl From<PolicyArg> for IntervalPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::RecomputeOnResume => IntervalPolicy::RecomputeOnResume,
            PolicyArg::FixedAtStart      => IntervalPolicy::FixedAtStart,
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let input = match &args.route {
        Some(path) => load_route(path)?,
        None => demo_route(),
    };
    let config = playback_config(&args)?;

    if args.realtime {
        play(SimulationController::new(config, IntervalClock::new()), &input, &args)
    } else {
        play(SimulationController::new(config, ManualClock::new()), &input, &args)
    }
}

fn play<C: Clock>(mut sim: SimulationController<C>, input: &RouteInput, args: &Args) -> Result<()> {
    let output = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(SnapshotOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = ProgressReporter::new(args.report_every, output);

    sim.start(input)?;
    if let Some(pct) = args.seek {
        sim.seek_to(pct, &mut obs);
        sim.resume();
    }

    match args.pause_at {
        Some(pause_at) => {
            while sim.phase() == Phase::Running && obs.last_progress() < pause_at {
                if sim.run_ticks(1, &mut obs) == 0 {
                    break;
                }
            }
            if sim.phase() == Phase::Running {
                sim.pause();
                info!(pct = obs.last_progress(), secs = args.pause_for, "paused");
                std::thread::sleep(Duration::try_from_secs_f64(args.pause_for).unwrap_or_default());
                sim.resume();
            }
            sim.run(&mut obs);
        }
        None => {
            sim.run(&mut obs);
        }
    }

    if let Some(e) = obs.finish() {
        eprintln!("output error: {e}");
    }

    let Some(last) = sim.snapshot() else {
        bail!("playback produced no snapshot");
    };
    println!();
    println!("{:<16} {}", "Phase", last.phase);
    println!("{:<16} {}", "Position", last.position);
    println!("{:<16} {:.3} km", "Distance", last.distance_traveled_km);
    println!("{:<16} {:.1} s", "Elapsed", last.elapsed_secs);
    println!("{:<16} {:.1} km/h", "Average speed", last.average_speed_kmh);
    println!("{:<16} {}", "Ticks", sim.state().ticks());
    println!("{:<16} {}", "Snapshots", obs.emitted());
    Ok(())
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_route(path: &Path) -> Result<RouteInput> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let input = match ext {
        "csv" => load_route_csv(path)?,
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        other => bail!("unsupported route file extension {other:?}: expected csv or json"),
    };
    info!(path = %path.display(), waypoints = input.waypoints.len(), "route loaded");
    Ok(input)
}

fn playback_config(args: &Args) -> Result<PlaybackConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlaybackConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.num_steps = steps;
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(policy) = args.policy {
        config.interval_policy = policy.into();
    }
    config.validate()?;
    Ok(config)
}

/// Noida → Connaught Place → Gurugram → back towards Noida.
fn demo_route() -> RouteInput {
    RouteInput::starting_at(GeoPoint::new(28.522308592619723, 77.39657243970184))
        .leg(GeoPoint::new(28.6139, 77.2090), 1_500.0)
        .leg(GeoPoint::new(28.4595, 77.0266), 1_800.0)
        .leg(GeoPoint::new(28.5355, 77.3910), 2_100.0)
}
