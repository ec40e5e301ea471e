//! hopper: command-line front end for the hopper workspace.
//!
//! Scene generation, the live mode-switching showcase, the parameter sweep
//! and the results visualizations, one subcommand each.  Logs go to stderr
//! (`RUST_LOG` overrides the default `info` filter) so the showcase HUD owns
//! stdout.

use std::fs::File;
use std::io::Stdout;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hop_core::{ShowcaseConfig, SystemClock, VirtualClock, WallClock};
use hop_engine::{HeadlessViewer, PlanarHopper};
use hop_output::{StatusLine, TelemetryCsvWriter, TelemetryObserver};
use hop_results::{DEFAULT_GRID_FILE, Heatmap, Race, load_grid_csv, render_heatmap_svg, render_race_svg, write_grid_csv};
use hop_scene::{LEG_LENGTHS, build_track_scene, generate_robot_bodies, make_final_demo};
use hop_showcase::{RunSummary, ShowcaseBuilder, ShowcaseError};
use hop_sweep::{SweepConfig, run_sweep};

// ── Constants ─────────────────────────────────────────────────────────────────

const GENERATED_DIR:     &str = "generated";
const DASHBOARD_FILE:    &str = "results/dashboard_desire_path.svg";
const RACE_FILE:         &str = "results/winning_race.svg";
const RACE_BAR_WIDTH:    usize = 50;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Bipedal hopper: scene generation, live showcase, sweep and results.
#[derive(Parser)]
#[command(name = "hopper", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one robot body file per leg length.
    MakeRobots {
        #[arg(short, long, default_value = GENERATED_DIR)]
        out: PathBuf,
    },

    /// Write the race track scene that includes the default robot body.
    BuildTrack {
        #[arg(short, long, default_value = GENERATED_DIR)]
        out: PathBuf,
    },

    /// Write the self-contained showcase scene.
    MakeFinalDemo {
        #[arg(short, long, default_value = GENERATED_DIR)]
        out: PathBuf,
    },

    /// Run the mode-switching showcase with a live status line.
    LiveShowcase {
        /// JSON showcase configuration; flags below override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scene to load.
        #[arg(long)]
        scene: Option<PathBuf>,

        /// Seconds between mode switches.
        #[arg(long)]
        interval: Option<f64>,

        /// Stop after this many frames on a virtual clock instead of running
        /// in real time until interrupted.
        #[arg(long)]
        frames: Option<u64>,

        /// Write per-tick telemetry CSV here.
        #[arg(long)]
        telemetry: Option<PathBuf>,
    },

    /// Sweep leg length × frequency and write the grid CSV.
    Sweep {
        #[arg(short, long, default_value = DEFAULT_GRID_FILE)]
        out: PathBuf,

        /// Simulated seconds per cell.
        #[arg(long, default_value_t = 10.0)]
        duration: f64,

        /// Actuator command amplitude.
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,
    },

    /// Render the speed heatmap dashboard from the grid CSV.
    Dashboard {
        #[arg(short, long, default_value = DEFAULT_GRID_FILE)]
        input: PathBuf,

        #[arg(short, long, default_value = DASHBOARD_FILE)]
        output: PathBuf,
    },

    /// Race the 1.0 Hz gait against the 2.25 Hz gait.
    Race {
        #[arg(short, long, default_value = DEFAULT_GRID_FILE)]
        input: PathBuf,

        #[arg(short, long, default_value = RACE_FILE)]
        output: PathBuf,

        /// Frame to render; defaults to the finish.
        #[arg(long)]
        frame: Option<usize>,

        /// Print every second of the race as text bars.
        #[arg(long)]
        animate: bool,
    },
}

// ── Showcase observer ─────────────────────────────────────────────────────────

type Telemetry = TelemetryObserver<TelemetryCsvWriter<File>>;

/// HUD first, then telemetry when requested.
type DemoObserver = (StatusLine<Stdout>, Option<Telemetry>);

// ── Subcommands ───────────────────────────────────────────────────────────────

fn make_robots(out: &Path) -> Result<()> {
    println!("🏭 Factory: Generating {} robot bodies...", LEG_LENGTHS.len());
    let files = generate_robot_bodies(out, &LEG_LENGTHS)?;
    for f in &files {
        println!("   ✅ Generated: {}", f.display());
    }
    Ok(())
}

fn build_track(out: &Path) -> Result<()> {
    println!("🏗️ Building Race Track Environment...");
    let path = build_track_scene(out)?;
    println!("✅ Created '{}' (Environment)", path.display());
    Ok(())
}

fn final_demo(out: &Path) -> Result<()> {
    let path = make_final_demo(out)?;
    println!("✅ Success! '{}' is ready.", path.display());
    Ok(())
}

fn load_showcase_config(path: Option<&Path>) -> Result<ShowcaseConfig> {
    let Some(path) = path else {
        return Ok(ShowcaseConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading showcase config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing showcase config {}", path.display()))
}

fn live_showcase(
    config_path: Option<&Path>,
    scene: Option<PathBuf>,
    interval: Option<f64>,
    frames: Option<u64>,
    telemetry: Option<&Path>,
) -> Result<()> {
    let mut config = load_showcase_config(config_path)?;
    if let Some(scene) = scene {
        config.scene_path = scene;
    }
    if let Some(interval) = interval {
        config.switch_interval_secs = interval;
    }

    let outcome = match frames {
        Some(n) => run_showcase(config, HeadlessViewer::with_frame_budget(n), VirtualClock::new(0.0), telemetry)?,
        None => {
            let viewer = HeadlessViewer::unbounded();
            let stop = viewer.stop_handle();
            ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
                .context("installing Ctrl-C handler")?;
            run_showcase(config, viewer, SystemClock::new(), telemetry)?
        }
    };
    let Some((summary, (mut hud, mut telemetry))) = outcome else {
        return Ok(());
    };

    if let Some(e) = hud.take_error() {
        eprintln!("status line error: {e}");
    }
    if let Some(t) = telemetry.as_mut() {
        if let Some(e) = t.take_error() {
            eprintln!("telemetry error: {e}");
        }
        info!(rows = t.rows_written(), "telemetry written");
    }

    println!(
        "Showcase finished: {} ticks, {} steps, {} switches, final mode {}",
        summary.ticks, summary.steps, summary.switches, summary.final_mode
    );
    Ok(())
}

/// Build the showcase, then open the telemetry file and run until the viewer
/// stops.  A missing scene prints a hint and returns `None` without touching
/// the telemetry path.
fn run_showcase<C: WallClock>(
    config: ShowcaseConfig,
    viewer: HeadlessViewer,
    clock: C,
    telemetry: Option<&Path>,
) -> Result<Option<(RunSummary, DemoObserver)>> {
    let mut showcase = match ShowcaseBuilder::new(config, viewer, clock).build(PlanarHopper::load) {
        Ok(showcase) => showcase,
        Err(ShowcaseError::SceneNotFound(path)) => {
            eprintln!("❌ Error: {} not found. Run `hopper make-final-demo` first!", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let telemetry = telemetry
        .map(|p| TelemetryCsvWriter::create(p).map(TelemetryObserver::new))
        .transpose()?;
    let mut observer: DemoObserver = (StatusLine::stdout(), telemetry);
    let summary = showcase.run(&mut observer)?;
    Ok(Some((summary, observer)))
}

fn sweep(out: &Path, duration: f64, amplitude: f64) -> Result<()> {
    let config = SweepConfig { duration_secs: duration, amplitude, ..SweepConfig::default() };
    let t0 = Instant::now();
    let records = run_sweep(&config)?;
    write_grid_csv(out, &records)?;
    println!(
        "Sweep complete in {:.3} s: {} cells → {}",
        t0.elapsed().as_secs_f64(),
        records.len(),
        out.display()
    );
    Ok(())
}

fn dashboard(input: &Path, output: &Path) -> Result<()> {
    println!("📊 Loading data for the dashboard...");
    let records = load_grid_csv(input)?;
    let heatmap = Heatmap::from_records(&records)?;
    println!("💾 Saving dashboard to: {}", output.display());
    render_heatmap_svg(&heatmap, output)?;
    if let Some((l, f, cell)) = heatmap.fastest() {
        println!("   Fastest: L={l:.2}m at {f}Hz → {:.3} m/s (CoT {:.2})", cell.speed, cell.cot);
    }
    println!("✅ Done! Open the SVG file in your browser.");
    Ok(())
}

fn race(input: &Path, output: &Path, frame: Option<usize>, animate: bool) -> Result<()> {
    let records = load_grid_csv(input)?;
    let race = Race::from_records(&records)?;
    println!("{}", race.headline());

    let last = race.frames();
    if animate {
        let per_second = race.fps as usize;
        for k in (0..=last).step_by(per_second.max(1)) {
            println!("t = {:>4.1}s", race.time_at(k));
            print!("{}", race.text_frame(k, RACE_BAR_WIDTH));
        }
    }

    let frame = frame.unwrap_or(last).min(last);
    if !animate {
        print!("{}", race.text_frame(frame, RACE_BAR_WIDTH));
    }
    render_race_svg(&race, frame, output)?;
    println!("💾 Frame {frame}/{last} saved to: {}", output.display());
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::MakeRobots { out } => make_robots(&out),
        Commands::BuildTrack { out } => build_track(&out),
        Commands::MakeFinalDemo { out } => final_demo(&out),
        Commands::LiveShowcase { config, scene, interval, frames, telemetry } => {
            live_showcase(config.as_deref(), scene, interval, frames, telemetry.as_deref())
        }
        Commands::Sweep { out, duration, amplitude } => sweep(&out, duration, amplitude),
        Commands::Dashboard { input, output } => dashboard(&input, &output),
        Commands::Race { input, output, frame, animate } => race(&input, &output, frame, animate),
    }
}
