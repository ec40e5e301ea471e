//! Per-cell trial and the grid driver.

use hop_core::{ModeSpec, Planar};
use hop_engine::{Engine, PlanarHopper};
use hop_results::GridRecord;
use hop_scene::{FinalDemoSpec, RobotSpec, SceneSummary};
use tracing::{debug, info};

use crate::{SweepConfig, SweepResult};

/// Below this distance (m) the cost of transport is reported as infinite.
pub const MIN_DISTANCE: f64 = 1e-6;

/// Cost of transport: energy per unit weight per unit distance.
pub fn cost_of_transport(energy: f64, mass: f64, gravity: f64, distance: f64) -> f64 {
    if distance < MIN_DISTANCE {
        f64::INFINITY
    } else {
        energy / (mass * gravity * distance)
    }
}

/// Drive one robot at one frequency for `duration_secs` of simulated time.
pub fn run_cell(leg_length: f64, frequency: f64, config: &SweepConfig) -> SweepResult<GridRecord> {
    let scene = FinalDemoSpec { robot: RobotSpec::with_leg_length(leg_length), ..FinalDemoSpec::default() };
    let summary = SceneSummary::parse(&scene.to_mjcf()?)?;
    let gravity = summary.gravity[2].abs();
    let mut engine = PlanarHopper::from_summary(&summary)?;
    engine.reset();

    let spec = ModeSpec::new(frequency, config.amplitude);
    let dt = engine.timestep();
    let steps = (config.duration_secs / dt).round() as u64;
    let start = Planar::from_qpos(engine.qpos());

    let mut energy = 0.0;
    for _ in 0..steps {
        engine.set_ctrl(&spec.antiphase(engine.time()))?;
        engine.step();
        energy += engine.actuator_power() * dt;
    }

    let distance = Planar::from_qpos(engine.qpos()).distance(start);
    let elapsed = steps as f64 * dt;
    let speed = if elapsed > 0.0 { distance / elapsed } else { 0.0 };
    let cot = cost_of_transport(energy, engine.total_mass(), gravity, distance);

    debug!(leg_length, frequency, distance, speed, energy, "sweep cell finished");
    Ok(GridRecord { leg_length, frequency, speed, cot, distance })
}

/// Run every cell of the grid.  Rows are ordered by leg length, then
/// frequency, whether or not the `parallel` feature is on.
pub fn run_sweep(config: &SweepConfig) -> SweepResult<Vec<GridRecord>> {
    config.validate()?;
    let cells = config.cells();
    info!(
        cells = cells.len(),
        leg_lengths = config.leg_lengths.len(),
        frequencies = config.frequencies.len(),
        duration_secs = config.duration_secs,
        "starting sweep"
    );

    #[cfg(not(feature = "parallel"))]
    let records: SweepResult<Vec<GridRecord>> =
        cells.iter().map(|&(l, f)| run_cell(l, f, config)).collect();

    #[cfg(feature = "parallel")]
    let records: SweepResult<Vec<GridRecord>> = {
        use rayon::prelude::*;

        // Indexed parallel iterators keep input order on collect.
        cells.par_iter().map(|&(l, f)| run_cell(l, f, config)).collect()
    };

    let records = records?;
    info!(rows = records.len(), "sweep finished");
    Ok(records)
}
