//! The `Showcase` struct and its tick loop.

use hop_core::{ControlMode, ModeSpec, Planar, RunMetrics, ShowcaseConfig, WallClock};
use hop_engine::{Camera, Engine, Viewer};
use tracing::{debug, info};

use crate::{ShowcaseObserver, ShowcaseResult};

// ── Reports ───────────────────────────────────────────────────────────────────

/// Emitted on a switch tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwitchEvent {
    pub from:      ControlMode,
    pub to:        ControlMode,
    /// Parameters of the newly active mode.
    pub spec:      ModeSpec,
    /// Wall-clock time of the switch; the new `last_switch`.
    pub wall_time: f64,
    /// Robot position after the reset; the new measurement baseline.
    pub baseline:  Planar,
}

/// Emitted on every actuated tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick:         u64,
    pub mode:         ControlMode,
    pub spec:         ModeSpec,
    /// Simulation time at which the command was computed (before the step).
    pub sim_time:     f64,
    /// Wall-clock seconds since the last switch.
    pub wall_elapsed: f64,
    /// The two actuator commands written this tick, `[target, -target]`.
    pub command:      [f64; 2],
    pub metrics:      RunMetrics,
}

/// What a single [`Showcase::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Switched(SwitchEvent),
    Actuated(TickReport),
}

/// Totals reported when a run ends.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// All ticks, switch ticks included.
    pub ticks:        u64,
    /// Physics steps taken (actuated ticks).
    pub steps:        u64,
    pub switches:     u64,
    pub final_mode:   ControlMode,
    pub last_metrics: Option<RunMetrics>,
}

// ── Showcase ──────────────────────────────────────────────────────────────────

/// The live showcase runner.
///
/// `Showcase<E, V, C>` owns the engine, the viewer and the wall clock and
/// drives the switch / actuate / measure / present / pace tick described in
/// the crate docs.
///
/// Create via [`ShowcaseBuilder`][crate::ShowcaseBuilder].
pub struct Showcase<E: Engine, V: Viewer, C: WallClock> {
    pub config: ShowcaseConfig,
    pub engine: E,
    pub viewer: V,
    pub clock:  C,

    /// Current viewer framing; `lookat.x` follows the robot.
    pub camera: Camera,

    /// Active control mode.
    pub mode: ControlMode,

    /// Robot material index, if the scene defines it.
    pub material: Option<usize>,

    /// Robot position at the last switch (or at start-up).
    pub baseline: Planar,

    /// Wall-clock time of the last switch (or of start-up).
    pub last_switch: f64,

    pub(crate) ticks:        u64,
    pub(crate) steps:        u64,
    pub(crate) switches:     u64,
    pub(crate) last_metrics: Option<RunMetrics>,
}

impl<E: Engine, V: Viewer, C: WallClock> Showcase<E, V, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the viewer stops.
    ///
    /// Calls observer hooks on every tick.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: ShowcaseObserver>(&mut self, observer: &mut O) -> ShowcaseResult<RunSummary> {
        observer.on_start(self.mode, self.active_spec());
        info!(mode = %self.mode, scene = %self.config.scene_path.display(), "showcase started");

        while self.viewer.is_running() {
            self.tick(observer)?;
        }

        let summary = self.summary();
        info!(
            ticks = summary.ticks,
            switches = summary.switches,
            "viewer closed; showcase finished"
        );
        observer.on_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks, ignoring the viewer's running state.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: ShowcaseObserver>(
        &mut self,
        n: u64,
        observer: &mut O,
    ) -> ShowcaseResult<RunSummary> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(self.summary())
    }

    /// Execute one tick: either a switch or an actuate-measure-present-pace
    /// cycle.
    pub fn tick<O: ShowcaseObserver>(&mut self, observer: &mut O) -> ShowcaseResult<TickOutcome> {
        let tick_start = self.clock.now();
        self.ticks += 1;

        if tick_start - self.last_switch > self.config.switch_interval_secs {
            let event = self.switch_mode(tick_start)?;
            observer.on_switch(&event);
            return Ok(TickOutcome::Switched(event));
        }

        // ── Actuate ───────────────────────────────────────────────────────
        let spec = self.active_spec();
        let sim_time = self.engine.time();
        let command = spec.antiphase(sim_time);
        self.engine.set_ctrl(&command)?;
        self.engine.step();
        self.steps += 1;

        // ── Measure ───────────────────────────────────────────────────────
        let wall_elapsed = tick_start - self.last_switch;
        let current = Planar::from_qpos(self.engine.qpos());
        let metrics = RunMetrics::measure(self.baseline, current, wall_elapsed);
        self.last_metrics = Some(metrics);

        // ── Present ───────────────────────────────────────────────────────
        self.camera.track(current.x, self.config.camera.lead);
        self.viewer.sync(&self.engine, &self.camera);

        let report = TickReport {
            tick: self.ticks,
            mode: self.mode,
            spec,
            sim_time,
            wall_elapsed,
            command,
            metrics,
        };
        observer.on_tick(&report);

        // ── Pace ──────────────────────────────────────────────────────────
        let remaining = self.engine.timestep() - (self.clock.now() - tick_start);
        if remaining > 0.0 {
            self.clock.sleep(remaining);
        }

        Ok(TickOutcome::Actuated(report))
    }

    /// Parameters of the active mode.
    pub fn active_spec(&self) -> ModeSpec {
        self.config.modes.spec(self.mode)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks:        self.ticks,
            steps:        self.steps,
            switches:     self.switches,
            final_mode:   self.mode,
            last_metrics: self.last_metrics,
        }
    }

    // ── Switch ────────────────────────────────────────────────────────────

    fn switch_mode(&mut self, now: f64) -> ShowcaseResult<SwitchEvent> {
        let from = self.mode;
        self.mode = from.toggled();

        if let Some(id) = self.material {
            self.engine.set_material_rgba(id, self.config.modes.color(self.mode))?;
        }

        self.engine.reset();
        self.baseline = Planar::from_qpos(self.engine.qpos());
        self.last_switch = now;
        self.last_metrics = None;
        self.switches += 1;

        self.viewer.sync(&self.engine, &self.camera);

        let spec = self.active_spec();
        info!(
            from = %from,
            to = %self.mode,
            frequency_hz = spec.frequency_hz,
            amplitude = spec.amplitude,
            "mode switch"
        );
        debug!(baseline = %self.baseline, wall_time = now, "engine reset");

        Ok(SwitchEvent { from, to: self.mode, spec, wall_time: now, baseline: self.baseline })
    }
}
