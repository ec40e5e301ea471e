//! Tests for hop-showcase.

use std::path::{Path, PathBuf};

use hop_core::{Rgba, ShowcaseConfig, VirtualClock};
use hop_engine::{Engine, EngineError, EngineResult, HeadlessViewer};

use crate::{Showcase, ShowcaseBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Deterministic stand-in engine: the torso slides along x at `vx` m/s of
/// simulation time and every call is counted.
struct ScriptedEngine {
    dt:        f64,
    time:      f64,
    vx:        f64,
    qpos:      Vec<f64>,
    qvel:      Vec<f64>,
    ctrl:      Vec<f64>,
    materials: Vec<(String, Rgba)>,
    steps:     u64,
    resets:    u64,
    ctrl_log:  Vec<(f64, [f64; 2])>,
}

impl ScriptedEngine {
    fn new(vx: f64) -> Self {
        Self {
            dt: 0.005,
            time: 0.0,
            vx,
            qpos: vec![0.0, 0.0, 0.25, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            qvel: vec![0.0; 8],
            ctrl: vec![0.0; 2],
            materials: vec![("robot_mat".into(), Rgba::new(0.9, 0.1, 0.1, 1.0))],
            steps: 0,
            resets: 0,
            ctrl_log: Vec::new(),
        }
    }

    fn without_materials(mut self) -> Self {
        self.materials.clear();
        self
    }
}

impl Engine for ScriptedEngine {
    fn timestep(&self) -> f64 {
        self.dt
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn qpos(&self) -> &[f64] {
        &self.qpos
    }

    fn qvel(&self) -> &[f64] {
        &self.qvel
    }

    fn actuator_count(&self) -> usize {
        2
    }

    fn set_ctrl(&mut self, ctrl: &[f64]) -> EngineResult<()> {
        if ctrl.len() != 2 {
            return Err(EngineError::CtrlLength { expected: 2, got: ctrl.len() });
        }
        self.ctrl.copy_from_slice(ctrl);
        self.ctrl_log.push((self.time, [ctrl[0], ctrl[1]]));
        Ok(())
    }

    fn ctrl(&self) -> &[f64] {
        &self.ctrl
    }

    fn step(&mut self) {
        self.time += self.dt;
        self.qpos[0] += self.vx * self.dt;
        self.steps += 1;
    }

    fn reset(&mut self) {
        self.time = 0.0;
        self.qpos[0] = 0.0;
        self.qpos[1] = 0.0;
        self.ctrl.iter_mut().for_each(|c| *c = 0.0);
        self.resets += 1;
    }

    fn material_id(&self, name: &str) -> Option<usize> {
        self.materials.iter().position(|(n, _)| n == name)
    }

    fn material_rgba(&self, id: usize) -> Option<Rgba> {
        self.materials.get(id).map(|(_, c)| *c)
    }

    fn set_material_rgba(&mut self, id: usize, rgba: Rgba) -> EngineResult<()> {
        let slot = self.materials.get_mut(id).ok_or(EngineError::MaterialOutOfRange(id))?;
        slot.1 = rgba;
        Ok(())
    }

    fn actuator_power(&self) -> f64 {
        0.0
    }

    fn total_mass(&self) -> f64 {
        1.0
    }
}

/// Write a placeholder scene file so the existence check passes.
fn scene_file(dir: &Path) -> PathBuf {
    let path = dir.join("scene.xml");
    std::fs::write(&path, "<mujoco/>").unwrap();
    path
}

fn scripted_showcase<'c>(
    scene: PathBuf,
    engine: ScriptedEngine,
    clock: &'c VirtualClock,
) -> Showcase<ScriptedEngine, HeadlessViewer, &'c VirtualClock> {
    let config = ShowcaseConfig { scene_path: scene, ..ShowcaseConfig::default() };
    ShowcaseBuilder::new(config, HeadlessViewer::unbounded(), clock)
        .build(|_| Ok(engine))
        .unwrap()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use std::cell::Cell;

    use hop_core::{ControlMode, HopError};

    use super::*;
    use crate::ShowcaseError;

    #[test]
    fn missing_scene_never_calls_loader() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("generated/final_demo.xml");
        let config = ShowcaseConfig { scene_path: missing.clone(), ..ShowcaseConfig::default() };
        let called = Cell::new(false);

        let result = ShowcaseBuilder::new(config, HeadlessViewer::unbounded(), VirtualClock::new(0.0))
            .build(|_| {
                called.set(true);
                Ok(ScriptedEngine::new(0.0))
            });

        match result {
            Err(ShowcaseError::SceneNotFound(p)) => assert_eq!(p, missing),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("expected SceneNotFound"),
        }
        assert!(!called.get());
    }

    #[test]
    fn invalid_interval_rejected_before_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShowcaseConfig {
            scene_path: scene_file(dir.path()),
            switch_interval_secs: 0.0,
            ..ShowcaseConfig::default()
        };
        let result = ShowcaseBuilder::new(config, HeadlessViewer::unbounded(), VirtualClock::new(0.0))
            .build(|_| Ok(ScriptedEngine::new(0.0)));
        assert!(matches!(result, Err(ShowcaseError::Config(HopError::Config(_)))));
    }

    #[test]
    fn loader_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShowcaseConfig { scene_path: scene_file(dir.path()), ..ShowcaseConfig::default() };
        let result = ShowcaseBuilder::new(config, HeadlessViewer::unbounded(), VirtualClock::new(0.0))
            .build(|_| -> EngineResult<ScriptedEngine> {
                Err(EngineError::Unsupported("no free joint".into()))
            });
        assert!(matches!(result, Err(ShowcaseError::Engine(EngineError::Unsupported(_)))));
    }

    #[test]
    fn initial_state() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(3.0);
        let sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.0), &clock);

        assert_eq!(sc.mode, ControlMode::Struggling);
        assert_eq!(sc.last_switch, 3.0);
        assert_eq!(sc.material, Some(0));
        assert_eq!(sc.engine.resets, 1);
        assert_eq!(sc.camera.lookat[0], 2.0);
        assert_eq!(sc.summary().ticks, 0);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use approx::assert_abs_diff_eq;
    use hop_core::{ControlMode, Planar};

    use super::*;
    use crate::{NoopObserver, ShowcaseObserver, SwitchEvent, TickOutcome, TickReport};

    #[derive(Default)]
    struct Recorder {
        started:  usize,
        switches: Vec<SwitchEvent>,
        ticks:    Vec<TickReport>,
    }

    impl ShowcaseObserver for Recorder {
        fn on_start(&mut self, _mode: ControlMode, _spec: hop_core::ModeSpec) {
            self.started += 1;
        }

        fn on_switch(&mut self, event: &SwitchEvent) {
            self.switches.push(*event);
        }

        fn on_tick(&mut self, report: &TickReport) {
            self.ticks.push(*report);
        }
    }

    #[test]
    fn switch_after_interval_skips_actuation() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.2), &clock);

        clock.set(8.1);
        let outcome = sc.tick(&mut NoopObserver).unwrap();

        let TickOutcome::Switched(event) = outcome else {
            panic!("expected a switch, got {outcome:?}");
        };
        assert_eq!(event.from, ControlMode::Struggling);
        assert_eq!(event.to, ControlMode::ResonanceSprint);
        assert_eq!(event.spec.frequency_hz, 2.25);
        assert_eq!(event.spec.amplitude, 1.0);
        assert_eq!(event.wall_time, 8.1);
        assert_eq!(sc.last_switch, 8.1);
        assert_eq!(sc.mode, ControlMode::ResonanceSprint);
        assert_eq!(sc.engine.resets, 2);
        assert_eq!(sc.engine.steps, 0);
        assert!(sc.engine.ctrl_log.is_empty());
        assert_eq!(sc.engine.material_rgba(0), Some(Rgba::new(0.1, 1.0, 0.1, 1.0)));
        assert_eq!(sc.viewer.frames_synced(), 1);
    }

    #[test]
    fn interval_boundary_is_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.0), &clock);

        clock.set(8.0);
        let outcome = sc.tick(&mut NoopObserver).unwrap();
        assert!(matches!(outcome, TickOutcome::Actuated(_)));
        assert_eq!(sc.mode, ControlMode::Struggling);
    }

    #[test]
    fn struggling_command_matches_signal() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.0), &clock);
        sc.engine.time = 0.25;

        let outcome = sc.tick(&mut NoopObserver).unwrap();
        let TickOutcome::Actuated(report) = outcome else {
            panic!("expected actuation");
        };
        assert_abs_diff_eq!(report.command[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(report.command[1], -0.5, epsilon = 1e-12);
        assert_eq!(report.sim_time, 0.25);
        assert_eq!(sc.engine.steps, 1);
    }

    #[test]
    fn commands_are_always_antisymmetric() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.1), &clock);

        sc.run_ticks(500, &mut NoopObserver).unwrap();
        assert_eq!(sc.engine.ctrl_log.len(), 500);
        for (_, [a, b]) in &sc.engine.ctrl_log {
            assert_eq!(*a, -*b);
            assert!(a.abs() <= 0.5 + 1e-12);
        }
    }

    #[test]
    fn speed_is_zero_inside_guard() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(1.0), &clock);
        let mut rec = Recorder::default();

        // 20 ticks at 5 ms: elapsed reaches 0.095 s on the last one.
        sc.run_ticks(20, &mut rec).unwrap();
        assert!(rec.ticks.iter().all(|r| r.metrics.speed == 0.0));
        assert!(rec.ticks.last().unwrap().metrics.distance > 0.0);

        sc.run_ticks(5, &mut rec).unwrap();
        let last = rec.ticks.last().unwrap();
        assert!(last.wall_elapsed > 0.1);
        assert_abs_diff_eq!(last.metrics.speed, last.metrics.distance / last.wall_elapsed, epsilon = 1e-12);
    }

    #[test]
    fn pacing_advances_wall_clock_by_timestep() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.0), &clock);

        sc.run_ticks(200, &mut NoopObserver).unwrap();
        assert_abs_diff_eq!(hop_core::WallClock::now(&clock), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn modes_alternate_over_two_cycles() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.3), &clock);
        let mut rec = Recorder::default();

        // Roughly 20 s of wall time: two switches.
        sc.run_ticks(4_000, &mut rec).unwrap();

        assert_eq!(rec.switches.len(), 2);
        assert_eq!(rec.switches[0].to, ControlMode::ResonanceSprint);
        assert_eq!(rec.switches[1].to, ControlMode::Struggling);
        assert_eq!(rec.switches[0].baseline, Planar::new(0.0, 0.0));
        let gap = rec.switches[1].wall_time - rec.switches[0].wall_time;
        assert!(gap > 8.0 && gap < 8.02, "gap {gap}");

        let summary = sc.summary();
        assert_eq!(summary.ticks, 4_000);
        assert_eq!(summary.switches, 2);
        assert_eq!(summary.steps, 3_998);
        assert_eq!(summary.final_mode, ControlMode::Struggling);
    }

    #[test]
    fn distance_measured_from_switch_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(0.4), &clock);
        let mut rec = Recorder::default();

        clock.set(9.0);
        sc.tick(&mut rec).unwrap();
        sc.run_ticks(100, &mut rec).unwrap();

        let last = rec.ticks.last().unwrap();
        assert_eq!(last.metrics.baseline, Planar::new(0.0, 0.0));
        assert_abs_diff_eq!(last.metrics.distance, 0.4 * 100.0 * 0.005, epsilon = 1e-9);
        assert_eq!(last.mode, ControlMode::ResonanceSprint);
    }

    #[test]
    fn missing_material_skips_recolor() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let engine = ScriptedEngine::new(0.0).without_materials();
        let mut sc = scripted_showcase(scene_file(dir.path()), engine, &clock);
        assert_eq!(sc.material, None);

        clock.set(8.5);
        let outcome = sc.tick(&mut NoopObserver).unwrap();
        assert!(matches!(outcome, TickOutcome::Switched(_)));
        assert_eq!(sc.mode, ControlMode::ResonanceSprint);
    }

    #[test]
    fn camera_tracks_robot() {
        let dir = tempfile::tempdir().unwrap();
        let clock = VirtualClock::new(0.0);
        let mut sc = scripted_showcase(scene_file(dir.path()), ScriptedEngine::new(2.0), &clock);

        sc.run_ticks(10, &mut NoopObserver).unwrap();
        let x = sc.engine.qpos()[0];
        let cam = sc.viewer.last_camera().unwrap();
        assert_abs_diff_eq!(cam.lookat[0], x + 1.0, epsilon = 1e-12);
        assert_eq!(cam.azimuth, 90.0);
    }

    #[test]
    fn run_stops_with_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShowcaseConfig { scene_path: scene_file(dir.path()), ..ShowcaseConfig::default() };
        let mut sc = ShowcaseBuilder::new(config, HeadlessViewer::with_frame_budget(50), VirtualClock::new(0.0))
            .build(|_| Ok(ScriptedEngine::new(0.1)))
            .unwrap();
        let mut rec = Recorder::default();

        let summary = sc.run(&mut rec).unwrap();
        assert_eq!(rec.started, 1);
        assert_eq!(summary.ticks, 50);
        assert_eq!(summary.steps, 50);
        assert_eq!(rec.ticks.len(), 50);
    }

    #[test]
    fn pair_with_optional_observer_fans_out() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShowcaseConfig { scene_path: scene_file(dir.path()), ..ShowcaseConfig::default() };
        let mut sc = ShowcaseBuilder::new(config, HeadlessViewer::with_frame_budget(10), VirtualClock::new(0.0))
            .build(|_| Ok(ScriptedEngine::new(0.1)))
            .unwrap();

        let mut both = (Recorder::default(), Some(Recorder::default()));
        sc.run(&mut both).unwrap();
        let (first, second) = both;
        let second = second.unwrap();
        assert_eq!((first.started, second.started), (1, 1));
        assert_eq!(first.ticks.len(), 10);
        assert_eq!(second.ticks.len(), 10);

        let mut absent: (Recorder, Option<Recorder>) = (Recorder::default(), None);
        sc.viewer = HeadlessViewer::with_frame_budget(5);
        sc.run(&mut absent).unwrap();
        assert_eq!(absent.0.ticks.len(), 5);
        assert!(absent.1.is_none());
    }
}

// ── Against the reduced-order hopper ──────────────────────────────────────────

#[cfg(test)]
mod hopper_tests {
    use hop_engine::PlanarHopper;
    use hop_scene::make_final_demo;

    use super::*;
    use crate::NoopObserver;

    #[test]
    fn generated_demo_runs_headless() {
        let dir = tempfile::tempdir().unwrap();
        let scene = make_final_demo(dir.path()).unwrap();
        let config = ShowcaseConfig { scene_path: scene, ..ShowcaseConfig::default() };

        let mut sc = ShowcaseBuilder::new(config, HeadlessViewer::with_frame_budget(400), VirtualClock::new(0.0))
            .build(PlanarHopper::load)
            .unwrap();
        assert!(sc.material.is_some());

        let summary = sc.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.steps, 400);
        assert_eq!(summary.switches, 0);
        let metrics = summary.last_metrics.unwrap();
        assert!(metrics.speed >= 0.0);
        assert!(metrics.distance.is_finite());
    }
}
