//! Tests for hop-engine.

use hop_scene::{FinalDemoSpec, RobotSpec, SceneSummary};

use crate::PlanarHopper;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn demo_hopper() -> PlanarHopper {
    let xml = FinalDemoSpec::default().to_mjcf().unwrap();
    PlanarHopper::from_summary(&SceneSummary::parse(&xml).unwrap()).unwrap()
}

fn hopper_with_legs(leg_length: f64) -> PlanarHopper {
    let spec = FinalDemoSpec { robot: RobotSpec::with_leg_length(leg_length), ..FinalDemoSpec::default() };
    let xml = spec.to_mjcf().unwrap();
    PlanarHopper::from_summary(&SceneSummary::parse(&xml).unwrap()).unwrap()
}

#[cfg(test)]
mod hopper_tests {
    use approx::assert_abs_diff_eq;
    use hop_core::{ModeSpec, Rgba};

    use super::*;
    use crate::{Engine, EngineError};

    #[test]
    fn initial_state_layout() {
        let h = demo_hopper();
        assert_eq!(h.qpos().len(), 9);
        assert_eq!(h.qvel().len(), 8);
        assert_eq!(h.actuator_count(), 2);
        assert_abs_diff_eq!(h.qpos()[2], 0.25, epsilon = 1e-9);
        assert_eq!(h.qpos()[3], 1.0);
        assert_eq!(h.time(), 0.0);
        assert_abs_diff_eq!(h.timestep(), 0.005, epsilon = 1e-12);
        assert_abs_diff_eq!(h.leg_length(), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn total_mass_includes_legs() {
        let h = demo_hopper();
        assert!(h.total_mass() > 1.0);
        assert!(h.total_mass() < 1.5);
    }

    #[test]
    fn ctrl_length_checked() {
        let mut h = demo_hopper();
        let err = h.set_ctrl(&[0.1]).unwrap_err();
        assert!(matches!(err, EngineError::CtrlLength { expected: 2, got: 1 }));
        h.set_ctrl(&[0.1, -0.1]).unwrap();
        assert_eq!(h.ctrl(), &[0.1, -0.1]);
    }

    #[test]
    fn idle_torso_settles_on_legs() {
        let mut h = demo_hopper();
        for _ in 0..400 {
            h.step();
        }
        assert_abs_diff_eq!(h.qpos()[2], 0.10, epsilon = 1e-6);
        assert_eq!(h.qpos()[0], 0.0);
        assert_abs_diff_eq!(h.time(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn antiphase_drive_moves_forward() {
        let mut h = demo_hopper();
        let spec = ModeSpec::new(2.25, 1.0);
        for _ in 0..1_000 {
            let cmd = spec.antiphase(h.time());
            h.set_ctrl(&cmd).unwrap();
            h.step();
        }
        assert!(h.qpos()[0] > 0.0, "x = {}", h.qpos()[0]);
        assert_eq!(h.qpos()[1], 0.0);
        assert!(h.actuator_power() >= 0.0);
    }

    #[test]
    fn hip_limits_hold_under_saturated_drive() {
        let mut h = hopper_with_legs(0.3);
        h.set_ctrl(&[50.0, -50.0]).unwrap();
        for _ in 0..2_000 {
            h.step();
        }
        let limit = 100f64.to_radians();
        for &a in h.hip_angles() {
            assert!(a.abs() <= limit + 1e-12, "angle {a}");
        }
    }

    #[test]
    fn reset_restores_state_but_not_materials() {
        let mut h = demo_hopper();
        let id = h.material_id("robot_mat").unwrap();
        h.set_material_rgba(id, Rgba::new(0.1, 1.0, 0.1, 1.0)).unwrap();

        h.set_ctrl(&[1.0, -1.0]).unwrap();
        for _ in 0..100 {
            h.step();
        }
        h.reset();

        assert_eq!(h.time(), 0.0);
        assert_abs_diff_eq!(h.qpos()[2], 0.25, epsilon = 1e-9);
        assert!(h.qvel().iter().all(|&v| v == 0.0));
        assert_eq!(h.ctrl(), &[0.0, 0.0]);
        assert_eq!(h.material_rgba(id), Some(Rgba::new(0.1, 1.0, 0.1, 1.0)));
    }

    #[test]
    fn unknown_material_is_none() {
        let mut h = demo_hopper();
        assert!(h.material_id("no_such_mat").is_none());
        assert!(h.material_rgba(99).is_none());
        assert!(matches!(
            h.set_material_rgba(99, Rgba::default()),
            Err(EngineError::MaterialOutOfRange(99))
        ));
    }

    #[test]
    fn robot_without_actuators_rejected() {
        let xml = r#"
            <mujoco>
                <worldbody>
                    <body name="torso" pos="0 0 0.3">
                        <joint type="free"/>
                        <geom type="box" size="0.05 0.05 0.05"/>
                    </body>
                </worldbody>
            </mujoco>"#;
        let summary = SceneSummary::parse(xml).unwrap();
        assert!(matches!(
            PlanarHopper::from_summary(&summary),
            Err(EngineError::Unsupported(_))
        ));
    }

    #[test]
    fn load_missing_file_is_scene_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PlanarHopper::load(&dir.path().join("missing.xml"));
        assert!(matches!(result, Err(EngineError::Scene(_))));
    }
}

#[cfg(test)]
mod viewer_tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::{Camera, HeadlessViewer, Viewer};

    #[test]
    fn frame_budget_stops_viewer() {
        let h = demo_hopper();
        let mut v = HeadlessViewer::with_frame_budget(3);
        let cam = Camera::default();
        let mut frames = 0;
        while v.is_running() {
            v.sync(&h, &cam);
            frames += 1;
        }
        assert_eq!(frames, 3);
        assert_eq!(v.frames_synced(), 3);
    }

    #[test]
    fn stop_handle_closes_viewer() {
        let v = HeadlessViewer::unbounded();
        assert!(v.is_running());
        v.stop_handle().store(true, Ordering::Relaxed);
        assert!(!v.is_running());
    }

    #[test]
    fn camera_tracks_with_lead() {
        let mut cam = Camera::default();
        assert_eq!(cam.lookat[0], 2.0);
        assert_eq!(cam.azimuth, 90.0);
        assert_eq!(cam.elevation, -10.0);
        cam.track(3.5, 1.0);
        assert_eq!(cam.lookat[0], 4.5);
    }
}
