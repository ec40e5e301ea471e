//! Unit tests for hop-core primitives.

#[cfg(test)]
mod mode {
    use approx::assert_abs_diff_eq;

    use crate::{ControlMode, ModeSpec, ModeTable};

    #[test]
    fn toggle_is_a_two_cycle() {
        let a = ControlMode::Struggling;
        let b = a.toggled();
        assert_eq!(b, ControlMode::ResonanceSprint);
        assert_eq!(b.toggled(), a);
        assert_ne!(a, b);
    }

    #[test]
    fn quarter_period_target_is_amplitude() {
        // 0.5 * sin(2π · 1.0 · 0.25) = 0.5 * sin(π/2)
        let spec = ModeSpec::new(1.0, 0.5);
        assert_abs_diff_eq!(spec.target(0.25), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn target_is_zero_at_time_zero() {
        let spec = ModeSpec::new(2.25, 1.0);
        assert_eq!(spec.target(0.0), 0.0);
    }

    #[test]
    fn antiphase_is_exact_negation() {
        let spec = ModeSpec::new(2.25, 1.0);
        for i in 0..500 {
            let t = i as f64 * 0.005;
            let [l, r] = spec.antiphase(t);
            assert_eq!(r, -l, "t = {t}");
        }
    }

    #[test]
    fn default_table_matches_showcase_constants() {
        let table = ModeTable::default();
        assert_eq!(table.spec(ControlMode::Struggling), ModeSpec::new(1.0, 0.5));
        assert_eq!(table.spec(ControlMode::ResonanceSprint), ModeSpec::new(2.25, 1.0));
        assert_eq!(table.color(ControlMode::Struggling).0, [1.0, 0.1, 0.1, 1.0]);
        assert_eq!(table.color(ControlMode::ResonanceSprint).0, [0.1, 1.0, 0.1, 1.0]);
    }

    #[test]
    fn display_names() {
        assert_eq!(ControlMode::Struggling.to_string(), "STRUGGLING");
        assert_eq!(ControlMode::ResonanceSprint.to_string(), "RESONANCE SPRINT");
    }

    #[test]
    fn negative_frequency_rejected() {
        assert!(ModeSpec::new(-1.0, 0.5).validate().is_err());
        assert!(ModeSpec::new(1.0, f64::NAN).validate().is_err());
        assert!(ModeSpec::new(0.0, 0.0).validate().is_ok());
    }
}

#[cfg(test)]
mod metrics {
    use approx::assert_abs_diff_eq;

    use crate::{Planar, RunMetrics};

    #[test]
    fn planar_from_short_qpos() {
        assert_eq!(Planar::from_qpos(&[]), Planar::new(0.0, 0.0));
        assert_eq!(Planar::from_qpos(&[1.5]), Planar::new(1.5, 0.0));
        assert_eq!(Planar::from_qpos(&[1.5, -2.0, 0.25]), Planar::new(1.5, -2.0));
    }

    #[test]
    fn distance_is_euclidean() {
        let d = Planar::new(0.0, 0.0).distance(Planar::new(3.0, 4.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn speed_is_zero_inside_guard() {
        let base = Planar::new(0.0, 0.0);
        let far = Planar::new(10.0, 0.0);
        for e in [0.0, 0.05, 0.1] {
            let m = RunMetrics::measure(base, far, e);
            assert_eq!(m.speed, 0.0, "elapsed {e}");
            assert_abs_diff_eq!(m.distance, 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn speed_past_guard() {
        let m = RunMetrics::measure(Planar::new(1.0, 1.0), Planar::new(1.0, 3.0), 4.0);
        assert_abs_diff_eq!(m.distance, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.speed, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn at_baseline_is_zero() {
        let m = RunMetrics::at_baseline(Planar::new(2.0, 0.5));
        assert_eq!(m.distance, 0.0);
        assert_eq!(m.speed, 0.0);
    }
}

#[cfg(test)]
mod color {
    use crate::Rgba;

    #[test]
    fn parse_mjcf_rgba() {
        assert_eq!(Rgba::parse("0.9 0.1 0.1 1"), Some(Rgba::new(0.9, 0.1, 0.1, 1.0)));
        assert_eq!(Rgba::parse("  1 1 1   0.5 "), Some(Rgba::new(1.0, 1.0, 1.0, 0.5)));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert_eq!(Rgba::parse("1 1 1"), None);
        assert_eq!(Rgba::parse("1 1 1 1 1"), None);
        assert_eq!(Rgba::parse("a b c d"), None);
    }

    #[test]
    fn display_is_attribute_form() {
        assert_eq!(Rgba::new(0.9, 0.1, 0.1, 1.0).to_string(), "0.9 0.1 0.1 1");
    }
}

#[cfg(test)]
mod clock {
    use crate::{VirtualClock, WallClock};

    #[test]
    fn virtual_sleep_advances() {
        let c = VirtualClock::new(1.0);
        c.sleep(0.5);
        assert_eq!(c.now(), 1.5);
        c.sleep(-3.0); // no-op
        assert_eq!(c.now(), 1.5);
        c.set(10.0);
        assert_eq!(c.now(), 10.0);
    }

    #[test]
    fn clock_by_reference() {
        let c = VirtualClock::new(0.0);
        let r = &c;
        r.sleep(2.0);
        assert_eq!(c.now(), 2.0);
    }
}

#[cfg(test)]
mod config {
    use crate::ShowcaseConfig;

    #[test]
    fn defaults_are_valid() {
        let cfg = ShowcaseConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.switch_interval_secs, 8.0);
        assert_eq!(cfg.robot_material, "robot_mat");
        assert!(cfg.scene_path.ends_with("final_demo.xml"));
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = ShowcaseConfig { switch_interval_secs: 0.0, ..ShowcaseConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ShowcaseConfig =
            serde_json::from_str(r#"{ "switch_interval_secs": 3.0 }"#).unwrap();
        assert_eq!(cfg.switch_interval_secs, 3.0);
        assert_eq!(cfg.robot_material, "robot_mat");
    }
}
