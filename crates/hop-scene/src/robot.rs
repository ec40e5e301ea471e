//! The two-legged hopper body.
//!
//! ```text
//!            ┌─┐  head
//!          ┌─┴─┴─┐
//!          │torso│  free joint, spawned at z = L + 0.15
//!          └┬───┬┘
//!   hip_left│   │hip_right   hinges about +y, y = ±0.06
//!           │   │
//!           ┴   ┴  capsule legs of length L
//! ```
//!
//! The hips are deliberately narrow (0.06 m) so the body does not spin
//! about its vertical axis under antiphase drive.

use crate::{MjcfWriter, SceneResult};

/// Clearance above the leg tips at spawn, metres.
const SPAWN_CLEARANCE: f64 = 0.15;

/// Geometry and actuation parameters of one robot variant.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotSpec {
    pub leg_length:    f64,
    pub leg_radius:    f64,
    pub hip_offset:    f64,
    pub torso_half:    f64,
    pub torso_mass:    f64,
    pub joint_damping: f64,
    /// Joint range, degrees (MJCF default angle unit).
    pub joint_range:   (f64, f64),
    pub motor_gear:    f64,
    pub ctrl_range:    (f64, f64),
}

impl RobotSpec {
    /// The standard hopper with legs of length `leg_length`.
    pub fn with_leg_length(leg_length: f64) -> Self {
        Self {
            leg_length,
            leg_radius:    0.015,
            hip_offset:    0.06,
            torso_half:    0.05,
            torso_mass:    1.0,
            joint_damping: 0.5,
            joint_range:   (-100.0, 100.0),
            motor_gear:    12.0,
            ctrl_range:    (-1.0, 1.0),
        }
    }

    /// Spawn height of the torso: legs plus clearance.
    #[inline]
    pub fn spawn_height(&self) -> f64 {
        self.leg_length + SPAWN_CLEARANCE
    }

    /// Write the `<body name="torso">` subtree (goes inside `<worldbody>`).
    pub fn write_body(&self, w: &mut MjcfWriter) -> SceneResult<()> {
        let pos = format!("0 0 {:.3}", self.spawn_height());
        w.start("body", &[("name", "torso"), ("pos", &pos)])?;
        w.empty("joint", &[("type", "free")])?;

        let half = self.torso_half;
        let torso_size = format!("{half} {half} {half}");
        let mass = self.torso_mass.to_string();
        w.empty("geom", &[
            ("name", "torso_geom"),
            ("type", "box"),
            ("size", &torso_size),
            ("material", "robot_mat"),
            ("mass", &mass),
        ])?;
        w.empty("geom", &[
            ("name", "head_geom"),
            ("type", "box"),
            ("pos", "0.03 0 0.06"),
            ("size", "0.03 0.03 0.03"),
            ("rgba", "1 1 1 0.8"),
        ])?;

        self.write_leg(w, "left_leg", "hip_left", self.hip_offset)?;
        self.write_leg(w, "right_leg", "hip_right", -self.hip_offset)?;

        w.end("body")
    }

    /// Write the `<actuator>` block: one motor per hip.
    pub fn write_actuators(&self, w: &mut MjcfWriter) -> SceneResult<()> {
        let gear = self.motor_gear.to_string();
        let range = format!("{:.1} {:.1}", self.ctrl_range.0, self.ctrl_range.1);
        w.start("actuator", &[])?;
        for joint in ["hip_left", "hip_right"] {
            w.empty("motor", &[
                ("joint", joint),
                ("gear", &gear),
                ("ctrllimited", "true"),
                ("ctrlrange", &range),
            ])?;
        }
        w.end("actuator")
    }

    /// A standalone robot document: `<mujoco><worldbody>…</worldbody>
    /// <actuator>…</actuator></mujoco>`.
    ///
    /// Materials `robot_mat` and `leg_mat` are referenced but not defined;
    /// the including scene supplies them.
    pub fn to_mjcf(&self) -> SceneResult<String> {
        let mut w = MjcfWriter::new();
        w.start("mujoco", &[])?;
        w.start("worldbody", &[])?;
        self.write_body(&mut w)?;
        w.end("worldbody")?;
        self.write_actuators(&mut w)?;
        w.end("mujoco")?;
        w.finish()
    }

    fn write_leg(&self, w: &mut MjcfWriter, body: &str, joint: &str, y: f64) -> SceneResult<()> {
        let pos = format!("0 {y} 0");
        let damping = self.joint_damping.to_string();
        let range = format!("{} {}", self.joint_range.0, self.joint_range.1);
        let fromto = format!("0 0 0 0 0 -{:.2}", self.leg_length);
        let radius = self.leg_radius.to_string();

        w.start("body", &[("name", body), ("pos", &pos)])?;
        w.empty("joint", &[
            ("name", joint),
            ("type", "hinge"),
            ("axis", "0 1 0"),
            ("damping", &damping),
            ("range", &range),
        ])?;
        w.empty("geom", &[
            ("type", "capsule"),
            ("fromto", &fromto),
            ("size", &radius),
            ("material", "leg_mat"),
        ])?;
        w.end("body")
    }
}
