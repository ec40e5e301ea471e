//! The monolithic showcase scene.
//!
//! One self-contained file: environment, five distance markers and the
//! robot inline.  No `<include>`, so it loads regardless of the working
//! directory.

use crate::track::{write_ground, write_header};
use crate::{MjcfWriter, RobotSpec, SceneResult};

pub const FINAL_DEMO_FILE: &str = "final_demo.xml";

#[derive(Clone, Debug, PartialEq)]
pub struct FinalDemoSpec {
    pub robot:        RobotSpec,
    /// Posts and floor lines at x = 1, 2, …, `marker_count` metres.
    pub marker_count: u32,
}

impl Default for FinalDemoSpec {
    fn default() -> Self {
        Self {
            robot:        RobotSpec::with_leg_length(crate::DEFAULT_LEG_LENGTH),
            marker_count: 5,
        }
    }
}

impl FinalDemoSpec {
    pub fn to_mjcf(&self) -> SceneResult<String> {
        let mut w = MjcfWriter::new();
        w.start("mujoco", &[])?;
        write_header(&mut w)?;

        w.start("worldbody", &[])?;
        write_ground(&mut w)?;
        for x in 1..=self.marker_count {
            let pos = format!("{x} -1.2 0.5");
            w.empty("geom", &[
                ("type", "box"),
                ("pos", &pos),
                ("size", "0.02 0.02 0.5"),
                ("material", "mat_post"),
            ])?;
        }
        for x in 1..=self.marker_count {
            let pos = format!("{x} 0 0.001");
            w.empty("geom", &[
                ("type", "box"),
                ("pos", &pos),
                ("size", "0.02 1 0.001"),
                ("material", "mat_line"),
            ])?;
        }
        self.robot.write_body(&mut w)?;
        w.end("worldbody")?;

        self.robot.write_actuators(&mut w)?;
        w.end("mujoco")?;
        w.finish()
    }
}
