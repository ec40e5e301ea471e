//! The race-track environment.
//!
//! A checkered strip 40 m × 4 m with distance markers every metre: a white
//! floor line across the track, a red post beside it at y = −1.2 (clear of
//! the robot) and a white crossbar on top of the post.  The robot is pulled
//! in with `<include file="robot_body.xml"/>` so the same track can host any
//! leg-length variant.

use crate::{MjcfWriter, SceneResult};

pub const TRACK_SCENE_FILE: &str = "track_scene.xml";

/// Physics timestep of every generated scene, seconds.
pub(crate) const TIMESTEP: &str = "0.005";

#[derive(Clone, Debug, PartialEq)]
pub struct TrackSpec {
    /// Markers are placed at x = 1, 2, …, `marker_count` metres.
    pub marker_count: u32,
    /// File named by the `<include>` element, relative to the scene.
    pub robot_file:   String,
}

impl Default for TrackSpec {
    fn default() -> Self {
        Self {
            marker_count: 10,
            robot_file:   crate::DEFAULT_BODY_FILE.to_owned(),
        }
    }
}

impl TrackSpec {
    pub fn to_mjcf(&self) -> SceneResult<String> {
        let mut w = MjcfWriter::new();
        w.start("mujoco", &[])?;
        write_header(&mut w)?;

        w.start("worldbody", &[])?;
        write_ground(&mut w)?;
        for x in 1..=self.marker_count {
            let line_pos = format!("{x} 0 0.001");
            w.empty("geom", &[
                ("type", "box"),
                ("pos", &line_pos),
                ("size", "0.02 1 0.001"),
                ("material", "mat_line"),
            ])?;
            let post_pos = format!("{x} -1.2 0.5");
            w.empty("geom", &[
                ("type", "cylinder"),
                ("pos", &post_pos),
                ("size", "0.05 0.5"),
                ("material", "mat_post"),
            ])?;
            let bar_pos = format!("{x} -1.2 1.0");
            w.empty("geom", &[
                ("type", "box"),
                ("pos", &bar_pos),
                ("size", "0.02 0.4 0.05"),
                ("rgba", "1 1 1 1"),
            ])?;
        }
        w.empty("include", &[("file", &self.robot_file)])?;
        w.end("worldbody")?;

        w.end("mujoco")?;
        w.finish()
    }
}

/// `<option>`, `<asset>` and `<visual>` blocks shared by every scene.
pub(crate) fn write_header(w: &mut MjcfWriter) -> SceneResult<()> {
    w.empty("option", &[("timestep", TIMESTEP), ("gravity", "0 0 -9.81")])?;

    w.start("asset", &[])?;
    w.empty("texture", &[
        ("type", "2d"),
        ("name", "tex_track"),
        ("builtin", "checker"),
        ("rgb1", "0.2 0.2 0.2"),
        ("rgb2", "0.3 0.3 0.3"),
        ("width", "512"),
        ("height", "512"),
    ])?;
    w.empty("material", &[
        ("name", "mat_track"),
        ("texture", "tex_track"),
        ("texrepeat", "10 1"),
        ("reflectance", "0.0"),
    ])?;
    w.empty("material", &[("name", "mat_line"), ("rgba", "1 1 1 0.5")])?;
    w.empty("material", &[("name", "mat_post"), ("rgba", "0.9 0.2 0.2 1")])?;
    w.empty("material", &[("name", "robot_mat"), ("rgba", "0.9 0.1 0.1 1")])?;
    w.empty("material", &[("name", "leg_mat"), ("rgba", "0.1 0.1 0.1 1")])?;
    w.end("asset")?;

    w.start("visual", &[])?;
    w.empty("headlight", &[
        ("diffuse", "0.6 0.6 0.6"),
        ("ambient", "0.3 0.3 0.3"),
        ("specular", "0 0 0"),
    ])?;
    w.empty("rgba", &[("haze", "0.15 0.25 0.35 1")])?;
    w.end("visual")
}

/// Overhead light and the floor plane.
pub(crate) fn write_ground(w: &mut MjcfWriter) -> SceneResult<()> {
    w.empty("light", &[
        ("pos", "0 0 4"),
        ("dir", "0 0 -1"),
        ("directional", "true"),
        ("castshadow", "true"),
    ])?;
    w.empty("geom", &[
        ("name", "floor"),
        ("type", "plane"),
        ("material", "mat_track"),
        ("size", "20 2 0.1"),
    ])
}
