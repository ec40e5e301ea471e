//! `hop-scene`: MJCF scene generation for the hopper workspace.
//!
//! # Files produced
//!
//! | Function                         | File(s)                                      |
//! |----------------------------------|----------------------------------------------|
//! | [`generate_robot_bodies`]        | `robot_L{L:.2}.xml` per leg length, plus `robot_body.xml` for 0.10 m |
//! | [`build_track_scene`]            | `track_scene.xml` (includes `robot_body.xml`) |
//! | [`make_final_demo`]              | `final_demo.xml` (monolithic, no includes)   |
//!
//! All documents are written through [`MjcfWriter`], a thin layer over
//! `quick_xml::Writer`.  [`SceneSummary`] reads a written scene back
//! (following `<include>`) and extracts the handful of parameters a
//! reduced-order engine needs.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hop_scene::{generate_robot_bodies, build_track_scene, make_final_demo, LEG_LENGTHS};
//!
//! let dir = Path::new("generated");
//! generate_robot_bodies(dir, &LEG_LENGTHS)?;
//! build_track_scene(dir)?;
//! let scene = make_final_demo(dir)?;
//! let summary = SceneSummary::from_path(&scene)?;
//! ```

pub mod demo;
pub mod error;
pub mod factory;
pub mod robot;
pub mod summary;
pub mod track;
pub mod writer;


pub use demo::{FinalDemoSpec, FINAL_DEMO_FILE};
pub use error::{SceneError, SceneResult};
pub use factory::{
    DEFAULT_BODY_FILE, DEFAULT_LEG_LENGTH, LEG_LENGTHS, build_track_scene,
    generate_robot_bodies, make_final_demo, robot_file_name,
};
pub use robot::RobotSpec;
pub use summary::{HingeDef, LegDef, MaterialDef, MotorDef, RootBody, SceneSummary};
pub use track::{TRACK_SCENE_FILE, TrackSpec};
pub use writer::MjcfWriter;
