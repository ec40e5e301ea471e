//! Writing generated scenes to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{FINAL_DEMO_FILE, FinalDemoSpec, RobotSpec, SceneResult, TRACK_SCENE_FILE, TrackSpec};

/// Leg lengths of the robot variants, metres.
pub const LEG_LENGTHS: [f64; 5] = [0.10, 0.15, 0.20, 0.25, 0.30];

/// The variant also saved as [`DEFAULT_BODY_FILE`] and used by the demo.
pub const DEFAULT_LEG_LENGTH: f64 = 0.10;

/// Robot body loaded by the track scene's `<include>`.
pub const DEFAULT_BODY_FILE: &str = "robot_body.xml";

/// `robot_L0.10.xml`, `robot_L0.15.xml`, …
pub fn robot_file_name(leg_length: f64) -> String {
    format!("robot_L{leg_length:.2}.xml")
}

/// Write one body file per leg length into `dir` (created if missing).
///
/// The [`DEFAULT_LEG_LENGTH`] variant is additionally written as
/// [`DEFAULT_BODY_FILE`] so the track scene has a robot to include.
/// Returns the paths written, in order.
pub fn generate_robot_bodies(dir: &Path, leg_lengths: &[f64]) -> SceneResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    info!(count = leg_lengths.len(), dir = %dir.display(), "generating robot bodies");

    let mut written = Vec::with_capacity(leg_lengths.len() + 1);
    for &leg_length in leg_lengths {
        let xml = RobotSpec::with_leg_length(leg_length).to_mjcf()?;

        let path = dir.join(robot_file_name(leg_length));
        fs::write(&path, &xml)?;
        info!(file = %path.display(), "robot body written");
        written.push(path);

        if same_length(leg_length, DEFAULT_LEG_LENGTH) {
            let default_path = dir.join(DEFAULT_BODY_FILE);
            fs::write(&default_path, &xml)?;
            info!(file = %default_path.display(), "saved as default robot body");
            written.push(default_path);
        }
    }
    Ok(written)
}

/// Write `track_scene.xml` into `dir` (created if missing).
pub fn build_track_scene(dir: &Path) -> SceneResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(TRACK_SCENE_FILE);
    fs::write(&path, TrackSpec::default().to_mjcf()?)?;
    info!(file = %path.display(), "track scene written");
    Ok(path)
}

/// Write the monolithic `final_demo.xml` into `dir` (created if missing).
pub fn make_final_demo(dir: &Path) -> SceneResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(FINAL_DEMO_FILE);
    fs::write(&path, FinalDemoSpec::default().to_mjcf()?)?;
    info!(file = %path.display(), "final demo scene written");
    Ok(path)
}

/// Leg lengths come from decimal literals; compare at file-name precision.
fn same_length(a: f64, b: f64) -> bool {
    (a - b).abs() < 5e-4
}
