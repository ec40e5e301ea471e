//! Showcase configuration.
//!
//! Typically built from [`ShowcaseConfig::default`] and adjusted by the
//! application crate (CLI flags or a JSON file with the `serde` feature).

use std::path::PathBuf;

use crate::{ControlMode, HopError, HopResult, ModeTable};

// ── CameraConfig ──────────────────────────────────────────────────────────────

/// Initial viewer framing: a side view along the race track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// Degrees.
    pub azimuth:   f64,
    pub distance:  f64,
    /// Degrees; negative looks down.
    pub elevation: f64,
    pub lookat:    [f64; 3],
    /// How far ahead of the robot (along x) the camera looks while tracking.
    pub lead:      f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            azimuth:   90.0,
            distance:  4.0,
            elevation: -10.0,
            lookat:    [2.0, 0.0, 0.0],
            lead:      1.0,
        }
    }
}

// ── ShowcaseConfig ────────────────────────────────────────────────────────────

/// Everything the live showcase needs before it can start.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShowcaseConfig {
    /// MJCF scene to load.  Must exist before the loop starts.
    pub scene_path: PathBuf,

    /// Wall-clock seconds between mode switches.
    pub switch_interval_secs: f64,

    /// Signal parameters and colors for both modes.
    pub modes: ModeTable,

    /// Mode active when the loop starts.
    pub initial_mode: ControlMode,

    /// Material recolored on every switch.  If the scene has no material by
    /// this name the recolor is skipped.
    pub robot_material: String,

    pub camera: CameraConfig,
}

impl ShowcaseConfig {
    pub fn validate(&self) -> HopResult<()> {
        if !self.switch_interval_secs.is_finite() || self.switch_interval_secs <= 0.0 {
            return Err(HopError::Config(format!(
                "switch interval must be positive, got {}",
                self.switch_interval_secs
            )));
        }
        self.modes.struggling.validate()?;
        self.modes.sprint.validate()?;
        Ok(())
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            scene_path:           PathBuf::from("generated/final_demo.xml"),
            switch_interval_secs: 8.0,
            modes:                ModeTable::default(),
            initial_mode:         ControlMode::Struggling,
            robot_material:       "robot_mat".to_owned(),
            camera:               CameraConfig::default(),
        }
    }
}
