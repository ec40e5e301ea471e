//! Viewer framing.

use hop_core::CameraConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// Degrees.
    pub azimuth:   f64,
    pub distance:  f64,
    /// Degrees.
    pub elevation: f64,
    pub lookat:    [f64; 3],
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            azimuth:   config.azimuth,
            distance:  config.distance,
            elevation: config.elevation,
            lookat:    config.lookat,
        }
    }

    /// Keep the robot in frame: look `lead` metres ahead of `x`.
    #[inline]
    pub fn track(&mut self, x: f64, lead: f64) {
        self.lookat[0] = x + lead;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
