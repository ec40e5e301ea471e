use hop_scene::LEG_LENGTHS;

use crate::{SweepError, SweepResult};

/// Frequencies swept by default, Hz.
pub const DEFAULT_FREQUENCIES: [f64; 7] = [0.5, 1.0, 1.5, 2.0, 2.25, 2.5, 3.0];

#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Metres; one robot per entry.
    pub leg_lengths:   Vec<f64>,
    /// Hz.
    pub frequencies:   Vec<f64>,
    /// Actuator command amplitude, same for every cell.
    pub amplitude:     f64,
    /// Simulated seconds per cell.
    pub duration_secs: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            leg_lengths:   LEG_LENGTHS.to_vec(),
            frequencies:   DEFAULT_FREQUENCIES.to_vec(),
            amplitude:     1.0,
            duration_secs: 10.0,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> SweepResult<()> {
        if self.leg_lengths.is_empty() || self.frequencies.is_empty() {
            return Err(SweepError::Config("sweep grid has no cells".into()));
        }
        if let Some(l) = self.leg_lengths.iter().find(|l| !l.is_finite() || **l <= 0.0) {
            return Err(SweepError::Config(format!("leg length must be positive, got {l}")));
        }
        if let Some(f) = self.frequencies.iter().find(|f| !f.is_finite() || **f < 0.0) {
            return Err(SweepError::Config(format!("frequency must be non-negative, got {f}")));
        }
        if !self.amplitude.is_finite() {
            return Err(SweepError::Config(format!("amplitude must be finite, got {}", self.amplitude)));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(SweepError::Config(format!("duration must be positive, got {}", self.duration_secs)));
        }
        Ok(())
    }

    /// Grid cells in output order: leg length, then frequency.
    pub fn cells(&self) -> Vec<(f64, f64)> {
        self.leg_lengths
            .iter()
            .flat_map(|&l| self.frequencies.iter().map(move |&f| (l, f)))
            .collect()
    }
}
