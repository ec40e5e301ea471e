//! Control modes and the sinusoidal actuation signal.
//!
//! The showcase alternates between exactly two modes.  Each carries a
//! frequency (Hz) and an amplitude (unitless control scale) that shape
//!
//!   target(t) = amplitude * sin(2π * frequency * t)
//!
//! where `t` is simulation time, not wall time.

use std::f64::consts::TAU;
use std::fmt;

use crate::{HopError, HopResult, Rgba};

// ── ControlMode ───────────────────────────────────────────────────────────────

/// Which of the two actuation regimes is active.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlMode {
    /// Low-frequency drive; the robot shuffles forward.
    #[default]
    Struggling,
    /// Drive tuned near the legs' natural frequency.
    ResonanceSprint,
}

impl ControlMode {
    /// The other mode.  Alternation is a strict 2-cycle.
    #[inline]
    pub fn toggled(self) -> ControlMode {
        match self {
            ControlMode::Struggling      => ControlMode::ResonanceSprint,
            ControlMode::ResonanceSprint => ControlMode::Struggling,
        }
    }

    /// Upper-case label shown in the status line.
    pub fn display_name(self) -> &'static str {
        match self {
            ControlMode::Struggling      => "STRUGGLING",
            ControlMode::ResonanceSprint => "RESONANCE SPRINT",
        }
    }

    /// Status-line marker: green for the sprint, red otherwise.
    pub fn icon(self) -> &'static str {
        match self {
            ControlMode::Struggling      => "🔴",
            ControlMode::ResonanceSprint => "🟢",
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── ModeSpec ──────────────────────────────────────────────────────────────────

/// A (frequency, amplitude) pair governing the actuator signal.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeSpec {
    pub frequency_hz: f64,
    pub amplitude:    f64,
}

impl ModeSpec {
    #[inline]
    pub fn new(frequency_hz: f64, amplitude: f64) -> Self {
        Self { frequency_hz, amplitude }
    }

    /// Actuator target at simulation time `sim_time`.
    #[inline]
    pub fn target(&self, sim_time: f64) -> f64 {
        self.amplitude * (TAU * self.frequency_hz * sim_time).sin()
    }

    /// Antiphase command for the two hip actuators: `(target, -target)`.
    #[inline]
    pub fn antiphase(&self, sim_time: f64) -> [f64; 2] {
        let target = self.target(sim_time);
        [target, -target]
    }

    pub fn validate(&self) -> HopResult<()> {
        if !self.frequency_hz.is_finite() || self.frequency_hz < 0.0 {
            return Err(HopError::Config(format!(
                "frequency must be a finite non-negative number, got {}",
                self.frequency_hz
            )));
        }
        if !self.amplitude.is_finite() {
            return Err(HopError::Config(format!(
                "amplitude must be finite, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }
}

// ── ModeTable ─────────────────────────────────────────────────────────────────

/// Per-mode signal parameters and the material color marking each mode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeTable {
    pub struggling:        ModeSpec,
    pub sprint:            ModeSpec,
    pub struggling_color:  Rgba,
    pub sprint_color:      Rgba,
}

impl ModeTable {
    pub fn spec(&self, mode: ControlMode) -> ModeSpec {
        match mode {
            ControlMode::Struggling      => self.struggling,
            ControlMode::ResonanceSprint => self.sprint,
        }
    }

    pub fn color(&self, mode: ControlMode) -> Rgba {
        match mode {
            ControlMode::Struggling      => self.struggling_color,
            ControlMode::ResonanceSprint => self.sprint_color,
        }
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            struggling:       ModeSpec::new(1.0, 0.5),
            sprint:           ModeSpec::new(2.25, 1.0),
            struggling_color: Rgba::new(1.0, 0.1, 0.1, 1.0),
            sprint_color:     Rgba::new(0.1, 1.0, 0.1, 1.0),
        }
    }
}
