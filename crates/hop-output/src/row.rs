//! Plain data row types written by telemetry backends.

use hop_core::ControlMode;
use hop_showcase::TickReport;

/// One actuated showcase tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRow {
    pub tick:         u64,
    pub sim_time:     f64,
    pub wall_elapsed: f64,
    pub mode:         ControlMode,
    pub frequency:    f64,
    /// Left actuator command; the right one is its negation.
    pub target:       f64,
    pub distance:     f64,
    pub speed:        f64,
}

impl From<&TickReport> for TelemetryRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:         r.tick,
            sim_time:     r.sim_time,
            wall_elapsed: r.wall_elapsed,
            mode:         r.mode,
            frequency:    r.spec.frequency_hz,
            target:       r.command[0],
            distance:     r.metrics.distance,
            speed:        r.metrics.speed,
        }
    }
}
