//! Planar position and the per-tick run metrics.
//!
//! Metrics are measured against the *baseline*: the position captured at
//! the most recent mode switch.  They are recomputed from scratch every tick
//! and discarded on the next switch.

/// Elapsed time (seconds) at or below which reported speed is exactly zero.
///
/// Right after a switch the displacement is tiny and so is the elapsed
/// time; dividing one by the other produces meaningless spikes.
pub const SPEED_GUARD_SECS: f64 = 0.1;

// ── Planar ────────────────────────────────────────────────────────────────────

/// Horizontal position of the robot's root body (`qpos[0]`, `qpos[1]`).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Planar {
    pub x: f64,
    pub y: f64,
}

impl Planar {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Read the root position from a generalized-position slice.
    ///
    /// Missing coordinates read as zero so a degenerate model never panics.
    pub fn from_qpos(qpos: &[f64]) -> Self {
        Self {
            x: qpos.first().copied().unwrap_or(0.0),
            y: qpos.get(1).copied().unwrap_or(0.0),
        }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance(self, other: Planar) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for Planar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── RunMetrics ────────────────────────────────────────────────────────────────

/// Displacement and speed since the last mode switch.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RunMetrics {
    pub baseline:     Planar,
    pub current:      Planar,
    /// Seconds since the baseline was captured.
    pub elapsed_secs: f64,
    /// Straight-line distance from the baseline, metres.
    pub distance:     f64,
    /// `distance / elapsed_secs`, or `0.0` inside the speed guard.
    pub speed:        f64,
}

impl RunMetrics {
    pub fn measure(baseline: Planar, current: Planar, elapsed_secs: f64) -> Self {
        let distance = current.distance(baseline);
        let speed = if elapsed_secs > SPEED_GUARD_SECS {
            distance / elapsed_secs
        } else {
            0.0
        };
        Self { baseline, current, elapsed_secs, distance, speed }
    }

    /// Metrics at the instant of a switch: zero distance, zero speed.
    pub fn at_baseline(baseline: Planar) -> Self {
        Self::measure(baseline, baseline, 0.0)
    }
}
