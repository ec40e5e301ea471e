//! Wall-clock sources for the paced showcase loop.
//!
//! # Design
//!
//! The loop measures mode-switch intervals and pacing in wall time, which
//! makes it untestable against the real clock.  [`WallClock`] abstracts the
//! two things the loop needs (read "now", sleep) so tests and headless runs
//! can substitute [`VirtualClock`], whose `sleep` simply advances time.
//!
//! Times are `f64` seconds since an arbitrary origin; only differences
//! matter.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source the loop can also block on.
pub trait WallClock {
    /// Seconds since this clock's origin.
    fn now(&self) -> f64;

    /// Block (or pretend to) for `secs` seconds.  Non-positive values are a
    /// no-op.
    fn sleep(&self, secs: f64);
}

// ── SystemClock ───────────────────────────────────────────────────────────────

/// The real monotonic clock; `sleep` blocks the thread.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn sleep(&self, secs: f64) {
        if secs > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(secs));
        }
    }
}

// ── VirtualClock ──────────────────────────────────────────────────────────────

/// A manually driven clock.  `sleep` advances time instantly.
///
/// With the showcase's pacing sleep this makes wall time track simulation
/// time exactly, which is what headless runs want.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Cell<f64>,
}

impl VirtualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    /// Jump to an absolute time.
    pub fn set(&self, t: f64) {
        self.now.set(t);
    }

    /// Move forward by `secs`.
    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl WallClock for VirtualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn sleep(&self, secs: f64) {
        if secs > 0.0 {
            self.advance(secs);
        }
    }
}

impl<C: WallClock + ?Sized> WallClock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }

    fn sleep(&self, secs: f64) {
        (**self).sleep(secs)
    }
}
