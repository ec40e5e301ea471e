//! The display surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Camera, Engine};

/// A passive viewer: the loop pushes state to it once per tick and asks it
/// whether to keep going.
///
/// Closing the window (or whatever the surface's equivalent is) is the only
/// way a showcase run ends.
pub trait Viewer {
    fn is_running(&self) -> bool;

    /// Present the current engine state with the given framing.
    fn sync(&mut self, engine: &dyn Engine, camera: &Camera);
}

// ── HeadlessViewer ────────────────────────────────────────────────────────────

/// A viewer with no display.  It stops after a frame budget, or earlier if
/// its stop handle is raised from elsewhere (e.g. a Ctrl-C handler).
#[derive(Debug)]
pub struct HeadlessViewer {
    budget:      Option<u64>,
    synced:      u64,
    stop:        Arc<AtomicBool>,
    last_camera: Option<Camera>,
    last_time:   f64,
}

impl HeadlessViewer {
    /// Run until `frames` syncs have been presented.
    pub fn with_frame_budget(frames: u64) -> Self {
        Self { budget: Some(frames), ..Self::unbounded() }
    }

    /// Run until stopped through [`stop_handle`][Self::stop_handle].
    pub fn unbounded() -> Self {
        Self {
            budget:      None,
            synced:      0,
            stop:        Arc::new(AtomicBool::new(false)),
            last_camera: None,
            last_time:   0.0,
        }
    }

    /// Setting the returned flag to `true` closes the viewer.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn frames_synced(&self) -> u64 {
        self.synced
    }

    pub fn last_camera(&self) -> Option<Camera> {
        self.last_camera
    }

    /// Simulation time at the most recent sync.
    pub fn last_sim_time(&self) -> f64 {
        self.last_time
    }
}

impl Viewer for HeadlessViewer {
    fn is_running(&self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return false;
        }
        self.budget.is_none_or(|b| self.synced < b)
    }

    fn sync(&mut self, engine: &dyn Engine, camera: &Camera) {
        self.synced += 1;
        self.last_camera = Some(*camera);
        self.last_time = engine.time();
    }
}
