//! Builder for constructing a [`Showcase`].

use std::path::Path;

use hop_core::{Planar, ShowcaseConfig, WallClock};
use hop_engine::{Camera, Engine, EngineResult, Viewer};
use tracing::warn;

use crate::{Showcase, ShowcaseError, ShowcaseResult};

/// Builder for [`Showcase<E, V, C>`].
///
/// # Required inputs
///
/// - [`ShowcaseConfig`]: scene path, switch interval, modes, camera
/// - `V: Viewer`: the display surface; the run ends when it stops
/// - `C: WallClock`: [`SystemClock`][hop_core::SystemClock] for live runs,
///   [`VirtualClock`][hop_core::VirtualClock] for headless runs and tests
///
/// The engine is supplied at [`build`][Self::build] as a loader so that a
/// missing scene file is detected before any engine object exists.
///
/// # Example
///
/// ```rust,ignore
/// let mut showcase = ShowcaseBuilder::new(config, viewer, SystemClock::new())
///     .build(PlanarHopper::load)?;
/// showcase.run(&mut StatusLine::stdout())?;
/// ```
pub struct ShowcaseBuilder<V: Viewer, C: WallClock> {
    config: ShowcaseConfig,
    viewer: V,
    clock:  C,
}

impl<V: Viewer, C: WallClock> ShowcaseBuilder<V, C> {
    pub fn new(config: ShowcaseConfig, viewer: V, clock: C) -> Self {
        Self { config, viewer, clock }
    }

    /// Validate the configuration, check the scene exists, load the engine
    /// and return a ready-to-run [`Showcase`].
    ///
    /// `load` is not called if the scene file is missing; the result is
    /// [`ShowcaseError::SceneNotFound`].
    pub fn build<E, F>(self, load: F) -> ShowcaseResult<Showcase<E, V, C>>
    where
        E: Engine,
        F: FnOnce(&Path) -> EngineResult<E>,
    {
        self.config.validate()?;

        let scene = self.config.scene_path.as_path();
        if !scene.exists() {
            return Err(ShowcaseError::SceneNotFound(scene.to_path_buf()));
        }

        let mut engine = load(scene)?;

        let material = engine.material_id(&self.config.robot_material);
        if material.is_none() {
            warn!(
                material = %self.config.robot_material,
                "material not found in scene; mode colors disabled"
            );
        }

        engine.reset();
        let baseline = Planar::from_qpos(engine.qpos());
        let last_switch = self.clock.now();
        let camera = Camera::from_config(&self.config.camera);

        Ok(Showcase {
            mode: self.config.initial_mode,
            config: self.config,
            engine,
            viewer: self.viewer,
            clock: self.clock,
            camera,
            material,
            baseline,
            last_switch,
            ticks: 0,
            steps: 0,
            switches: 0,
            last_metrics: None,
        })
    }
}
