//! The `Engine` trait: everything the showcase needs from a physics engine.

use hop_core::Rgba;

use crate::EngineResult;

/// A rigid-body simulator that owns the model and its state.
///
/// The layout of [`qpos`][Self::qpos] follows MuJoCo: a free root joint
/// contributes `x, y, z, qw, qx, qy, qz` first, then one entry per hinge.
/// Callers only rely on `qpos[0]` and `qpos[1]` being the root's horizontal
/// position.
///
/// # Materials
///
/// Materials are addressed by an id resolved once with
/// [`material_id`][Self::material_id].  `None` means the scene has no such
/// material; callers skip whatever visual effect depended on it.
pub trait Engine {
    /// Integration timestep, seconds.
    fn timestep(&self) -> f64;

    /// Current simulation time, seconds.  Zero after [`reset`][Self::reset].
    fn time(&self) -> f64;

    /// Generalized positions.
    fn qpos(&self) -> &[f64];

    /// Generalized velocities.
    fn qvel(&self) -> &[f64];

    fn actuator_count(&self) -> usize;

    /// Write the actuator command buffer.  `ctrl.len()` must equal
    /// [`actuator_count`][Self::actuator_count].  Limits are applied during
    /// [`step`][Self::step], not here.
    fn set_ctrl(&mut self, ctrl: &[f64]) -> EngineResult<()>;

    /// Current (unclamped) command buffer.
    fn ctrl(&self) -> &[f64];

    /// Advance the state by one timestep.
    fn step(&mut self);

    /// Restore the initial state: positions, velocities, time, and controls.
    /// Model properties such as material colors are untouched.
    fn reset(&mut self);

    fn material_id(&self, name: &str) -> Option<usize>;

    fn material_rgba(&self, id: usize) -> Option<Rgba>;

    fn set_material_rgba(&mut self, id: usize, rgba: Rgba) -> EngineResult<()>;

    /// Total absolute mechanical power delivered by the actuators during the
    /// last step, watts.
    fn actuator_power(&self) -> f64;

    /// Total mass of the model, kilograms.
    fn total_mass(&self) -> f64;
}
