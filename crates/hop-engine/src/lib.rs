//! `hop-engine`: the physics engine and display seams of the showcase.
//!
//! The showcase loop never integrates dynamics itself.  It talks to an
//! [`Engine`] (owns model and state, performs steps) and a [`Viewer`]
//! (display surface that decides when the run ends).
//!
//! | Type              | Role                                                   |
//! |-------------------|--------------------------------------------------------|
//! | [`Engine`]        | Model/state owner: qpos, ctrl, step, reset, materials  |
//! | [`PlanarHopper`]  | Reduced-order hopper built from a [`SceneSummary`]     |
//! | [`Viewer`]        | Display surface: `is_running`, `sync`                  |
//! | [`HeadlessViewer`]| Frame-budgeted viewer with an external stop handle     |
//! | [`Camera`]        | Viewer framing (azimuth, distance, elevation, lookat)  |
//!
//! [`SceneSummary`]: hop_scene::SceneSummary

pub mod camera;
pub mod engine;
pub mod error;
pub mod hopper;
pub mod viewer;

#[cfg(test)]
mod tests;

pub use camera::Camera;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use hopper::PlanarHopper;
pub use viewer::{HeadlessViewer, Viewer};
