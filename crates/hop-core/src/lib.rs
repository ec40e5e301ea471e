//! `hop-core`: foundational types for the hopper workspace.
//!
//! This crate is a dependency of every other `hop-*` crate.  It intentionally
//! has no `hop-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`mode`]      | `ControlMode`, `ModeSpec`, `ModeTable`                  |
//! | [`metrics`]   | `Planar`, `RunMetrics`, the speed guard                 |
//! | [`color`]     | `Rgba`                                                  |
//! | [`clock`]     | `WallClock`, `SystemClock`, `VirtualClock`              |
//! | [`config`]    | `ShowcaseConfig`, `CameraConfig`                        |
//! | [`error`]     | `HopError`, `HopResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to configuration types.     |

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod metrics;
pub mod mode;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{SystemClock, VirtualClock, WallClock};
pub use color::Rgba;
pub use config::{CameraConfig, ShowcaseConfig};
pub use error::{HopError, HopResult};
pub use metrics::{Planar, RunMetrics, SPEED_GUARD_SECS};
pub use mode::{ControlMode, ModeSpec, ModeTable};
