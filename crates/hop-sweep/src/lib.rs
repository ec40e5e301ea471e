//! `hop-sweep`: the leg-length × frequency grid behind the results CSV.
//!
//! For every cell the monolithic demo scene is generated in memory for that
//! leg length, a [`PlanarHopper`][hop_engine::PlanarHopper] is loaded from
//! it and driven with the antiphase sine command for a fixed simulated
//! duration.
//!
//! | Column     | Value                                                   |
//! |------------|---------------------------------------------------------|
//! | `Speed`    | distance / simulated duration                           |
//! | `CoT`      | actuator energy / (mass · g · distance); `inf` if ~0 m  |
//! | `Distance` | planar displacement from the reset position             |
//!
//! # Feature flags
//!
//! | Feature    | Effect                                   |
//! |------------|------------------------------------------|
//! | `parallel` | Runs grid cells on Rayon's thread pool.  |

pub mod config;
pub mod error;
pub mod run;


pub use config::{DEFAULT_FREQUENCIES, SweepConfig};
pub use error::{SweepError, SweepResult};
pub use run::{MIN_DISTANCE, cost_of_transport, run_cell, run_sweep};
