//! `hop-results`: post-processing of leg-length × frequency sweep grids.
//!
//! | Item                 | Role                                                     |
//! |----------------------|----------------------------------------------------------|
//! | [`GridRecord`]       | one `LegLength,Frequency,Speed,CoT,Distance` CSV row     |
//! | [`load_grid_csv`]    | read a grid file (missing → [`ResultsError::NotFound`])  |
//! | [`GridWriter`]       | write a grid file                                        |
//! | [`Heatmap`]          | rows = leg lengths, columns = frequencies, sorted        |
//! | [`Race`]             | 1.0 Hz vs 2.25 Hz comparison at one leg length           |
//! | [`render`]           | SVG output via `plotters`                                |

pub mod error;
pub mod grid;
pub mod heatmap;
pub mod race;
pub mod record;
pub mod render;


pub use error::{ResultsError, ResultsResult};
pub use grid::{DEFAULT_GRID_FILE, GridWriter, load_grid_csv, load_grid_reader, write_grid_csv};
pub use heatmap::{HeatCell, Heatmap};
pub use race::{Race, RaceLane};
pub use record::GridRecord;
pub use render::{render_heatmap_svg, render_race_svg};

/// Two grid coordinates closer than this are the same axis value.
pub(crate) const AXIS_EPS: f64 = 1e-9;

pub(crate) fn same_axis_value(a: f64, b: f64) -> bool {
    (a - b).abs() < AXIS_EPS
}
