//! `hop-output`: showcase output for the hopper workspace.
//!
//! | Type                  | Destination | Content                                   |
//! |-----------------------|-------------|-------------------------------------------|
//! | [`StatusLine`]        | stdout      | one `\r`-overwritten HUD line per tick    |
//! | [`TelemetryCsvWriter`]| CSV file    | one [`TelemetryRow`] per actuated tick    |
//!
//! Both are driven through `hop_showcase::ShowcaseObserver`; telemetry
//! backends implement [`TelemetryWriter`] and are wrapped in a
//! [`TelemetryObserver`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use hop_output::{StatusLine, TelemetryCsvWriter, TelemetryObserver};
//!
//! let writer = TelemetryCsvWriter::create(Path::new("telemetry.csv"))?;
//! let mut obs = (StatusLine::stdout(), TelemetryObserver::new(writer));
//! showcase.run(&mut obs)?;
//! obs.1.take_error().map(|e| eprintln!("telemetry error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod status;
pub mod writer;


pub use csv::TelemetryCsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TelemetryObserver;
pub use row::TelemetryRow;
pub use status::{StatusLine, format_frequency, status_text};
pub use writer::TelemetryWriter;
