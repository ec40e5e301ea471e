//! CSV telemetry backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, TelemetryRow, format_frequency};
use crate::writer::TelemetryWriter;

pub const TELEMETRY_HEADER: [&str; 8] =
    ["tick", "sim_time", "wall_elapsed", "mode", "frequency", "target", "distance", "speed"];

/// Writes one telemetry row per actuated tick.
pub struct TelemetryCsvWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl TelemetryCsvWriter<File> {
    /// Create (or truncate) `path` and write the header row.  Parent
    /// directories are created if missing.
    pub fn create(path: &Path) -> OutputResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> TelemetryCsvWriter<W> {
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(out);
        inner.write_record(TELEMETRY_HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> TelemetryWriter for TelemetryCsvWriter<W> {
    fn write_row(&mut self, row: &TelemetryRow) -> OutputResult<()> {
        self.inner.write_record(&[
            row.tick.to_string(),
            format!("{:.4}", row.sim_time),
            format!("{:.4}", row.wall_elapsed),
            row.mode.display_name().to_string(),
            format_frequency(row.frequency),
            format!("{:.6}", row.target),
            format!("{:.6}", row.distance),
            format!("{:.6}", row.speed),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
