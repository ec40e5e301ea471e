//! `TelemetryObserver<W>`: bridges `ShowcaseObserver` to a `TelemetryWriter`.

use hop_showcase::{RunSummary, ShowcaseObserver, TickReport};

use crate::writer::TelemetryWriter;
use crate::{OutputError, OutputResult, TelemetryRow};

/// A [`ShowcaseObserver`] that writes one row per actuated tick to any
/// [`TelemetryWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `showcase.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TelemetryObserver<W: TelemetryWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: TelemetryWriter> TelemetryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `showcase.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush the writer; needed after `run_ticks`, which has no end hook.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TelemetryWriter> ShowcaseObserver for TelemetryObserver<W> {
    fn on_tick(&mut self, report: &TickReport) {
        let result = self.writer.write_row(&TelemetryRow::from(report));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
