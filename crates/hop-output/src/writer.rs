//! The `TelemetryWriter` trait implemented by telemetry backends.

use crate::{OutputResult, TelemetryRow};

/// Trait implemented by telemetry backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with [`TelemetryObserver::take_error`].
///
/// [`TelemetryObserver::take_error`]: crate::TelemetryObserver::take_error
pub trait TelemetryWriter {
    /// Write one per-tick row.
    fn write_row(&mut self, row: &TelemetryRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
