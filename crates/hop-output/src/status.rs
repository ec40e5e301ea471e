//! Console HUD: one status line per tick, overwritten in place with `\r`.

use std::io::{self, Stdout, Write};

use hop_core::{ControlMode, ModeSpec};
use hop_showcase::{RunSummary, ShowcaseObserver, TickReport};

use crate::{OutputError, OutputResult};

/// Frequency as a short decimal: integral values keep one decimal place
/// (`1.0`), others print in full (`2.25`).
pub fn format_frequency(hz: f64) -> String {
    if hz.fract() == 0.0 && hz.is_finite() {
        format!("{hz:.1}")
    } else {
        hz.to_string()
    }
}

/// The HUD text for one tick, without the trailing flush.
pub fn status_text(mode: ControlMode, frequency_hz: f64, distance: f64, speed: f64) -> String {
    format!(
        "\r {} [{}]  Freq: {}Hz  |  Dist: {:.2}m  |  Speed: {:.2} m/s    ",
        mode.icon(),
        mode.display_name(),
        format_frequency(frequency_hz),
        distance,
        speed,
    )
}

/// A [`ShowcaseObserver`] that prints the live HUD.
///
/// Switch ticks print nothing; the next actuated tick overwrites the line.
///
/// Write errors are stored and retrieved with [`take_error`][Self::take_error].
pub struct StatusLine<W: Write> {
    out:        W,
    last_error: Option<OutputError>,
}

impl StatusLine<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result: OutputResult<()> = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(OutputError::from);
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> ShowcaseObserver for StatusLine<W> {
    fn on_start(&mut self, mode: ControlMode, spec: ModeSpec) {
        self.emit(&format!(
            "\n\n🎥 LAUNCHING LIVE DEMO...\n   (Keep this terminal visible next to the viewer for metrics)\n\n{}",
            status_text(mode, spec.frequency_hz, 0.0, 0.0)
        ));
    }

    fn on_tick(&mut self, report: &TickReport) {
        self.emit(&status_text(
            report.mode,
            report.spec.frequency_hz,
            report.metrics.distance,
            report.metrics.speed,
        ));
    }

    fn on_end(&mut self, _summary: &RunSummary) {
        self.emit("\n");
    }
}
