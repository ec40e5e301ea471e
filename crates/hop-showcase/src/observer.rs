//! Showcase observer trait for the status readout and data collection.

use hop_core::{ControlMode, ModeSpec};

use crate::{RunSummary, SwitchEvent, TickReport};

/// Callbacks invoked by [`Showcase::run`][crate::Showcase::run] at key
/// points in the loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: switch counter
///
/// ```rust,ignore
/// struct SwitchCounter(usize);
///
/// impl ShowcaseObserver for SwitchCounter {
///     fn on_switch(&mut self, event: &SwitchEvent) {
///         self.0 += 1;
///         println!("now {}", event.to);
///     }
/// }
/// ```
pub trait ShowcaseObserver {
    /// Called once before the first tick with the starting mode.
    fn on_start(&mut self, _mode: ControlMode, _spec: ModeSpec) {}

    /// Called on every switch tick, after the engine has been reset.
    fn on_switch(&mut self, _event: &SwitchEvent) {}

    /// Called on every actuated tick, after the engine step.
    fn on_tick(&mut self, _report: &TickReport) {}

    /// Called once after the viewer stops running.
    fn on_end(&mut self, _summary: &RunSummary) {}
}

/// A [`ShowcaseObserver`] that does nothing.
pub struct NoopObserver;

impl ShowcaseObserver for NoopObserver {}

impl<O: ShowcaseObserver + ?Sized> ShowcaseObserver for &mut O {
    fn on_start(&mut self, mode: ControlMode, spec: ModeSpec) {
        (**self).on_start(mode, spec)
    }

    fn on_switch(&mut self, event: &SwitchEvent) {
        (**self).on_switch(event)
    }

    fn on_tick(&mut self, report: &TickReport) {
        (**self).on_tick(report)
    }

    fn on_end(&mut self, summary: &RunSummary) {
        (**self).on_end(summary)
    }
}

/// Fan out to two observers, `A` first.
impl<A: ShowcaseObserver, B: ShowcaseObserver> ShowcaseObserver for (A, B) {
    fn on_start(&mut self, mode: ControlMode, spec: ModeSpec) {
        self.0.on_start(mode, spec);
        self.1.on_start(mode, spec);
    }

    fn on_switch(&mut self, event: &SwitchEvent) {
        self.0.on_switch(event);
        self.1.on_switch(event);
    }

    fn on_tick(&mut self, report: &TickReport) {
        self.0.on_tick(report);
        self.1.on_tick(report);
    }

    fn on_end(&mut self, summary: &RunSummary) {
        self.0.on_end(summary);
        self.1.on_end(summary);
    }
}

/// An absent observer is a no-op.
impl<O: ShowcaseObserver> ShowcaseObserver for Option<O> {
    fn on_start(&mut self, mode: ControlMode, spec: ModeSpec) {
        if let Some(o) = self {
            o.on_start(mode, spec);
        }
    }

    fn on_switch(&mut self, event: &SwitchEvent) {
        if let Some(o) = self {
            o.on_switch(event);
        }
    }

    fn on_tick(&mut self, report: &TickReport) {
        if let Some(o) = self {
            o.on_tick(report);
        }
    }

    fn on_end(&mut self, summary: &RunSummary) {
        if let Some(o) = self {
            o.on_end(summary);
        }
    }
}
