//! `hop-showcase`: the live mode-switching actuation loop.
//!
//! # One tick
//!
//! ```text
//! now = clock.now()
//! if now − last_switch > switch_interval:
//!   ① Switch  : toggle mode, recolor robot material (if it resolves),
//!                reset engine state, baseline := current position,
//!                last_switch := now, sync viewer.  No actuation, no step.
//! else:
//!   ② Actuate : target = A · sin(2π f · sim_time); ctrl = [target, −target];
//!                one engine step.
//!   ③ Measure : distance = ‖pos − baseline‖; speed = distance / elapsed,
//!                or 0 while elapsed ≤ 0.1 s.
//!   ④ Present : camera follows the robot, sync viewer, notify observers.
//!   ⑤ Pace    : sleep the rest of one physics timestep.
//! ```
//!
//! The loop runs while the viewer reports it is running; there is no other
//! cancellation.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hop_core::{ShowcaseConfig, SystemClock};
//! use hop_engine::{HeadlessViewer, PlanarHopper};
//! use hop_showcase::{NoopObserver, ShowcaseBuilder};
//!
//! let mut showcase = ShowcaseBuilder::new(config, HeadlessViewer::unbounded(), SystemClock::new())
//!     .build(PlanarHopper::load)?;
//! showcase.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod showcase;

#[cfg(test)]
mod tests;

pub use builder::ShowcaseBuilder;
pub use error::{ShowcaseError, ShowcaseResult};
pub use observer::{NoopObserver, ShowcaseObserver};
pub use showcase::{RunSummary, Showcase, SwitchEvent, TickOutcome, TickReport};
