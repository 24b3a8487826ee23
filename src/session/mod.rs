//! Text-entry session - binds the state machine to its collaborators.
//!
//! A session owns a display surface, a haptic output and an input binding
//! for its whole lifetime, and reports its result exactly once through a
//! [`Completion`] cell.
//!
//! ## Collaborators
//!
//! - **DisplaySurface**: draws [`View`] snapshots, reports its size for hit-testing
//! - **Haptics**: fire-and-forget vibration pulses
//! - **InputBinding**: detaches the session from the touch source at teardown

mod completion;
mod controller;

#[cfg(test)]
mod tests;

pub use completion::Completion;
pub use controller::SessionController;

use embedded_graphics::prelude::Size;

use crate::config::{HAPTIC_DELETE_MS, HAPTIC_PAUSE_MS, HAPTIC_SIGNAL_MS};
use crate::ui::View;

/// Something the session can draw on.
pub trait DisplaySurface {
    /// Current drawable size, used to place the touch regions.
    fn size(&self) -> Size;

    fn render(&mut self, view: &View<'_>);

    /// Blank the surface before handing it back.
    fn clear(&mut self);
}

/// Vibration feedback.
pub trait Haptics {
    fn buzz(&mut self, pulse: Pulse);
}

/// The session's hold on the physical input source.
pub trait InputBinding {
    /// Stop delivering events to the session and restore default input
    /// handling.
    fn release(&mut self);
}

/// Haptic pulse kinds, one per input operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pulse {
    Signal,
    Delete,
    Pause,
}

impl Pulse {
    pub const fn duration_ms(self) -> u64 {
        match self {
            Pulse::Signal => HAPTIC_SIGNAL_MS,
            Pulse::Delete => HAPTIC_DELETE_MS,
            Pulse::Pause => HAPTIC_PAUSE_MS,
        }
    }
}

/// Haptics for boards without a vibration motor.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn buzz(&mut self, _pulse: Pulse) {}
}
