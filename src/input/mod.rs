//! Touch input classification.
//!
//! The physical input source delivers two event kinds: point taps and
//! two-axis swipes. Taps are routed to screen regions by [`layout`];
//! raw touch-controller frames are decoded by [`touch`].

pub mod layout;
pub mod touch;

pub use embedded_graphics::prelude::{Point, Size};
pub use layout::{menu_row, Region};
pub use touch::{TouchGesture, TouchReport};

/// An input event after the driver has decoded it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// A single touch at a display coordinate.
    Tap(Point),
    /// A directional swipe.
    Swipe(Swipe),
}

/// Swipe direction on two axes, each `-1`, `0` or `1`.
///
/// `lr` is positive for left-to-right, `ud` is positive for top-to-bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Swipe {
    pub lr: i8,
    pub ud: i8,
}

impl Swipe {
    pub const RIGHT: Swipe = Swipe { lr: 1, ud: 0 };
    pub const LEFT: Swipe = Swipe { lr: -1, ud: 0 };
    pub const DOWN: Swipe = Swipe { lr: 0, ud: 1 };
    pub const UP: Swipe = Swipe { lr: 0, ud: -1 };

    pub fn new(lr: i8, ud: i8) -> Self {
        Self {
            lr: lr.signum(),
            ud: ud.signum(),
        }
    }

    /// What the editor does with this swipe.
    pub fn action(self) -> Option<SwipeAction> {
        match (self.lr, self.ud) {
            (1, _) => Some(SwipeAction::Finish),
            (-1, _) => Some(SwipeAction::Cancel),
            (0, 1) => Some(SwipeAction::OpenSpecial),
            _ => None,
        }
    }
}

/// Editor-level meaning of a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwipeAction {
    /// Flush the pending character and return the text.
    Finish,
    /// End the session without a result.
    Cancel,
    /// Show the special-character screen.
    OpenSpecial,
}
