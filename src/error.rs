//! Unified error type for morsekb.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The input state machine itself never fails; these errors only come
//! from the completion cell and the hardware collaborators.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Session
    /// The session completion was already resolved once.
    AlreadyResolved,

    // Touch panel
    /// The touch controller could not be read or sent a bad frame.
    Touch(TouchError),

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}

/// Subset of touch controller errors we propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// I²C transaction to the controller failed.
    Bus,
    /// Fewer bytes than a full gesture/point block.
    ShortFrame,
}

// Convenience conversions

impl From<TouchError> for Error {
    fn from(e: TouchError) -> Self {
        Error::Touch(e)
    }
}
