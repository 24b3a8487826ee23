//! Application-wide constants and compile-time configuration.
//!
//! Buffer capacities, input timing, haptic pulse lengths and touch
//! panel parameters live here so they can be tuned in one place.

// Input state machine

/// Maximum number of dot/dash signals buffered for one character.
///
/// The longest code in the table is 5 signals; anything longer already
/// resolves to the unknown marker, so extra signals are dropped.
pub const SIGNAL_CAPACITY: usize = 16;

/// Maximum number of committed characters kept for one session.
pub const OUTPUT_CAPACITY: usize = 256;

/// Number of trailing output characters shown on screen.
pub const DISPLAY_TAIL_CHARS: usize = 20;

/// Pause count that commits the pending character.
pub const PAUSE_COMMIT_COUNT: u8 = 1;

/// Pause count that inserts a word space and restarts the cycle.
pub const PAUSE_WORD_COUNT: u8 = 3;

/// Character committed when the signal buffer matches no table entry.
pub const UNKNOWN_CHAR: char = '?';

// Haptics

/// Vibration pulse after a dot or dash (ms).
pub const HAPTIC_SIGNAL_MS: u64 = 30;

/// Vibration pulse after a delete (ms).
pub const HAPTIC_DELETE_MS: u64 = 50;

/// Vibration pulse after a pause / return tap (ms).
pub const HAPTIC_PAUSE_MS: u64 = 20;

// Touch panel (CST816S)

/// 7-bit I²C address of the CST816S touch controller.
pub const TOUCH_I2C_ADDR: u8 = 0x15;

/// First register of the gesture/point block.
pub const TOUCH_REG_GESTURE: u8 = 0x01;

/// Native panel resolution reported by the touch controller.
pub const TOUCH_PANEL_WIDTH: u16 = 240;
pub const TOUCH_PANEL_HEIGHT: u16 = 240;

/// Debounce after a touch interrupt before the frame is read (ms).
pub const TOUCH_DEBOUNCE_MS: u64 = 10;

// Firmware plumbing

/// Depth of the touch → session event channel.
pub const INPUT_CHANNEL_DEPTH: usize = 8;

/// Depth of the session → haptic motor channel.
pub const HAPTIC_CHANNEL_DEPTH: usize = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   OLED I²C SDA     → P0.26
//   OLED I²C SCL     → P0.27
//   Touch I²C SDA    → P0.30
//   Touch I²C SCL    → P0.31
//   Touch INT        → P0.28
//   Touch RST        → P0.29
//   Vibration motor  → P0.19
