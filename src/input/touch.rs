//! CST816S capacitive touch controller frames.
//!
//! The controller raises its interrupt line on every gesture; the driver
//! then reads 6 bytes starting at register `0x01`:
//! ```text
//! Byte 0: Gesture id
//! Byte 1: Finger count
//! Byte 2: Bits 7-6 = event flag, bits 3-0 = X high nibble
//! Byte 3: X low byte
//! Byte 4: Bits 3-0 = Y high nibble
//! Byte 5: Y low byte
//! ```
//! Coordinates are in panel pixels and get scaled to the display size
//! before hit-testing.

use embedded_graphics::prelude::{Point, Size};

use super::{InputEvent, Swipe};
use crate::config::{TOUCH_PANEL_HEIGHT, TOUCH_PANEL_WIDTH};
use crate::error::TouchError;

/// Gesture/point block size in bytes.
pub const TOUCH_FRAME_SIZE: usize = 6;

/// Gesture codes reported by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchGesture {
    None,
    SlideDown,
    SlideUp,
    SlideLeft,
    SlideRight,
    SingleClick,
    DoubleClick,
    LongPress,
    Unknown(u8),
}

impl From<u8> for TouchGesture {
    fn from(id: u8) -> Self {
        match id {
            0x00 => TouchGesture::None,
            0x01 => TouchGesture::SlideDown,
            0x02 => TouchGesture::SlideUp,
            0x03 => TouchGesture::SlideLeft,
            0x04 => TouchGesture::SlideRight,
            0x05 => TouchGesture::SingleClick,
            0x0B => TouchGesture::DoubleClick,
            0x0C => TouchGesture::LongPress,
            other => TouchGesture::Unknown(other),
        }
    }
}

/// One decoded gesture/point block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchReport {
    pub gesture: TouchGesture,
    pub fingers: u8,
    /// Panel X coordinate (12 bits).
    pub x: u16,
    /// Panel Y coordinate (12 bits).
    pub y: u16,
}

impl TouchReport {
    /// Parse the 6-byte register block read from `TOUCH_REG_GESTURE`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TouchError> {
        if data.len() < TOUCH_FRAME_SIZE {
            return Err(TouchError::ShortFrame);
        }
        Ok(Self {
            gesture: TouchGesture::from(data[0]),
            fingers: data[1],
            x: (u16::from(data[2] & 0x0F) << 8) | u16::from(data[3]),
            y: (u16::from(data[4] & 0x0F) << 8) | u16::from(data[5]),
        })
    }

    /// Touch position scaled from panel pixels to a display of `screen` size.
    pub fn point(&self, screen: Size) -> Point {
        Point::new(
            scale(self.x, TOUCH_PANEL_WIDTH, screen.width),
            scale(self.y, TOUCH_PANEL_HEIGHT, screen.height),
        )
    }

    /// Convert to an editor input event. Gestures the editor has no use
    /// for (double click, long press, ...) yield `None`.
    pub fn to_event(&self, screen: Size) -> Option<InputEvent> {
        match self.gesture {
            TouchGesture::SingleClick => Some(InputEvent::Tap(self.point(screen))),
            TouchGesture::SlideRight => Some(InputEvent::Swipe(Swipe::RIGHT)),
            TouchGesture::SlideLeft => Some(InputEvent::Swipe(Swipe::LEFT)),
            TouchGesture::SlideDown => Some(InputEvent::Swipe(Swipe::DOWN)),
            TouchGesture::SlideUp => Some(InputEvent::Swipe(Swipe::UP)),
            _ => None,
        }
    }
}

fn scale(v: u16, panel: u16, display: u32) -> i32 {
    if panel == 0 {
        return 0;
    }
    let v = u32::from(v.min(panel));
    (v * display / u32::from(panel)) as i32
}
