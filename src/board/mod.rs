//! Board peripherals - OLED, touch panel and vibration motor.
//!
//! Each module implements one session collaborator on top of the
//! nRF52840 HAL:
//!
//! - **display**: SSD1306 128×64 OLED via I²C ([`DisplaySurface`](morsekb::DisplaySurface))
//! - **touch**: CST816S touch controller via I²C + interrupt pin ([`InputBinding`](morsekb::InputBinding))
//! - **haptic**: vibration motor on a GPIO ([`Haptics`](morsekb::Haptics))

pub mod display;
pub mod haptic;
pub mod touch;
