//! CST816S touch panel input.
//!
//! The controller pulls its INT line low on every recognised gesture. The
//! task waits for that edge, debounces, reads the gesture/point block over
//! I²C and forwards the decoded event to the session channel while a
//! session holds the binding.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::{debug, info, warn};
use embassy_nrf::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};
use embedded_graphics::prelude::Size;
use embedded_hal_async::i2c::I2c;
use morsekb::config::{INPUT_CHANNEL_DEPTH, TOUCH_DEBOUNCE_MS, TOUCH_I2C_ADDR, TOUCH_REG_GESTURE};
use morsekb::error::{Error, TouchError};
use morsekb::input::touch::{TouchReport, TOUCH_FRAME_SIZE};
use morsekb::input::InputEvent;
use morsekb::session::InputBinding;

/// Decoded touch events waiting for the session task.
pub static INPUT_EVENTS: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_DEPTH> =
    Channel::new();

/// Set while a session owns the touch panel.
static TOUCH_BOUND: AtomicBool = AtomicBool::new(false);

/// A session's hold on the touch panel.
pub struct TouchBinding(());

impl TouchBinding {
    pub fn bind() -> Self {
        INPUT_EVENTS.clear();
        TOUCH_BOUND.store(true, Ordering::Release);
        info!("Touch: bound to session");
        Self(())
    }
}

impl InputBinding for TouchBinding {
    fn release(&mut self) {
        TOUCH_BOUND.store(false, Ordering::Release);
        INPUT_EVENTS.clear();
        info!("Touch: released");
    }
}

/// Pulse the controller's reset line and wait for it to boot.
pub async fn reset(rst: &mut Output<'_>) {
    rst.set_low();
    Timer::after(Duration::from_millis(5)).await;
    rst.set_high();
    Timer::after(Duration::from_millis(50)).await;
}

/// Read one gesture/point block.
pub async fn read_report<I: I2c>(i2c: &mut I) -> Result<TouchReport, Error> {
    let mut buf = [0u8; TOUCH_FRAME_SIZE];
    i2c.write_read(TOUCH_I2C_ADDR, &[TOUCH_REG_GESTURE], &mut buf)
        .await
        .map_err(|_| TouchError::Bus)?;
    Ok(TouchReport::from_bytes(&buf)?)
}

/// Run the touch polling loop.
///
/// `screen` is the display size that tap coordinates are scaled to.
pub async fn run<I: I2c>(mut i2c: I, mut int: Input<'static>, screen: Size) -> ! {
    loop {
        int.wait_for_falling_edge().await;

        // Debounce: let the controller latch the gesture.
        Timer::after(Duration::from_millis(TOUCH_DEBOUNCE_MS)).await;

        if !TOUCH_BOUND.load(Ordering::Acquire) {
            continue;
        }

        match read_report(&mut i2c).await {
            Ok(report) => {
                debug!("Touch: {}", report);
                if let Some(event) = report.to_event(screen) {
                    if INPUT_EVENTS.try_send(event).is_err() {
                        warn!("Touch: event queue full, dropping {}", event);
                    }
                }
            }
            Err(e) => warn!("Touch: {}", e),
        }
    }
}
