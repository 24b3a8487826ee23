//! Vibration motor driven from a GPIO.

use defmt::debug;
use embassy_nrf::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};
use morsekb::config::HAPTIC_CHANNEL_DEPTH;
use morsekb::session::{Haptics, Pulse};

static PULSES: Channel<CriticalSectionRawMutex, Pulse, HAPTIC_CHANNEL_DEPTH> = Channel::new();

/// Queues pulses for [`run`]; never blocks the session.
pub struct MotorHaptics;

impl Haptics for MotorHaptics {
    fn buzz(&mut self, pulse: Pulse) {
        if PULSES.try_send(pulse).is_err() {
            debug!("Haptics: queue full, dropping {}", pulse);
        }
    }
}

/// Play queued pulses one after another.
pub async fn run(mut motor: Output<'static>) -> ! {
    loop {
        let pulse = PULSES.receive().await;
        motor.set_high();
        Timer::after(Duration::from_millis(pulse.duration_ms())).await;
        motor.set_low();
    }
}
