//! morsekb firmware - touch Morse keyboard on nRF52840.
//!
//! Wires the host-tested session controller to the board:
//!   - SSD1306 OLED on TWIM0 (display surface)
//!   - CST816S touch panel on TWIM1 + INT/RST pins (input source)
//!   - vibration motor on a GPIO (haptics)
//!
//! One session runs at boot; its result is logged over RTT.

#![no_std]
#![no_main]

mod board;

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::peripherals::{TWISPI0, TWISPI1};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};
use embedded_graphics::prelude::Size;
use morsekb::session::{Completion, DisplaySurface, SessionController};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    TWISPI1 => twim::InterruptHandler<peripherals::TWISPI1>;
});

/// Result of the boot session.
static COMPLETION: Completion<CriticalSectionRawMutex> = Completion::new();

type Oled = board::display::OledSurface<Twim<'static, TWISPI0>>;

#[embassy_executor::task]
async fn touch_task(i2c: Twim<'static, TWISPI1>, int: Input<'static>, screen: Size) -> ! {
    board::touch::run(i2c, int, screen).await
}

#[embassy_executor::task]
async fn haptic_task(motor: Output<'static>) -> ! {
    board::haptic::run(motor).await
}

#[embassy_executor::task]
async fn session_task(surface: Oled) {
    let binding = board::touch::TouchBinding::bind();
    let mut session =
        SessionController::start(surface, board::haptic::MotorHaptics, binding, &COMPLETION);

    while session.is_active() {
        let event = board::touch::INPUT_EVENTS.receive().await;
        session.handle(event);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("morsekb starting");

    let mut oled_config = twim::Config::default();
    oled_config.frequency = twim::Frequency::K400;
    let oled_i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, oled_config);
    let surface: Oled = board::display::OledSurface::new(oled_i2c);
    let screen = surface.size();

    // Keep RST driven high for as long as the firmware runs.
    let mut touch_rst = Output::new(p.P0_29, Level::High, OutputDrive::Standard);
    board::touch::reset(&mut touch_rst).await;
    let touch_i2c = Twim::new(p.TWISPI1, Irqs, p.P0_30, p.P0_31, twim::Config::default());
    let touch_int = Input::new(p.P0_28, Pull::Up);

    let motor = Output::new(p.P0_19, Level::Low, OutputDrive::Standard);

    spawner.must_spawn(touch_task(touch_i2c, touch_int, screen));
    spawner.must_spawn(haptic_task(motor));
    spawner.must_spawn(session_task(surface));

    match COMPLETION.wait().await {
        Some(text) => info!("Entered: {}", text.as_str()),
        None => info!("Entry cancelled"),
    }

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
