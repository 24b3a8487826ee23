//! SSD1306 OLED display wrapper.

use defmt::warn;
use embedded_graphics::prelude::*;
use morsekb::error::Error;
use morsekb::session::DisplaySurface;
use morsekb::ui::{render, View};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

/// The OLED as a session display surface.
pub struct OledSurface<I2C> {
    display: Display<I2C>,
}

impl<I2C> OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { display: init(i2c) }
    }

    fn draw(&mut self, view: &View<'_>) -> Result<(), Error> {
        render::draw_view(&mut self.display, view).map_err(|_| Error::Display)?;
        self.display.flush().map_err(|_| Error::Display)
    }
}

impl<I2C> DisplaySurface for OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn size(&self) -> Size {
        self.display.bounding_box().size
    }

    fn render(&mut self, view: &View<'_>) {
        if let Err(e) = self.draw(view) {
            warn!("Display: render failed: {}", e);
        }
    }

    fn clear(&mut self) {
        self.display.clear_buffer();
        let _ = self.display.flush();
    }
}
