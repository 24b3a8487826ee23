//! Monochrome rendering of editor views.
//!
//! Generic over any `embedded-graphics` draw target so the same code drives
//! the SSD1306 on the board and an in-memory target in tests.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use super::{Screen, View, SPECIAL_MENU};

/// Longest line we compose: label prefix plus the 20-char text window.
type Line = heapless::String<40>;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Clear the target and draw `view`.
pub fn draw_view<D>(target: &mut D, view: &View<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    match view.screen {
        Screen::Editor => draw_editor(target, view),
        Screen::SpecialMenu => draw_special_menu(target),
    }
}

/// Render the Editor screen: button labels in the four corners, the text
/// window and the pending signals across the middle.
pub fn draw_editor<D>(target: &mut D, view: &View<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = target.bounding_box().size;
    let w = size.width as i32;
    let h = size.height as i32;
    let style = text_style();

    Text::new(".", Point::new(2, 10), style).draw(target)?;
    Text::new("-", Point::new(w - 8, 10), style).draw(target)?;
    Text::new("ret", Point::new(2, h - 2), style).draw(target)?;
    Text::new("del", Point::new(w - 20, h - 2), style).draw(target)?;

    let mut line = Line::new();
    let _ = write!(line, "Text:{}", view.text);
    Text::new(line.as_str(), Point::new(4, h / 2 - 2), style).draw(target)?;

    line.clear();
    let _ = write!(line, "Morse: {}", view.signals);
    Text::new(line.as_str(), Point::new(4, h / 2 + 10), style).draw(target)?;

    Ok(())
}

/// Render the special-character menu, one row per entry.
pub fn draw_special_menu<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = target.bounding_box().size;
    let rows = SPECIAL_MENU.len() as i32;
    let row_h = size.height as i32 / rows;
    let style = text_style();

    for (row, item) in SPECIAL_MENU.iter().enumerate() {
        // Baseline roughly centred in the row for a 10 px font.
        let y = row as i32 * row_h + row_h / 2 + 4;
        Text::new(item.label(), Point::new(4, y), style).draw(target)?;
    }

    let title_x = size.width as i32 - 7 * 6 - 2;
    Text::new("Special", Point::new(title_x, row_h / 2 + 4), style).draw(target)?;

    Ok(())
}
