//! Screen rendering - draws the current view through the layout contract.
//!
//! Each visible entry is rendered into the shared off-screen [`Frame`] and
//! blitted into the window `ui::layout` assigns it. Browsing shows the ring
//! of icon discs with the selection border plus the selected entry's name in
//! the center; editing shows only the enlarged center widget with the live
//! value as text.

use crate::drivers::display::{Frame, Sh8601};
use crate::error::Error;
use brewdial::config::{CENTER_SIZE, SCREEN_SIZE};
use brewdial::menu::Icon;
use brewdial::ui::layout::entry_placement;
use brewdial::ui::selection::{Mode, View};
use embassy_nrf::spim;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyleBuilder};
use embedded_graphics::text::{Alignment, Text};

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const DISC_FILL: Rgb565 = Rgb565::new(6, 12, 6);
const EDIT_FILL: Rgb565 = Rgb565::new(0, 21, 31);
const BORDER: Rgb565 = Rgb565::WHITE;

/// Short glyph stand-ins for the icon tokens.
fn icon_label(icon: Icon) -> &'static str {
    match icon {
        Icon::Power => "PWR",
        Icon::Thermometer => "TMP",
        Icon::Steam => "STM",
        Icon::Drops => "PRE",
        Icon::Timer => "TMR",
        Icon::Chart => "STA",
    }
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, Rgb565> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(Rgb565::WHITE)
        .build()
}

/// Redraw the whole view.
pub async fn draw<T: spim::Instance>(
    display: &mut Sh8601<'_, T>,
    frame: &mut Frame,
    view: View<'_>,
) -> Result<(), Error> {
    display.clear(BACKGROUND).await?;

    let count = view.entries.len();
    for (index, entry) in view.entries.iter().enumerate() {
        let Some(p) = entry_placement(view.mode, view.selected, index, count) else {
            continue;
        };

        frame.set_size(p.size as u32, p.size as u32);
        frame.fill(BACKGROUND);

        let fill = match view.mode {
            Mode::Browsing => DISC_FILL,
            Mode::Editing => EDIT_FILL,
        };
        let mut disc = PrimitiveStyleBuilder::new().fill_color(fill);
        if p.highlighted {
            disc = disc.stroke_color(BORDER).stroke_width(3);
        }
        let _ = Circle::new(Point::zero(), p.size as u32)
            .into_styled(disc.build())
            .draw(frame);

        let value_text = entry.value.text();
        let label: &str = match view.mode {
            Mode::Browsing => icon_label(entry.icon),
            Mode::Editing => value_text.as_str(),
        };
        let center = Point::new(p.size / 2, p.size / 2 + 6);
        let _ = Text::with_alignment(label, center, text_style(), Alignment::Center).draw(frame);

        display
            .blit(p.x as u16, p.y as u16, p.size as u16, p.size as u16, frame.data())
            .await?;
    }

    // While browsing, the center echoes the selected entry's name.
    if view.mode == Mode::Browsing {
        frame.set_size(CENTER_SIZE as u32, CENTER_SIZE as u32);
        frame.fill(BACKGROUND);
        let name = view.entries[view.selected].name;
        let center = Point::new(CENTER_SIZE / 2, CENTER_SIZE / 2 + 6);
        let _ = Text::with_alignment(name, center, text_style(), Alignment::Center).draw(frame);
        let corner = (SCREEN_SIZE - CENTER_SIZE) / 2;
        display
            .blit(
                corner as u16,
                corner as u16,
                CENTER_SIZE as u16,
                CENTER_SIZE as u16,
                frame.data(),
            )
            .await?;
    }

    Ok(())
}
