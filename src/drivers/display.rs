//! SH8601 round AMOLED panel (SPI).
//!
//! The panel speaks MIPI DCS: a fixed init table is replayed at power-up,
//! then pixel data goes out through CASET/RASET/RAMWR window writes. No
//! decision logic crosses this boundary.
//!
//! Rendering happens off-screen: widgets are drawn into a [`Frame`] with
//! `embedded-graphics`, then blitted into their window.

use crate::error::Error;
use brewdial::config::SCREEN_SIZE;
use embassy_nrf::gpio::Output;
use embassy_nrf::spim::{self, Spim};
use embassy_time::{Duration, Timer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

// DCS opcodes used by the init table and window writes.
const CMD_SLEEP_OUT: u8 = 0x11;
const CMD_DISPLAY_ON: u8 = 0x29;
const CMD_CASET: u8 = 0x2A;
const CMD_RASET: u8 = 0x2B;
const CMD_RAMWR: u8 = 0x2C;
const CMD_MADCTL: u8 = 0x36;
const CMD_COLMOD: u8 = 0x3A;
const CMD_BRIGHTNESS: u8 = 0x51;

/// Fixed init sequence replayed verbatim after reset: (command, params).
const INIT_TABLE: &[(u8, &[u8])] = &[
    (CMD_MADCTL, &[0x00]),
    (CMD_COLMOD, &[0x55]), // 16-bit RGB565
    (CMD_BRIGHTNESS, &[0xFF]),
];

pub struct Sh8601<'d, T: spim::Instance> {
    spi: Spim<'d, T>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
    backlight: Output<'d>,
}

impl<'d, T: spim::Instance> Sh8601<'d, T> {
    pub fn new(
        spi: Spim<'d, T>,
        cs: Output<'d>,
        dc: Output<'d>,
        rst: Output<'d>,
        backlight: Output<'d>,
    ) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            backlight,
        }
    }

    /// Hardware reset, then replay the init table and switch the panel on.
    pub async fn init(&mut self) -> Result<(), Error> {
        self.rst.set_low();
        Timer::after(Duration::from_millis(10)).await;
        self.rst.set_high();
        Timer::after(Duration::from_millis(120)).await;

        self.command(CMD_SLEEP_OUT, &[]).await?;
        Timer::after(Duration::from_millis(120)).await;

        for (cmd, params) in INIT_TABLE {
            self.command(*cmd, params).await?;
        }
        self.command(CMD_DISPLAY_ON, &[]).await?;

        self.clear(Rgb565::BLACK).await
    }

    /// Backlight on/off.
    pub fn set_backlight(&mut self, on: bool) {
        if on {
            self.backlight.set_high();
        } else {
            self.backlight.set_low();
        }
    }

    /// Blit RGB565 big-endian pixel data into the given window.
    pub async fn blit(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[u8],
    ) -> Result<(), Error> {
        self.set_window(x, y, width, height).await?;
        self.command(CMD_RAMWR, pixels).await
    }

    /// Fill the whole panel with one color, streaming a row at a time.
    pub async fn clear(&mut self, color: Rgb565) -> Result<(), Error> {
        let size = SCREEN_SIZE as u16;
        self.set_window(0, 0, size, size).await?;

        let raw = color.into_storage().to_be_bytes();
        let mut row = [0u8; SCREEN_SIZE as usize * 2];
        for chunk in row.chunks_exact_mut(2) {
            chunk.copy_from_slice(&raw);
        }

        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.write(&[CMD_RAMWR]).await;
        if result.is_ok() {
            self.dc.set_high();
            for _ in 0..size {
                result = self.spi.write(&row).await;
                if result.is_err() {
                    break;
                }
            }
        }
        self.cs.set_high();
        result.map_err(|_| Error::Display)
    }

    async fn set_window(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), Error> {
        let x1 = x + width - 1;
        let y1 = y + height - 1;
        self.command(
            CMD_CASET,
            &[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8],
        )
        .await?;
        self.command(
            CMD_RASET,
            &[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8],
        )
        .await
    }

    async fn command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Error> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self.spi.write(&[cmd]).await;
        if result.is_ok() && !params.is_empty() {
            self.dc.set_high();
            result = self.spi.write(params).await;
        }
        self.cs.set_high();
        result.map_err(|_| Error::Display)
    }
}

/// Largest widget edge the off-screen frame must hold (the center widget).
pub const FRAME_MAX: usize = 120;

/// Off-screen RGB565 frame, drawn with `embedded-graphics` and blitted
/// through [`Sh8601::blit`]. Stored big-endian, matching the panel.
pub struct Frame {
    buf: [u8; FRAME_MAX * FRAME_MAX * 2],
    width: u32,
    height: u32,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            buf: [0; FRAME_MAX * FRAME_MAX * 2],
            width: FRAME_MAX as u32,
            height: FRAME_MAX as u32,
        }
    }

    /// Resize the drawing area. Panics if the frame cannot hold it.
    pub fn set_size(&mut self, width: u32, height: u32) {
        assert!(width as usize <= FRAME_MAX && height as usize <= FRAME_MAX);
        self.width = width;
        self.height = height;
    }

    pub fn fill(&mut self, color: Rgb565) {
        let raw = color.into_storage().to_be_bytes();
        let len = self.len();
        for chunk in self.buf[..len].chunks_exact_mut(2) {
            chunk.copy_from_slice(&raw);
        }
    }

    /// Pixel bytes for the current size.
    pub fn data(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    fn len(&self) -> usize {
        self.width as usize * self.height as usize * 2
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Frame {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.width || y >= self.height {
                continue;
            }
            let i = (y as usize * self.width as usize + x as usize) * 2;
            self.buf[i..i + 2].copy_from_slice(&color.into_storage().to_be_bytes());
        }
        Ok(())
    }
}
