//! CST816S capacitive touch controller (I²C).
//!
//! The controller is polled once per UI tick; register parsing lives in
//! `input::touch` so it can be host-tested. Transient bus faults surface as
//! "no event this poll" - the UI never sees a hard fault from this path.

use crate::error::Error;
use brewdial::input::touch::{parse_frame, TouchPoint, CST816S_ADDR, TOUCH_FRAME_LEN};
use embassy_nrf::gpio::Output;
use embassy_nrf::twim::{self, Twim};
use embassy_time::{Duration, Timer};

pub struct Cst816s<'d, T: twim::Instance> {
    i2c: Twim<'d, T>,
}

impl<'d, T: twim::Instance> Cst816s<'d, T> {
    pub fn new(i2c: Twim<'d, T>) -> Self {
        Self { i2c }
    }

    /// Pulse the reset line. The controller needs ~50 ms afterwards before
    /// its registers read back sanely.
    pub async fn reset(rst: &mut Output<'_>) {
        rst.set_low();
        Timer::after(Duration::from_millis(5)).await;
        rst.set_high();
        Timer::after(Duration::from_millis(50)).await;
    }

    /// Non-blocking poll: the active touch point, or `None` when no finger
    /// is down or the bus read failed this round.
    pub async fn poll(&mut self) -> Option<TouchPoint> {
        match self.read_frame().await {
            Ok(frame) => parse_frame(&frame),
            Err(_) => None,
        }
    }

    async fn read_frame(&mut self) -> Result<[u8; TOUCH_FRAME_LEN], Error> {
        let mut frame = [0u8; TOUCH_FRAME_LEN];
        self.i2c
            .write_read(CST816S_ADDR, &[0x00], &mut frame)
            .await
            .map_err(|_| Error::Touch)?;
        Ok(frame)
    }
}
