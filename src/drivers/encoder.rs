//! Rotary encoder edge tasks.
//!
//! The rotation task waits on edges of either phase line, samples both
//! levels and feeds the gray-code decoder; decoded steps land in the shared
//! [`EncoderInput`] accumulator the UI loop drains. The button task accepts
//! a falling edge only if the line is still low after a short settle wait,
//! then waits for release so one physical press latches exactly one edge.

use brewdial::config::ENCODER_BTN_SETTLE_MS;
use brewdial::input::encoder::{EncoderInput, QuadratureDecoder};
use defmt::debug;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};

/// Decode quadrature edges into the shared step accumulator.
#[embassy_executor::task]
pub async fn rotation_task(pin_a: AnyPin, pin_b: AnyPin, input: &'static EncoderInput) -> ! {
    let mut line_a = Input::new(pin_a, Pull::Up);
    let mut line_b = Input::new(pin_b, Pull::Up);
    let mut decoder = QuadratureDecoder::new(line_a.is_high(), line_b.is_high());

    loop {
        // Whichever line fires first wins; that delivery order is the
        // tie-break for simultaneous edges.
        match select(line_a.wait_for_any_edge(), line_b.wait_for_any_edge()).await {
            Either::First(()) | Either::Second(()) => {}
        }
        input.record_steps(decoder.on_levels(line_a.is_high(), line_b.is_high()));
    }
}

/// Debounce the encoder push-button (active-low with internal pull-up).
///
/// The settle wait runs in this task only and never blocks the rotation
/// task or the UI loop.
#[embassy_executor::task]
pub async fn button_task(pin: AnyPin, input: &'static EncoderInput) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        btn.wait_for_falling_edge().await;

        // Settle, then confirm the line is still asserted.
        Timer::after(Duration::from_millis(ENCODER_BTN_SETTLE_MS)).await;

        if btn.is_low() {
            debug!("Encoder: button press");
            input.record_press();

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(ENCODER_BTN_SETTLE_MS)).await;
        }
    }
}
