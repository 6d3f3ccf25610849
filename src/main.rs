//! brewdial firmware entry point.
//!
//! Task layout:
//!   - two encoder edge tasks (interrupt-style context) feeding the shared
//!     [`EncoderInput`] accumulator
//!   - the 20 ms cooperative UI loop (this task): drain encoder, poll touch,
//!     drive the selection state machine and the send debouncer, render
//!   - the command sender task behind a channel, so a hung remote endpoint
//!     never stalls input handling
//!
//! All decision logic lives in the `brewdial` library and is host-tested;
//! this file only wires hardware to it.

#![no_std]
#![no_main]

mod drivers;
mod error;
mod net;
mod screen;

use brewdial::api::{command_for, Command};
use brewdial::config::{
    BACKLIGHT_AUTO_OFF_ENABLED, BACKLIGHT_AUTO_OFF_TIMEOUT_MS, LOOP_TICK_MS, SEND_QUIET_PERIOD_MS,
};
use brewdial::dispatch::SendDebouncer;
use brewdial::input::encoder::EncoderInput;
use brewdial::input::touch::Gesture;
use brewdial::menu::Menu;
use brewdial::power_logic;
use brewdial::ui::layout::hit_test;
use brewdial::ui::selection::{Mode, SelectionState, UiUpdate};
use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive, Pin};
use embassy_nrf::spim::{self, Spim};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Timer};
use static_cell::StaticCell;

use crate::drivers::display::{Frame, Sh8601};
use crate::drivers::touch::Cst816s;
use crate::net::COMMAND_QUEUE_DEPTH;

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Shared between the encoder edge tasks (writers) and the UI loop (reader).
static ENCODER: EncoderInput = EncoderInput::new();

/// Fired commands on their way to the sender task.
static COMMANDS: Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH> = Channel::new();

static FRAME: StaticCell<Frame> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("brewdial starting");

    // Panel (SH8601 over SPI).
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M32;
    let spi = Spim::new_txonly(p.SPI3, Irqs, p.P0_03, p.P0_04, spi_config);
    let cs = Output::new(p.P0_28.degrade(), Level::High, OutputDrive::Standard);
    let dc = Output::new(p.P0_29.degrade(), Level::Low, OutputDrive::Standard);
    let rst = Output::new(p.P0_30.degrade(), Level::High, OutputDrive::Standard);
    let bl = Output::new(p.P0_31.degrade(), Level::Low, OutputDrive::Standard);
    let mut display = Sh8601::new(spi, cs, dc, rst, bl);
    if let Err(e) = display.init().await {
        warn!("display init failed: {:?}", e);
    }
    display.set_backlight(true);

    // Touch (CST816S over I²C).
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut touch_rst = Output::new(p.P0_25.degrade(), Level::High, OutputDrive::Standard);
    Cst816s::<peripherals::TWISPI0>::reset(&mut touch_rst).await;
    let mut touch = Cst816s::new(i2c);

    // Encoder edge tasks.
    unwrap!(spawner.spawn(drivers::encoder::rotation_task(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        &ENCODER
    )));
    unwrap!(spawner.spawn(drivers::encoder::button_task(p.P0_24.degrade(), &ENCODER)));

    // Outbound link.
    unwrap!(spawner.spawn(net::sender_task(COMMANDS.receiver(), net::BenchLink)));

    let frame = FRAME.init(Frame::new());
    let mut ui = SelectionState::new(Menu::machine_default());
    let mut debouncer = SendDebouncer::new(SEND_QUIET_PERIOD_MS);
    let mut last_activity = Instant::now();
    let mut backlight_on = true;
    let mut needs_redraw = true;

    loop {
        let now = Instant::now();

        // Rotation.
        let delta = ENCODER.read_delta();
        if delta != 0 {
            let update = ui.on_rotate(delta);
            needs_redraw |= update.redraw;
            if let Some(index) = update.edited {
                debouncer.note_edit(index, now.as_millis());
            }
            last_activity = now;
        }

        // Button: select the focused entry while browsing, leave editing
        // otherwise.
        if ENCODER.take_button_edge() {
            let update = match ui.mode() {
                Mode::Browsing => ui.on_select(ui.selected_index()),
                Mode::Editing => ui.on_cancel(),
            };
            needs_redraw |= update.redraw;
            last_activity = now;
        }

        // Touch: completed taps only, so a finger resting on the glass
        // doesn't fire once per poll.
        if let Some(point) = touch.poll().await {
            last_activity = now;
            if point.gesture == Gesture::Tap {
                let update = match ui.mode() {
                    Mode::Browsing => match hit_test(point.x, point.y, ui.menu().len()) {
                        Some(index) => ui.on_select(index),
                        None => UiUpdate::default(),
                    },
                    Mode::Editing => ui.on_cancel(),
                };
                needs_redraw |= update.redraw;
            }
        }

        // Quiet period elapsed: ship the setting's value as it is now.
        if let Some(index) = debouncer.poll(now.as_millis()) {
            if let Some(command) = command_for(ui.menu(), index) {
                if COMMANDS.try_send(command).is_err() {
                    warn!("command queue full, dropping send");
                }
            }
        }

        // Backlight idle policy.
        let idle_ms = (now - last_activity).as_millis();
        let lit = power_logic::backlight_should_be_on(
            true,
            BACKLIGHT_AUTO_OFF_ENABLED,
            idle_ms,
            BACKLIGHT_AUTO_OFF_TIMEOUT_MS,
        );
        if lit != backlight_on {
            backlight_on = lit;
            display.set_backlight(lit);
            needs_redraw |= lit;
        }

        if needs_redraw && backlight_on {
            if let Err(e) = screen::draw(&mut display, frame, ui.current_view()).await {
                warn!("render failed: {:?}", e);
            }
            needs_redraw = false;
        }

        Timer::after(Duration::from_millis(LOOP_TICK_MS)).await;
    }
}
