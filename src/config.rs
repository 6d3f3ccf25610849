//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and UI geometry
//! live here so they can be tuned in one place.

// Timing

/// Cooperative UI loop tick (ms). Input is drained and rendered once per tick.
pub const LOOP_TICK_MS: u64 = 20;

/// Quiet period after the last value edit before the outbound command fires (ms).
///
/// Spinning the encoder emits edits many times per second; one command goes
/// out once the knob has been still for this long.
pub const SEND_QUIET_PERIOD_MS: u64 = 2000;

/// Settle interval for the encoder push-button (ms). A falling edge is only
/// accepted if the line is still low after this wait.
pub const ENCODER_BTN_SETTLE_MS: u64 = 20;

// Value adjustment

/// Step size applied per rotation unit to Float settings.
pub const FLOAT_STEP: f32 = 0.1;

/// Capacity of the settings menu. The machine menu uses 6 entries.
pub const MAX_MENU_ENTRIES: usize = 8;

// Pre-infusion

/// Pre-infusion wetting time sent alongside the enable flag (seconds).
pub const PREINFUSION_ON_THRESHOLD_S: f32 = 2.0;

/// Pre-infusion pause time sent alongside the enable flag (seconds).
pub const PREINFUSION_OFF_THRESHOLD_S: f32 = 4.0;

// Panel geometry (SH8601 1.8" round AMOLED)

/// Square panel edge length in pixels.
pub const SCREEN_SIZE: i32 = 360;

/// Radius of the settings ring, measured to each icon's center.
pub const RING_RADIUS: i32 = 140;

/// Icon diameter on the browsing ring.
pub const ICON_SIZE: i32 = 60;

/// Diameter of the enlarged center widget in editing mode.
pub const CENTER_SIZE: i32 = 120;

// Backlight

/// Enable automatic backlight power-off after inactivity.
pub const BACKLIGHT_AUTO_OFF_ENABLED: bool = true;

/// Inactivity timeout before the backlight is turned off (ms).
pub const BACKLIGHT_AUTO_OFF_TIMEOUT_MS: u64 = 120_000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A       → P0.11
//   Encoder B       → P0.12
//   Encoder button  → P0.24
//   Touch I²C SDA   → P0.26
//   Touch I²C SCL   → P0.27
//   Touch reset     → P0.25
//   Panel SPI SCK   → P0.03
//   Panel SPI MOSI  → P0.04
//   Panel CS        → P0.28
//   Panel D/C       → P0.29
//   Panel reset     → P0.30
//   Panel backlight → P0.31
