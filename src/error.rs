//! Unified error type for the brewdial firmware.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use defmt::Format;

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    /// SPI transaction to the panel failed.
    Display,

    /// I²C transaction to the touch controller failed.
    Touch,
}
