//! Input decoding - rotary encoder and touch sensor.
//!
//! Everything here is pure logic shared between the firmware and the host
//! test suite. The hardware-facing halves (GPIO edge tasks, the I²C poll)
//! live in `drivers/` and feed these types.

pub mod encoder;
pub mod touch;
