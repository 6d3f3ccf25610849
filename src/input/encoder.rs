//! Rotary encoder decoding.
//!
//! Two out-of-phase lines (A, B) form a 2-bit gray code; the relative order
//! of their transitions gives the rotation direction. [`QuadratureDecoder`]
//! turns sampled line levels into signed steps, and [`EncoderInput`] is the
//! interrupt-shared accumulator the polling loop drains.

use core::sync::atomic::{AtomicBool, AtomicI32, Ordering};

/// Step per observed state transition, indexed by `(prev << 2) | current`
/// where a state is `(a << 1) | b`. Valid single-line transitions yield ±1
/// (+1 clockwise); a repeated state (contact bounce) or an illegal two-line
/// jump yields 0.
const TRANSITIONS: [i8; 16] = [
    0, -1, 1, 0, // prev = 00
    1, 0, 0, -1, // prev = 01
    -1, 0, 0, 1, // prev = 10
    0, 1, -1, 0, // prev = 11
];

const fn phase_state(a: bool, b: bool) -> u8 {
    ((a as u8) << 1) | (b as u8)
}

/// Stateful gray-code decoder. Owned exclusively by the edge-handling
/// context; every edge of either line samples both levels and feeds them in.
pub struct QuadratureDecoder {
    prev: u8,
}

impl QuadratureDecoder {
    /// Start decoding from the given initial line levels.
    pub const fn new(a: bool, b: bool) -> Self {
        Self {
            prev: phase_state(a, b),
        }
    }

    /// Consume one sample of both line levels, returning -1, 0 or +1 steps.
    ///
    /// Simultaneous-edge ordering is whichever sample arrives first; there
    /// is no extra debouncing of the rotary lines themselves.
    pub fn on_levels(&mut self, a: bool, b: bool) -> i32 {
        let current = phase_state(a, b);
        let step = TRANSITIONS[((self.prev << 2) | current) as usize];
        self.prev = current;
        step as i32
    }
}

/// Rotation steps and button edge shared between the interrupt-style edge
/// context (writer) and the polling loop (single consumer).
///
/// Both cells are drained with a single atomic swap, so an edge landing
/// between read and reset can never be lost.
pub struct EncoderInput {
    steps: AtomicI32,
    pressed: AtomicBool,
}

impl EncoderInput {
    pub const fn new() -> Self {
        Self {
            steps: AtomicI32::new(0),
            pressed: AtomicBool::new(false),
        }
    }

    /// Accumulate decoded steps. Edge-context side.
    pub fn record_steps(&self, delta: i32) {
        if delta != 0 {
            self.steps.fetch_add(delta, Ordering::AcqRel);
        }
    }

    /// Latch a confirmed button press. Edge-context side.
    pub fn record_press(&self) {
        self.pressed.store(true, Ordering::Release);
    }

    /// Net signed steps accumulated since the previous call, resetting the
    /// accumulator. Calling again with no intervening edge returns 0.
    pub fn read_delta(&self) -> i32 {
        self.steps.swap(0, Ordering::AcqRel)
    }

    /// True at most once per physical press; clears the flag on read.
    pub fn take_button_edge(&self) -> bool {
        self.pressed.swap(false, Ordering::AcqRel)
    }
}
