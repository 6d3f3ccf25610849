//! Host-testable core of brewdial.
//!
//! Everything with decision logic lives here: quadrature decoding, the
//! settings menu, the Browsing/Editing selection state machine, the layout
//! contract, touch-frame parsing, and the quiet-period send debouncer. All
//! of it is `no_std` and free of hardware dependencies, so the whole core
//! runs under `cargo test` on the host.
//!
//! The embedded binary (`main.rs`, behind the `embedded` feature) wires
//! these types to Embassy tasks: GPIO edge tasks feed [`input::encoder`],
//! the 20 ms loop drives [`ui::selection`] and [`dispatch`], and a sender
//! task ships [`api::Command`]s to the machine.

#![cfg_attr(not(test), no_std)]

pub mod api;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod menu;
pub mod power_logic;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
