//! User interface core - selection state machine and layout contract.
//!
//! The UI has two modes: browsing the settings ring and editing the selected
//! entry. `selection` owns the menu and is the only mutator of UI state;
//! `layout` is the pure placement math the renderer and the touch hit-test
//! share.
//!
//! ## Components
//!
//! - **selection**: Browsing/Editing state machine driven by encoder and
//!   touch events from the 20 ms polling loop
//! - **layout**: ring placement (entry 0 at the top, clockwise) and the
//!   enlarged center widget shown while editing

pub mod layout;
pub mod selection;
