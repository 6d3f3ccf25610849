//! Screen placement contract.
//!
//! Browsing: all entries sit at equal angular spacing on a fixed ring,
//! entry 0 at the top, increasing index clockwise; the selected entry gets a
//! highlighted border. Editing: only the selected entry is shown, enlarged
//! at the center, with its live value as text.
//!
//! The same geometry drives rendering and the touch hit-test, so a tap on
//! the pixels an icon occupies always resolves to that icon's index.

use crate::config::{CENTER_SIZE, ICON_SIZE, RING_RADIUS, SCREEN_SIZE};
use crate::ui::selection::Mode;
use num_traits::Float;

/// One entry's on-screen box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Top-left corner.
    pub x: i32,
    pub y: i32,
    /// Box edge length (icons are round; this is the bounding square).
    pub size: i32,
    /// Draw the selection border.
    pub highlighted: bool,
}

/// Center point of entry `index`'s icon on the browsing ring.
pub fn ring_center(index: usize, count: usize) -> (i32, i32) {
    debug_assert!(count > 0 && index < count);
    let step = 360.0 / count as f32;
    // Entry 0 at 12 o'clock; screen Y grows downward, so increasing angle
    // walks the ring clockwise.
    let rad = (index as f32 * step - 90.0).to_radians();
    let x = SCREEN_SIZE / 2 + Float::round(RING_RADIUS as f32 * Float::cos(rad)) as i32;
    let y = SCREEN_SIZE / 2 + Float::round(RING_RADIUS as f32 * Float::sin(rad)) as i32;
    (x, y)
}

/// Where entry `index` of `count` sits on screen, or `None` when hidden
/// (every non-selected entry while editing).
pub fn entry_placement(mode: Mode, selected: usize, index: usize, count: usize) -> Option<Placement> {
    match mode {
        Mode::Browsing => {
            let (cx, cy) = ring_center(index, count);
            Some(Placement {
                x: cx - ICON_SIZE / 2,
                y: cy - ICON_SIZE / 2,
                size: ICON_SIZE,
                highlighted: index == selected,
            })
        }
        Mode::Editing => {
            if index != selected {
                return None;
            }
            Some(Placement {
                x: SCREEN_SIZE / 2 - CENTER_SIZE / 2,
                y: SCREEN_SIZE / 2 - CENTER_SIZE / 2,
                size: CENTER_SIZE,
                highlighted: true,
            })
        }
    }
}

/// Map a touch point to the browsing-ring icon it lands on.
///
/// One shared handler receives the hit entry's index; there is no per-entry
/// callback state. Returns `None` between icons (including the center).
pub fn hit_test(x: u16, y: u16, count: usize) -> Option<usize> {
    let r = ICON_SIZE / 2;
    for index in 0..count {
        let (cx, cy) = ring_center(index, count);
        let dx = i32::from(x) - cx;
        let dy = i32::from(y) - cy;
        if dx * dx + dy * dy <= r * r {
            return Some(index);
        }
    }
    None
}
