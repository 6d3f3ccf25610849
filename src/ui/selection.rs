//! The Browsing/Editing selection state machine.
//!
//! All operations run on the single cooperative polling loop, never
//! concurrently with each other, so the state needs no locking. Mutators
//! return a [`UiUpdate`] describing the effects the loop must apply:
//! a redraw, and possibly an edit event for the dispatcher.

use crate::menu::{Menu, Setting};

/// UI mode: selecting among settings vs. adjusting the selected one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Browsing,
    Editing,
}

/// Effects of one mutator call, consumed by the polling loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiUpdate {
    /// The layout changed; re-render the screen.
    pub redraw: bool,
    /// A value was edited; schedule a send for this menu index.
    pub edited: Option<usize>,
}

/// Read-only snapshot for rendering.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    pub mode: Mode,
    pub selected: usize,
    pub entries: &'a [Setting],
}

/// Owns the menu, the selected entry and the current mode.
///
/// Invariant: `selected` is always a valid menu index (the menu is non-empty
/// and selection starts at entry 0).
pub struct SelectionState {
    menu: Menu,
    mode: Mode,
    selected: usize,
}

impl SelectionState {
    /// Start browsing at entry 0.
    pub fn new(menu: Menu) -> Self {
        assert!(!menu.is_empty());
        Self {
            menu,
            mode: Mode::Browsing,
            selected: 0,
        }
    }

    /// Apply a net rotation delta.
    ///
    /// Browsing: advances the selection by `delta` modulo the menu length,
    /// wrapping in both directions. Editing: forwards `delta` to the
    /// selected setting's adjustment rule and emits an edit event when the
    /// value changed. A zero delta is a no-op.
    pub fn on_rotate(&mut self, delta: i32) -> UiUpdate {
        if delta == 0 {
            return UiUpdate::default();
        }
        match self.mode {
            Mode::Browsing => {
                let n = self.menu.len() as i64;
                self.selected = (self.selected as i64 + delta as i64).rem_euclid(n) as usize;
                UiUpdate {
                    redraw: true,
                    edited: None,
                }
            }
            Mode::Editing => {
                let changed = self.menu.get_mut(self.selected).adjust(delta);
                UiUpdate {
                    redraw: changed,
                    edited: changed.then_some(self.selected),
                }
            }
        }
    }

    /// Explicitly select an entry (tap on its ring icon) and enter editing.
    ///
    /// No-op when already editing that entry. Passing an out-of-range index
    /// is a caller bug and asserts.
    pub fn on_select(&mut self, index: usize) -> UiUpdate {
        assert!(index < self.menu.len(), "selection index out of range");
        if self.mode == Mode::Editing && self.selected == index {
            return UiUpdate::default();
        }
        self.selected = index;
        self.mode = Mode::Editing;
        UiUpdate {
            redraw: true,
            edited: None,
        }
    }

    /// Leave editing, keeping the selection on the last-viewed entry.
    /// No-op when already browsing.
    pub fn on_cancel(&mut self) -> UiUpdate {
        if self.mode == Mode::Browsing {
            return UiUpdate::default();
        }
        self.mode = Mode::Browsing;
        UiUpdate {
            redraw: true,
            edited: None,
        }
    }

    /// Snapshot for the renderer. Never mutates state.
    pub fn current_view(&self) -> View<'_> {
        View {
            mode: self.mode,
            selected: self.selected,
            entries: self.menu.entries(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }
}
