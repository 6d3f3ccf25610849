//! The settings menu model.
//!
//! A `Menu` is a fixed, ordered list of machine settings built once at
//! startup. Each `Setting` pairs a value with its kind; the edit path in
//! `ui::selection` mutates values exclusively through [`Setting::adjust`],
//! which enforces the per-kind adjustment rules.

use crate::api::Target;
use crate::config::{FLOAT_STEP, MAX_MENU_ENTRIES};
use core::fmt::Write;
use heapless::{String, Vec};
use num_traits::float::FloatCore;

/// Opaque presentation token for an entry's icon. The UI logic never
/// inspects it; the renderer maps it to a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    Power,
    Thermometer,
    Steam,
    Drops,
    Timer,
    Chart,
}

/// The kind of value a setting holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    /// Display-only entry; the edit path never mutates it.
    ReadOnlyInfo,
}

/// A setting's current value. The variant always matches the setting's kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    Bool(bool),
    Int(i32),
    Float(f32),
    Info(&'static str),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Boolean,
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Info(_) => ValueKind::ReadOnlyInfo,
        }
    }

    /// Render the value as display text ("ON", "93.0", "1", ...).
    pub fn text(&self) -> String<16> {
        let mut s = String::new();
        let _ = match self {
            Value::Bool(true) => s.push_str("ON"),
            Value::Bool(false) => s.push_str("OFF"),
            Value::Int(v) => write!(s, "{}", v).map_err(|_| ()),
            Value::Float(v) => write!(s, "{:.1}", v).map_err(|_| ()),
            Value::Info(t) => s.push_str(t),
        };
        s
    }
}

/// One controllable machine parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Setting {
    /// Identifier, unique within the menu.
    pub name: &'static str,
    /// Presentation token, irrelevant to logic.
    pub icon: Icon,
    /// Current value; variant matches the entry's kind.
    pub value: Value,
    /// Outbound command this setting maps to; `None` for read-only entries.
    pub target: Option<Target>,
}

impl Setting {
    /// Apply a rotation delta to the value, per the kind's adjustment rule.
    ///
    /// Returns `true` if the value changed (an edit event for the
    /// dispatcher). A zero delta and ReadOnlyInfo entries change nothing.
    ///
    /// Rules:
    /// - Boolean: any nonzero delta toggles once, direction-insensitive.
    /// - Integer: saturating `value += delta`, unranged.
    /// - Float: `value += delta * FLOAT_STEP`, then rounded to one decimal
    ///   place so repeated adjustments never accumulate visible drift.
    pub fn adjust(&mut self, delta: i32) -> bool {
        if delta == 0 {
            return false;
        }
        match &mut self.value {
            Value::Bool(b) => {
                *b = !*b;
                true
            }
            Value::Int(v) => {
                *v = v.saturating_add(delta);
                true
            }
            Value::Float(v) => {
                // Round to one decimal so float drift never becomes visible.
                *v = FloatCore::round((*v + delta as f32 * FLOAT_STEP) * 10.0) / 10.0;
                true
            }
            Value::Info(_) => false,
        }
    }
}

/// Ordered, fixed-length sequence of settings. Order defines both ring
/// position and navigation wrap order.
#[derive(Clone, Debug)]
pub struct Menu {
    entries: Vec<Setting, MAX_MENU_ENTRIES>,
}

impl Menu {
    /// Build a menu from a static entry list.
    ///
    /// Panics if the list is empty or exceeds [`MAX_MENU_ENTRIES`]; both are
    /// configuration errors caught at startup.
    pub fn from_entries(entries: &[Setting]) -> Self {
        assert!(!entries.is_empty(), "menu must have at least one entry");
        let mut v: Vec<Setting, MAX_MENU_ENTRIES> = Vec::new();
        for e in entries {
            v.push(*e).expect("menu capacity exceeded");
        }
        Self { entries: v }
    }

    /// The default La Marzocco control menu.
    pub fn machine_default() -> Self {
        Self::from_entries(&[
            Setting {
                name: "Power",
                icon: Icon::Power,
                value: Value::Bool(false),
                target: Some(Target::Power),
            },
            Setting {
                name: "Temp",
                icon: Icon::Thermometer,
                value: Value::Float(93.0),
                target: Some(Target::BoilerTemperature),
            },
            Setting {
                name: "Steam",
                icon: Icon::Steam,
                value: Value::Int(1),
                target: Some(Target::SteamLevel),
            },
            Setting {
                name: "Pre-Inf",
                icon: Icon::Drops,
                value: Value::Bool(true),
                target: Some(Target::Preinfusion),
            },
            Setting {
                name: "Timer",
                icon: Icon::Timer,
                value: Value::Info("0s"),
                target: None,
            },
            Setting {
                name: "Stats",
                icon: Icon::Chart,
                value: Value::Info("--"),
                target: None,
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> &Setting {
        &self.entries[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Setting {
        &mut self.entries[index]
    }

    /// All entries in ring order.
    pub fn entries(&self) -> &[Setting] {
        &self.entries
    }
}
