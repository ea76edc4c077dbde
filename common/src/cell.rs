//! Multi-unit grid cell model.
//!
//! A cell shows one reading with an icon and a label. When it is configured
//! with a list of units, each tap advances to the next unit and the raw value
//! is converted from the cell's base unit through the
//! [conversion table](crate::units::CONVERSIONS). With no units configured the
//! cell shows its default unit and ignores taps.
//!
//! Numeric values are always shown with one decimal place. Text values are
//! shown verbatim and never converted.

use crate::reading::{Reading, ValueText, format_fixed1, format_reading};
use crate::units::{KMH, UnitCycle, convert};

// =============================================================================
// Icons
// =============================================================================

/// Glyph drawn at the top of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// Water droplet (humidity).
    Droplet,
    /// Dial gauge (pressure).
    Gauge,
    /// Wind streaks (wind speed).
    Wind,
    /// Thermometer (heat index).
    Thermometer,
    /// Mountain peak (altitude).
    Mountain,
    /// Lightning bolt (sensor voltage).
    Bolt,
}

// =============================================================================
// Unit Label Style
// =============================================================================

/// How the unit label is attached to the value.
///
/// Presentation only: the host picks fonts from this, behaviour is identical.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnitStyle {
    /// Fixed-unit cell: unit follows the value directly (`55.0%`).
    Attached,
    /// Cyclable cell: unit follows after a space in a smaller font (`62.1 mph`).
    Spaced,
}

// =============================================================================
// Cell Configuration and View
// =============================================================================

/// Static description of a cell, fixed for the cell's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpec {
    /// Icon glyph.
    pub icon: Icon,
    /// Caption under the value.
    pub label: &'static str,
    /// Units to cycle through. Empty for a fixed-unit cell.
    pub units: &'static [&'static str],
    /// Unit shown when `units` is empty.
    pub default_unit: &'static str,
    /// Unit the raw value is expressed in.
    pub base_unit: &'static str,
}

impl CellSpec {
    /// A cell with the given units, assuming km/h as the base unit.
    pub const fn new(
        icon: Icon,
        value_label: &'static str,
        units: &'static [&'static str],
        default_unit: &'static str,
    ) -> Self {
        Self {
            icon,
            label: value_label,
            units,
            default_unit,
            base_unit: KMH,
        }
    }

    /// Override the base unit of the raw value.
    pub const fn with_base_unit(
        mut self,
        base_unit: &'static str,
    ) -> Self {
        self.base_unit = base_unit;
        self
    }
}

/// Everything the host needs to draw one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView {
    /// Icon glyph.
    pub icon: Icon,
    /// Converted, formatted value (or verbatim text, or `--`).
    pub value: ValueText,
    /// Active unit label.
    pub unit: &'static str,
    /// How the unit is attached to the value.
    pub unit_style: UnitStyle,
    /// Caption under the value.
    pub label: &'static str,
}

impl CellView {
    /// Value and unit as a single line (`62.1 mph`, `55.0%`).
    pub fn text(&self) -> ValueText {
        let mut s = self.value.clone();
        if self.unit_style == UnitStyle::Spaced {
            s.push(' ').ok();
        }
        s.push_str(self.unit).ok();
        s
    }
}

// =============================================================================
// Multi-Unit Cell
// =============================================================================

/// Grid cell with tap-to-cycle units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MultiUnitCell {
    spec: CellSpec,
    cycle: UnitCycle,
}

impl MultiUnitCell {
    /// Mount a cell. The first unit is selected.
    pub const fn new(spec: CellSpec) -> Self {
        Self {
            spec,
            cycle: UnitCycle::new(spec.units.len()),
        }
    }

    /// Cell configuration.
    #[inline]
    pub const fn spec(&self) -> &CellSpec { &self.spec }

    /// Current unit index.
    #[inline]
    pub const fn unit_index(&self) -> usize { self.cycle.index() }

    /// Whether taps change anything.
    #[inline]
    pub const fn is_interactive(&self) -> bool { self.cycle.is_interactive() }

    /// Unit currently shown.
    pub fn active_unit(&self) -> &'static str {
        self.spec
            .units
            .get(self.cycle.index())
            .copied()
            .unwrap_or(self.spec.default_unit)
    }

    /// Handle a tap. Returns the newly active unit, or `None` when the cell has
    /// no units to cycle through.
    pub fn tap(&mut self) -> Option<&'static str> {
        if self.cycle.advance() {
            Some(self.active_unit())
        } else {
            None
        }
    }

    /// Derive the view for a reading. Does not mutate state.
    pub fn view(
        &self,
        value: &Reading,
    ) -> CellView {
        let unit = self.active_unit();
        let shown = match value {
            Reading::Number(v) => Reading::Number(convert(*v, self.spec.base_unit, unit)),
            other => other.clone(),
        };

        CellView {
            icon: self.spec.icon,
            value: format_reading(&shown, format_fixed1),
            unit,
            unit_style: if self.cycle.is_empty() {
                UnitStyle::Attached
            } else {
                UnitStyle::Spaced
            },
            label: self.spec.label,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
