//! Unit identifiers, the conversion table, and the unit-cycle state machine.
//!
//! # Conversion Table
//!
//! Conversions are declared as data: each [`Conversion`] names a base unit, a
//! target unit, and a pure function applied to the raw value. [`convert`] looks
//! up the `(base, target)` pair and falls back to the identity when the pair is
//! not declared, so a value shown in its own base unit (or in an unknown unit)
//! passes through unchanged.
//!
//! Adding a unit means adding a row to [`CONVERSIONS`]; display code never
//! needs to change.
//!
//! # Unit Cycling
//!
//! [`UnitCycle`] is the `{ index, len }` counter behind every tap-to-change-unit
//! widget. The only transition is `advance`, which moves to
//! `(index + 1) mod len`. An empty cycle (`len == 0`) never moves.

// =============================================================================
// Unit Identifiers
// =============================================================================

/// Kilometres per hour. Base unit of wind speed readings.
pub const KMH: &str = "km/h";

/// Miles per hour.
pub const MPH: &str = "mph";

/// Metres per second.
pub const MS: &str = "m/s";

/// Degrees Celsius. Base unit of temperature readings.
pub const CELSIUS: &str = "°C";

/// Degrees Fahrenheit.
pub const FAHRENHEIT: &str = "°F";

/// Hectopascal. Base unit of pressure readings.
pub const HPA: &str = "hPa";

/// Inches of mercury.
pub const INHG: &str = "inHg";

/// Metres. Base unit of altitude readings.
pub const METERS: &str = "m";

/// Feet.
pub const FEET: &str = "ft";

/// Relative humidity percentage.
pub const PERCENT: &str = "%";

/// Volts (rain sensor output).
pub const VOLTS: &str = "V";

// =============================================================================
// Conversion Factors
// =============================================================================

/// Miles per hour in one km/h.
pub const KMH_TO_MPH: f64 = 0.621_371;

/// km/h in one m/s. Divide a km/h value by this to get m/s.
pub const KMH_PER_MS: f64 = 3.6;

/// Inches of mercury in one hectopascal.
pub const HPA_TO_INHG: f64 = 0.029_53;

/// Feet in one metre.
pub const M_TO_FT: f64 = 3.280_84;

const _: () = assert!(KMH_TO_MPH > 0.6 && KMH_TO_MPH < 0.65);
const _: () = assert!(KMH_PER_MS > 3.5 && KMH_PER_MS < 3.7);

/// Convert Celsius to Fahrenheit (`c * 9/5 + 32`).
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 { celsius * 9.0 / 5.0 + 32.0 }

// =============================================================================
// Conversion Table
// =============================================================================

/// One row of the conversion table.
#[derive(Clone, Copy, Debug)]
pub struct Conversion {
    /// Unit the raw value is expressed in.
    pub from: &'static str,
    /// Unit the value is shown in.
    pub to: &'static str,
    /// Pure mapping from a `from` value to a `to` value.
    pub apply: fn(f64) -> f64,
}

/// All declared conversions. Pairs not listed here convert as the identity.
pub const CONVERSIONS: &[Conversion] = &[
    Conversion {
        from: KMH,
        to: MPH,
        apply: |v| v * KMH_TO_MPH,
    },
    Conversion {
        from: KMH,
        to: MS,
        apply: |v| v / KMH_PER_MS,
    },
    Conversion {
        from: CELSIUS,
        to: FAHRENHEIT,
        apply: celsius_to_fahrenheit,
    },
    Conversion {
        from: HPA,
        to: INHG,
        apply: |v| v * HPA_TO_INHG,
    },
    Conversion {
        from: METERS,
        to: FEET,
        apply: |v| v * M_TO_FT,
    },
];

/// Find the declared conversion for a `(base, target)` pair.
pub fn find_conversion(
    base: &str,
    target: &str,
) -> Option<&'static Conversion> {
    CONVERSIONS.iter().find(|c| c.from == base && c.to == target)
}

/// Convert `value` from `base` to `target`.
///
/// Returns `value` unchanged when `base == target` or when no conversion is
/// declared for the pair.
pub fn convert(
    value: f64,
    base: &str,
    target: &str,
) -> f64 {
    find_conversion(base, target).map_or(value, |c| (c.apply)(value))
}

// =============================================================================
// Unit Cycle State Machine
// =============================================================================

/// Pure transition of the unit cycle.
///
/// Returns `(index + 1) mod len`, or `index` unchanged when `len == 0`.
#[inline]
pub const fn next_index(
    index: usize,
    len: usize,
) -> usize {
    if len == 0 { index } else { (index + 1) % len }
}

/// Position within an ordered list of cyclable units.
///
/// Created at index 0 when a widget mounts and advanced only by taps. New
/// readings never touch it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitCycle {
    index: usize,
    len: usize,
}

impl UnitCycle {
    /// Create a cycle over `len` units, starting at the first one.
    pub const fn new(len: usize) -> Self { Self { index: 0, len } }

    /// Current unit index. Always `< max(1, len)`.
    #[inline]
    pub const fn index(&self) -> usize { self.index }

    /// Number of units in the cycle.
    #[inline]
    pub const fn len(&self) -> usize { self.len }

    /// Whether the cycle has no units at all.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Whether a tap can change anything.
    #[inline]
    pub const fn is_interactive(&self) -> bool { self.len > 0 }

    /// Move to the next unit, wrapping to the first.
    ///
    /// Returns `false` (and stays put) when the cycle is empty.
    pub const fn advance(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.index = next_index(self.index, self.len);
        true
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_kmh_to_mph() {
        assert!((convert(100.0, KMH, MPH) - 62.1371).abs() < EPSILON);
    }

    #[test]
    fn test_kmh_to_ms() {
        assert!((convert(36.0, KMH, MS) - 10.0).abs() < EPSILON);
        assert!((convert(100.0, KMH, MS) - 27.777_777_777_777_78).abs() < EPSILON);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        for c in [-40.0, 0.0, 25.0, 37.5, 100.0] {
            let expected = c * 9.0 / 5.0 + 32.0;
            assert!(
                (convert(c, CELSIUS, FAHRENHEIT) - expected).abs() < EPSILON,
                "conversion of {c} should match the closed form"
            );
        }
        assert!((celsius_to_fahrenheit(-40.0) + 40.0).abs() < EPSILON, "-40 is the same on both scales");
    }

    #[test]
    fn test_identity_for_base_unit() {
        assert_eq!(convert(42.5, KMH, KMH), 42.5);
        assert_eq!(convert(1013.0, HPA, HPA), 1013.0);
    }

    #[test]
    fn test_identity_for_unknown_pair() {
        assert_eq!(convert(12.0, KMH, "knots"), 12.0, "undeclared target passes through");
        assert_eq!(convert(12.0, MPH, KMH), 12.0, "reverse pairs are not declared");
        assert!(find_conversion(MPH, KMH).is_none());
    }

    #[test]
    fn test_conversion_table_has_no_duplicate_pairs() {
        for (i, a) in CONVERSIONS.iter().enumerate() {
            for b in &CONVERSIONS[i + 1..] {
                assert!(
                    !(a.from == b.from && a.to == b.to),
                    "duplicate conversion {} -> {}",
                    a.from,
                    a.to
                );
            }
        }
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 1), 0, "single unit cycles onto itself");
    }

    #[test]
    fn test_next_index_empty_is_fixed_point() {
        assert_eq!(next_index(0, 0), 0);
    }

    #[test]
    fn test_unit_cycle_starts_at_zero() {
        let cycle = UnitCycle::new(3);
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.len(), 3);
        assert!(cycle.is_interactive());
    }

    #[test]
    fn test_unit_cycle_full_revolution() {
        let mut cycle = UnitCycle::new(3);
        let mut seen = [0usize; 4];
        for slot in &mut seen {
            *slot = cycle.index();
            assert!(cycle.advance());
        }
        assert_eq!(seen, [0, 1, 2, 0]);
    }

    #[test]
    fn test_unit_cycle_empty_never_moves() {
        let mut cycle = UnitCycle::new(0);
        assert!(cycle.is_empty());
        assert!(!cycle.is_interactive());
        for _ in 0..5 {
            assert!(!cycle.advance(), "empty cycle should reject taps");
            assert_eq!(cycle.index(), 0);
        }
    }
}
