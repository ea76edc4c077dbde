//! Raw readings and their text formatting.
//!
//! A [`Reading`] is whatever the feed delivered for one field: a number, a
//! piece of text, or nothing at all. "Nothing yet" is its own variant so it can
//! never be confused with a legitimately empty string; it only turns into the
//! [`PLACEHOLDER`] text when a view is built.
//!
//! Formatting writes into fixed-capacity `heapless` strings. Text that does not
//! fit is truncated at a character boundary.

use core::fmt::Write;

use heapless::String;

// =============================================================================
// Configuration Constants
// =============================================================================

/// Text shown for a value that has not been received.
pub const PLACEHOLDER: &str = "--";

/// Maximum characters kept for a text reading.
pub const TEXT_CAPACITY: usize = 24;

/// Capacity of a formatted value (number or verbatim text).
pub const VALUE_CAPACITY: usize = 32;

/// Formatted value text.
pub type ValueText = String<VALUE_CAPACITY>;

// =============================================================================
// Reading
// =============================================================================

/// One field of a feed snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Reading {
    /// No value received for this field.
    #[default]
    Unavailable,
    /// A finite numeric value in the field's base unit.
    Number(f64),
    /// A non-numeric value, displayed verbatim.
    Text(String<TEXT_CAPACITY>),
}

impl Reading {
    /// Build a numeric reading. NaN and infinities become [`Reading::Unavailable`].
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Unavailable
        }
    }

    /// Build a text reading, truncating to [`TEXT_CAPACITY`] characters.
    pub fn text(value: &str) -> Self { Self::Text(truncated(value)) }

    /// Interpret a preformatted upstream string.
    ///
    /// Strings that parse as a float (after trimming whitespace) become
    /// [`Reading::Number`]; anything else is kept verbatim as [`Reading::Text`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Number(v),
            _ => Self::text(raw),
        }
    }

    /// Numeric value, if any.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether nothing has been received for this field.
    #[inline]
    pub const fn is_unavailable(&self) -> bool { matches!(self, Self::Unavailable) }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self { Self::number(value) }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self { value.map_or(Self::Unavailable, Self::number) }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Copy `s` into a fixed-capacity string, dropping characters that do not fit.
pub fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Ties above this magnitude are left to the formatter.
const TIE_NUDGE_LIMIT: f64 = 1e12;

/// Write `value` with `args`, falling back to exponent form (`1e40`) when the
/// positional text does not fit.
fn write_number(
    value: f64,
    args: core::fmt::Arguments<'_>,
) -> ValueText {
    let mut s = ValueText::new();
    if s.write_fmt(args).is_ok() {
        return s;
    }
    s.clear();
    if write!(s, "{value:e}").is_err() {
        s = truncated(PLACEHOLDER);
    }
    s
}

/// Format a number in its shortest round-trip form (`25`, `77.54`, `-3.5`).
pub fn format_plain(value: f64) -> ValueText {
    write_number(value, format_args!("{value}"))
}

/// `true` when `value` lies exactly halfway between two tenths (`12.25`).
///
/// Such values are odd multiples of `0.25`, and scaling by four is exact.
fn is_tenths_tie(value: f64) -> bool {
    if !(value > -TIE_NUDGE_LIMIT && value < TIE_NUDGE_LIMIT) {
        return false;
    }
    let quarters = value * 4.0;
    let whole = quarters as i64;
    whole as f64 == quarters && whole % 2 != 0
}

/// Format a number with exactly one decimal place (`62.1`, `100.0`).
///
/// Exact ties round away from zero (`12.25` gives `12.3`, `-0.25` gives
/// `-0.3`).
pub fn format_fixed1(value: f64) -> ValueText {
    let value = match (is_tenths_tie(value), value < 0.0) {
        (true, true) => value - 0.05,
        (true, false) => value + 0.05,
        (false, _) => value,
    };
    write_number(value, format_args!("{value:.1}"))
}

/// Format a reading for display.
///
/// Numbers go through `number_fmt`, text is copied verbatim, and an
/// unavailable reading becomes [`PLACEHOLDER`].
pub fn format_reading(
    reading: &Reading,
    number_fmt: fn(f64) -> ValueText,
) -> ValueText {
    match reading {
        Reading::Unavailable => truncated(PLACEHOLDER),
        Reading::Number(v) => number_fmt(*v),
        Reading::Text(s) => truncated(s),
    }
}

// =============================================================================
// Tests
// =============================================================================
