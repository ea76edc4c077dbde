//! Temperature widget model: Celsius/Fahrenheit toggle and rain condition icon.
//!
//! The widget receives a Celsius reading, an optional pre-computed Fahrenheit
//! value, and a rain status string. It owns exactly one piece of state, the
//! selected [`TemperatureScale`], which starts at Celsius and flips on every
//! tap. Everything else is derived on each [`TemperatureDisplay::view`] call.
//!
//! # Display Rules
//!
//! | Scale | Shown value | Suffix |
//! |-------|-------------|--------|
//! | Celsius | `celsius` | `°C` |
//! | Fahrenheit | `fahrenheit`, else `celsius * 9/5 + 32` | `°F` |
//!
//! Missing values render as `--` with the active suffix.

use crate::reading::{Reading, ValueText, format_plain, format_reading, truncated};
use crate::units::{CELSIUS, FAHRENHEIT, celsius_to_fahrenheit};

/// Status text shown while no rain status has arrived.
pub const STATUS_LOADING: &str = "Loading...";

/// Rain status that selects the heavy rain icon.
pub const STATUS_HEAVY: &str = "heavy";

/// Rain status that selects the moderate rain icon.
pub const STATUS_MODERATE: &str = "moderate";

// =============================================================================
// Temperature Scale
// =============================================================================

/// Selected temperature scale.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TemperatureScale {
    /// Degrees Celsius (initial scale).
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureScale {
    /// Flip to the other scale.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    /// Unit suffix for this scale.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => CELSIUS,
            Self::Fahrenheit => FAHRENHEIT,
        }
    }
}

// =============================================================================
// Condition Icon
// =============================================================================

/// Rain condition icon, chosen from the rain status string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConditionIcon {
    /// Status `"heavy"`.
    HeavyRain,
    /// Status `"moderate"`.
    ModerateRain,
    /// Any other status, including none.
    Clear,
}

impl ConditionIcon {
    /// Select the icon for a rain status. Total over all inputs.
    pub fn for_status(status: Option<&str>) -> Self {
        match status {
            Some(STATUS_HEAVY) => Self::HeavyRain,
            Some(STATUS_MODERATE) => Self::ModerateRain,
            _ => Self::Clear,
        }
    }
}

// =============================================================================
// Input and View
// =============================================================================

/// Inputs supplied by the dashboard on every snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemperatureInput {
    /// Temperature in Celsius.
    pub celsius: Reading,
    /// Pre-computed Fahrenheit value. Derived from `celsius` when absent.
    pub fahrenheit: Option<f64>,
    /// Rain status string (e.g. `"heavy"`).
    pub status: Option<ValueText>,
}

impl TemperatureInput {
    /// Fahrenheit reading: the supplied value, else converted from Celsius.
    pub fn fahrenheit_reading(&self) -> Reading {
        match self.fahrenheit {
            Some(f) => Reading::number(f),
            None => match self.celsius.as_number() {
                Some(c) => Reading::number(celsius_to_fahrenheit(c)),
                None => Reading::Unavailable,
            },
        }
    }
}

/// Everything the host needs to draw the temperature panel.
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureView {
    /// Value text without suffix (`25`, `77.54`, `--`).
    pub value: ValueText,
    /// Active unit suffix (`°C` or `°F`).
    pub symbol: &'static str,
    /// Condition icon.
    pub icon: ConditionIcon,
    /// Status text shown beside the icon.
    pub status: ValueText,
}

impl TemperatureView {
    /// Value immediately followed by the suffix (`25°C`).
    pub fn text(&self) -> ValueText {
        let mut s: ValueText = truncated(&self.value);
        s.push_str(self.symbol).ok();
        s
    }
}

// =============================================================================
// Temperature Display
// =============================================================================

/// Temperature widget state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TemperatureDisplay {
    scale: TemperatureScale,
}

impl TemperatureDisplay {
    /// Freshly mounted widget showing Celsius.
    pub const fn new() -> Self {
        Self {
            scale: TemperatureScale::Celsius,
        }
    }

    /// Currently selected scale.
    #[inline]
    pub const fn scale(&self) -> TemperatureScale { self.scale }

    /// Whether Celsius is selected.
    #[inline]
    pub const fn is_celsius(&self) -> bool { matches!(self.scale, TemperatureScale::Celsius) }

    /// Handle a tap: flip the scale. Returns the new scale.
    pub const fn tap(&mut self) -> TemperatureScale {
        self.scale = self.scale.toggle();
        self.scale
    }

    /// Derive the view for the given inputs. Does not mutate state.
    pub fn view(
        &self,
        input: &TemperatureInput,
    ) -> TemperatureView {
        let value = match self.scale {
            TemperatureScale::Celsius => format_reading(&input.celsius, format_plain),
            TemperatureScale::Fahrenheit => format_reading(&input.fahrenheit_reading(), format_plain),
        };

        let status_str = input.status.as_deref().filter(|s| !s.is_empty());
        let status = truncated(status_str.unwrap_or(STATUS_LOADING));

        TemperatureView {
            value,
            symbol: self.scale.symbol(),
            icon: ConditionIcon::for_status(status_str),
            status,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        celsius: Reading,
        fahrenheit: Option<f64>,
        status: Option<&str>,
    ) -> TemperatureInput {
        TemperatureInput {
            celsius,
            fahrenheit,
            status: status.map(truncated),
        }
    }

    #[test]
    fn test_initial_scale_is_celsius() {
        let display = TemperatureDisplay::new();
        assert!(display.is_celsius());
        assert_eq!(display.scale(), TemperatureScale::default());
    }

    #[test]
    fn test_scenario_heavy_rain_then_tap() {
        let mut display = TemperatureDisplay::new();
        let inp = input(Reading::Number(25.0), None, Some("heavy"));

        let view = display.view(&inp);
        assert_eq!(view.text().as_str(), "25°C");
        assert_eq!(view.icon, ConditionIcon::HeavyRain);
        assert_eq!(view.status.as_str(), "heavy");

        display.tap();
        let view = display.view(&inp);
        assert_eq!(view.text().as_str(), "77°F", "25°C is 77°F");
        assert_eq!(view.icon, ConditionIcon::HeavyRain, "icon does not depend on scale");
    }

    #[test]
    fn test_derived_fahrenheit_matches_formula() {
        for c in [-17.5, 0.0, 12.3, 25.0, 41.9] {
            let inp = input(Reading::Number(c), None, None);
            let f = inp.fahrenheit_reading().as_number().unwrap();
            assert!((f - (c * 9.0 / 5.0 + 32.0)).abs() < 1e-9, "{c}°C converts exactly");
        }
    }

    #[test]
    fn test_supplied_fahrenheit_wins() {
        let mut display = TemperatureDisplay::new();
        display.tap();
        let inp = input(Reading::Number(25.0), Some(76.9), None);
        assert_eq!(display.view(&inp).text().as_str(), "76.9°F");
    }

    #[test]
    fn test_unavailable_celsius_renders_placeholder_on_both_scales() {
        let mut display = TemperatureDisplay::new();
        let inp = input(Reading::Unavailable, None, None);
        assert_eq!(display.view(&inp).text().as_str(), "--°C");
        display.tap();
        assert_eq!(display.view(&inp).text().as_str(), "--°F");
    }

    #[test]
    fn test_text_celsius_has_no_fahrenheit() {
        let mut display = TemperatureDisplay::new();
        let inp = input(Reading::text("n/a"), None, None);
        assert_eq!(display.view(&inp).text().as_str(), "n/a°C", "text is shown verbatim");
        display.tap();
        assert_eq!(display.view(&inp).text().as_str(), "--°F", "no conversion from text");
    }

    #[test]
    fn test_double_toggle_restores_view() {
        let mut display = TemperatureDisplay::new();
        let inp = input(Reading::Number(18.25), None, Some("moderate"));
        let before = display.view(&inp);
        display.tap();
        display.tap();
        assert_eq!(display.view(&inp), before);
    }

    #[test]
    fn test_view_is_idempotent() {
        let display = TemperatureDisplay::new();
        let inp = input(Reading::Number(3.5), None, Some("light"));
        assert_eq!(display.view(&inp), display.view(&inp));
    }

    #[test]
    fn test_icon_partitions() {
        assert_eq!(ConditionIcon::for_status(Some("heavy")), ConditionIcon::HeavyRain);
        assert_eq!(ConditionIcon::for_status(Some("moderate")), ConditionIcon::ModerateRain);
        for other in ["", "light", "none", "HEAVY", "heavy ", "drizzle"] {
            assert_eq!(
                ConditionIcon::for_status(Some(other)),
                ConditionIcon::Clear,
                "{other:?} should fall into the default partition"
            );
        }
        assert_eq!(ConditionIcon::for_status(None), ConditionIcon::Clear);
    }

    #[test]
    fn test_missing_or_empty_status_shows_loading() {
        let display = TemperatureDisplay::new();
        let missing = input(Reading::Number(20.0), None, None);
        assert_eq!(display.view(&missing).status.as_str(), STATUS_LOADING);
        let empty = input(Reading::Number(20.0), None, Some(""));
        assert_eq!(display.view(&empty).status.as_str(), STATUS_LOADING);
        assert_eq!(display.view(&empty).icon, ConditionIcon::Clear);
    }

    #[test]
    fn test_new_input_does_not_reset_scale() {
        let mut display = TemperatureDisplay::new();
        display.tap();
        let later = input(Reading::Number(30.0), None, None);
        assert_eq!(display.view(&later).symbol, FAHRENHEIT);
        assert_eq!(display.view(&later).value.as_str(), "86");
    }

    #[test]
    fn test_scale_toggle_cycle() {
        assert_eq!(TemperatureScale::Celsius.toggle(), TemperatureScale::Fahrenheit);
        assert_eq!(TemperatureScale::Fahrenheit.toggle(), TemperatureScale::Celsius);
    }
}
