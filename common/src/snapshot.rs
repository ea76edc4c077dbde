//! Feed snapshot schema and its mapping onto widget inputs.
//!
//! A [`WeatherSnapshot`] is one entry of the station feed. Every field is
//! optional upstream, so every field is a [`Reading`] that defaults to
//! [`Reading::Unavailable`]. Preformatted strings are turned into readings
//! with [`Reading::parse`].
//!
//! Two schema generations exist:
//!
//! | Field | Current | Older |
//! |-------|---------|-------|
//! | Temperature | `temperature_celsius` / `temperature_fahrenheit` strings | numeric `temperature` |
//! | Wind | `wind_speed_kmh` (mph and m/s are converted by the cell) | numeric `wind` (km/h) |
//!
//! The current field wins whenever it carries anything at all.

use core::fmt::Write;

use heapless::String;

use crate::reading::{Reading, TEXT_CAPACITY, truncated};
use crate::temperature::TemperatureInput;

/// Seconds in one day.
const SECS_PER_DAY: u64 = 86_400;

/// Formatted `HH:MM:SS UTC` clock text.
pub type ClockText = String<16>;

// =============================================================================
// Snapshot
// =============================================================================

/// One entry of the weather feed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherSnapshot {
    /// Relative humidity in percent.
    pub humidity: Reading,
    /// Barometric pressure in hPa.
    pub pressure: Reading,
    /// Rain status (`"heavy"`, `"moderate"`, ...).
    pub rain: Option<String<TEXT_CAPACITY>>,
    /// Raw rain sensor output in volts.
    pub rain_voltage: Reading,
    /// Older schema: temperature in Celsius.
    pub temperature: Reading,
    /// Temperature in Celsius, parsed from a preformatted string.
    pub temperature_celsius: Reading,
    /// Temperature in Fahrenheit, parsed from a preformatted string.
    pub temperature_fahrenheit: Reading,
    /// Older schema: wind speed in km/h.
    pub wind: Reading,
    /// Wind speed in km/h.
    pub wind_kmh: Reading,
    /// Heat index in Celsius.
    pub heat_index: Reading,
    /// Altitude in metres.
    pub altitude: Reading,
    /// Server timestamp, seconds since the Unix epoch.
    pub timestamp: Option<u64>,
}

/// Snapshot fields that feed a grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Humidity,
    Pressure,
    Wind,
    HeatIndex,
    Altitude,
    RainVoltage,
}

impl WeatherSnapshot {
    /// Set the rain status.
    pub fn set_rain(
        &mut self,
        status: &str,
    ) {
        self.rain = Some(truncated(status));
    }

    /// Celsius reading: the preformatted string, else the older numeric field.
    pub fn celsius(&self) -> &Reading { prefer(&self.temperature_celsius, &self.temperature) }

    /// Wind speed in km/h: the current field, else the older one.
    pub fn wind_speed(&self) -> &Reading { prefer(&self.wind_kmh, &self.wind) }

    /// Raw reading for a grid cell.
    pub fn field(
        &self,
        field: Field,
    ) -> &Reading {
        match field {
            Field::Humidity => &self.humidity,
            Field::Pressure => &self.pressure,
            Field::Wind => self.wind_speed(),
            Field::HeatIndex => &self.heat_index,
            Field::Altitude => &self.altitude,
            Field::RainVoltage => &self.rain_voltage,
        }
    }

    /// Inputs for the temperature widget.
    pub fn temperature_input(&self) -> TemperatureInput {
        TemperatureInput {
            celsius: self.celsius().clone(),
            fahrenheit: self.temperature_fahrenheit.as_number(),
            status: self.rain.as_deref().map(truncated),
        }
    }

    /// Server time of this snapshot as `HH:MM:SS UTC`.
    pub fn clock(&self) -> Option<ClockText> { self.timestamp.map(format_clock) }
}

fn prefer<'a>(
    current: &'a Reading,
    older: &'a Reading,
) -> &'a Reading {
    if current.is_unavailable() { older } else { current }
}

/// Format seconds since the epoch as time of day, `HH:MM:SS UTC`.
pub fn format_clock(epoch_secs: u64) -> ClockText {
    let secs = epoch_secs % SECS_PER_DAY;
    let mut s = ClockText::new();
    let _ = write!(s, "{:02}:{:02}:{:02} UTC", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_all_unavailable() {
        let snap = WeatherSnapshot::default();
        for field in [
            Field::Humidity,
            Field::Pressure,
            Field::Wind,
            Field::HeatIndex,
            Field::Altitude,
            Field::RainVoltage,
        ] {
            assert!(snap.field(field).is_unavailable(), "{field:?} should start unavailable");
        }
        assert!(snap.clock().is_none());
    }

    #[test]
    fn test_string_temperature_wins() {
        let snap = WeatherSnapshot {
            temperature: Reading::Number(20.0),
            temperature_celsius: Reading::parse("24.5"),
            ..Default::default()
        };
        assert_eq!(snap.celsius(), &Reading::Number(24.5));
    }

    #[test]
    fn test_older_numeric_temperature_used_when_string_missing() {
        let snap = WeatherSnapshot {
            temperature: Reading::Number(18.0),
            ..Default::default()
        };
        assert_eq!(snap.temperature_input().celsius, Reading::Number(18.0));
    }

    #[test]
    fn test_temperature_input_mapping() {
        let mut snap = WeatherSnapshot {
            temperature_celsius: Reading::parse("25"),
            temperature_fahrenheit: Reading::parse("77.0"),
            ..Default::default()
        };
        snap.set_rain("heavy");

        let input = snap.temperature_input();
        assert_eq!(input.celsius, Reading::Number(25.0));
        assert_eq!(input.fahrenheit, Some(77.0));
        assert_eq!(input.status.as_deref(), Some("heavy"));
    }

    #[test]
    fn test_non_numeric_fahrenheit_is_ignored() {
        let snap = WeatherSnapshot {
            temperature_celsius: Reading::parse("10"),
            temperature_fahrenheit: Reading::parse("--"),
            ..Default::default()
        };
        assert_eq!(snap.temperature_input().fahrenheit, None, "the widget derives it instead");
    }

    #[test]
    fn test_wind_prefers_kmh_field() {
        let mut snap = WeatherSnapshot {
            wind: Reading::Number(5.0),
            ..Default::default()
        };
        assert_eq!(snap.field(Field::Wind), &Reading::Number(5.0));
        snap.wind_kmh = Reading::Number(12.0);
        assert_eq!(snap.field(Field::Wind), &Reading::Number(12.0));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0).as_str(), "00:00:00 UTC");
        assert_eq!(format_clock(45_296).as_str(), "12:34:56 UTC");
        assert_eq!(format_clock(1_700_000_000).as_str(), "22:13:20 UTC");
    }
}
