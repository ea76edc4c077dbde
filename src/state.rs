//! Dashboard widget state.
//!
//! Owns the latest feed snapshot plus the mounted widgets: one temperature
//! display and six multi-unit cells. Each widget keeps its own unit selection;
//! a new snapshot replaces the readings and never touches the selections.

use weather_common::units::{CELSIUS, FAHRENHEIT, FEET, HPA, INHG, KMH, METERS, MPH, MS, PERCENT, VOLTS};
use weather_common::{
    CellSpec,
    CellView,
    Field,
    Icon,
    MultiUnitCell,
    TemperatureDisplay,
    TemperatureView,
    WeatherSnapshot,
};

// =============================================================================
// Cell Layout
// =============================================================================

/// Number of cells in the grid (3 columns × 2 rows).
pub const CELL_COUNT: usize = 6;

/// Cell indices.
/// Layout:
///   Row 1 (top):    HUMIDITY   | PRESSURE | WIND
///   Row 2 (bottom): HEAT_INDEX | ALTITUDE | RAIN_SENSOR
pub mod cell_idx {
    pub const HUMIDITY: usize = 0;
    pub const PRESSURE: usize = 1;
    pub const WIND: usize = 2;
    pub const HEAT_INDEX: usize = 3;
    pub const ALTITUDE: usize = 4;
    pub const RAIN_SENSOR: usize = 5;
}

const _: () = assert!(cell_idx::HUMIDITY == 0 && cell_idx::RAIN_SENSOR == CELL_COUNT - 1);

const WIND_UNITS: &[&str] = &[KMH, MPH, MS];
const PRESSURE_UNITS: &[&str] = &[HPA, INHG];
const HEAT_UNITS: &[&str] = &[CELSIUS, FAHRENHEIT];
const ALTITUDE_UNITS: &[&str] = &[METERS, FEET];

/// Cell configuration and the snapshot field feeding it, in grid order.
const CELLS: [(CellSpec, Field); CELL_COUNT] = [
    (CellSpec::new(Icon::Droplet, "Humidity", &[], PERCENT), Field::Humidity),
    (
        CellSpec::new(Icon::Gauge, "Pressure", PRESSURE_UNITS, HPA).with_base_unit(HPA),
        Field::Pressure,
    ),
    (CellSpec::new(Icon::Wind, "Wind", WIND_UNITS, KMH), Field::Wind),
    (
        CellSpec::new(Icon::Thermometer, "Heat Index", HEAT_UNITS, CELSIUS).with_base_unit(CELSIUS),
        Field::HeatIndex,
    ),
    (
        CellSpec::new(Icon::Mountain, "Altitude", ALTITUDE_UNITS, METERS).with_base_unit(METERS),
        Field::Altitude,
    ),
    (CellSpec::new(Icon::Bolt, "Rain Sensor", &[], VOLTS), Field::RainVoltage),
];

/// Label of the temperature widget in logs and popups.
pub const TEMPERATURE_LABEL: &str = "Temperature";

// =============================================================================
// Tap Targets
// =============================================================================

/// Something the user can tap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Target {
    /// The temperature panel.
    Temperature,
    /// A grid cell, by [`cell_idx`].
    Cell(usize),
}

/// A unit selection that changed because of a tap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnitChange {
    /// Widget label (`Wind`).
    pub label: &'static str,
    /// Newly selected unit (`mph`).
    pub unit: &'static str,
}

// =============================================================================
// Dashboard State
// =============================================================================

/// Latest snapshot and all mounted widgets.
pub struct DashboardState {
    snapshot: Option<WeatherSnapshot>,
    temperature: TemperatureDisplay,
    cells: [MultiUnitCell; CELL_COUNT],
}

impl DashboardState {
    /// Mount all widgets with their first unit selected and no data.
    pub fn new() -> Self {
        Self {
            snapshot: None,
            temperature: TemperatureDisplay::new(),
            cells: CELLS.map(|(spec, _)| MultiUnitCell::new(spec)),
        }
    }

    /// Replace all widget inputs with a new snapshot.
    ///
    /// Returns `true` if this is the first snapshot received.
    pub fn apply_snapshot(
        &mut self,
        snapshot: WeatherSnapshot,
    ) -> bool {
        self.snapshot.replace(snapshot).is_none()
    }

    /// Latest snapshot, if any arrived yet.
    #[inline]
    pub const fn snapshot(&self) -> Option<&WeatherSnapshot> { self.snapshot.as_ref() }

    /// Handle a tap on a widget.
    ///
    /// Returns the new unit, or `None` when the target ignores taps.
    pub fn tap(
        &mut self,
        target: Target,
    ) -> Option<UnitChange> {
        match target {
            Target::Temperature => {
                let scale = self.temperature.tap();
                Some(UnitChange {
                    label: TEMPERATURE_LABEL,
                    unit: scale.symbol(),
                })
            }
            Target::Cell(idx) => {
                let cell = self.cells.get_mut(idx)?;
                let unit = cell.tap()?;
                Some(UnitChange {
                    label: cell.spec().label,
                    unit,
                })
            }
        }
    }

    /// Temperature panel view for the latest snapshot.
    pub fn temperature_view(&self) -> TemperatureView {
        let input = self
            .snapshot
            .as_ref()
            .map(WeatherSnapshot::temperature_input)
            .unwrap_or_default();
        self.temperature.view(&input)
    }

    /// View of grid cell `idx` for the latest snapshot.
    pub fn cell_view(
        &self,
        idx: usize,
    ) -> Option<CellView> {
        let cell = self.cells.get(idx)?;
        let field = CELLS.get(idx)?.1;
        let reading = self
            .snapshot
            .as_ref()
            .map(|s| s.field(field).clone())
            .unwrap_or_default();
        Some(cell.view(&reading))
    }
}

impl Default for DashboardState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use weather_common::Reading;

    use super::*;

    fn snapshot_with_wind(kmh: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            wind_kmh: Reading::Number(kmh),
            temperature_celsius: Reading::parse("25"),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = DashboardState::new();
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_first_snapshot_reported_once() {
        let mut state = DashboardState::new();
        assert!(state.apply_snapshot(snapshot_with_wind(10.0)), "first snapshot ends loading");
        assert!(!state.apply_snapshot(snapshot_with_wind(12.0)));
        assert!(state.snapshot().is_some());
    }

    #[test]
    fn test_views_without_snapshot_show_placeholders() {
        let state = DashboardState::new();
        assert_eq!(state.temperature_view().text().as_str(), "--°C");
        for idx in 0..CELL_COUNT {
            let view = state.cell_view(idx).unwrap();
            assert_eq!(view.value.as_str(), "--", "cell {idx} should show the placeholder");
        }
    }

    #[test]
    fn test_tap_temperature_toggles_scale() {
        let mut state = DashboardState::new();
        state.apply_snapshot(snapshot_with_wind(0.0));

        let change = state.tap(Target::Temperature).unwrap();
        assert_eq!(change.label, TEMPERATURE_LABEL);
        assert_eq!(change.unit, FAHRENHEIT);
        assert_eq!(state.temperature_view().text().as_str(), "77°F");

        let change = state.tap(Target::Temperature).unwrap();
        assert_eq!(change.unit, CELSIUS);
    }

    #[test]
    fn test_tap_wind_cycles_units() {
        let mut state = DashboardState::new();
        state.apply_snapshot(snapshot_with_wind(100.0));

        assert_eq!(state.cell_view(cell_idx::WIND).unwrap().text().as_str(), "100.0 km/h");
        let change = state.tap(Target::Cell(cell_idx::WIND)).unwrap();
        assert_eq!(change, UnitChange { label: "Wind", unit: MPH });
        assert_eq!(state.cell_view(cell_idx::WIND).unwrap().text().as_str(), "62.1 mph");
    }

    #[test]
    fn test_fixed_unit_cells_ignore_taps() {
        let mut state = DashboardState::new();
        assert!(state.tap(Target::Cell(cell_idx::HUMIDITY)).is_none());
        assert!(state.tap(Target::Cell(cell_idx::RAIN_SENSOR)).is_none());
        assert!(state.tap(Target::Cell(cell_idx::WIND)).is_some(), "wind cycles units");
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut state = DashboardState::new();
        assert!(state.tap(Target::Cell(CELL_COUNT)).is_none());
        assert!(state.cell_view(CELL_COUNT).is_none());
    }

    #[test]
    fn test_new_snapshot_keeps_unit_selection() {
        let mut state = DashboardState::new();
        state.apply_snapshot(snapshot_with_wind(100.0));
        state.tap(Target::Cell(cell_idx::WIND));
        state.tap(Target::Temperature);

        state.apply_snapshot(snapshot_with_wind(36.0));
        let wind = state.cell_view(cell_idx::WIND).unwrap();
        assert_eq!(wind.unit, MPH, "selection survives new data");
        assert_eq!(wind.value.as_str(), "22.4");
        assert_eq!(state.temperature_view().symbol, FAHRENHEIT);
    }

    #[test]
    fn test_cell_base_units_convert() {
        let mut state = DashboardState::new();
        state.apply_snapshot(WeatherSnapshot {
            pressure: Reading::Number(1000.0),
            altitude: Reading::Number(100.0),
            heat_index: Reading::Number(30.0),
            ..Default::default()
        });

        state.tap(Target::Cell(cell_idx::PRESSURE));
        state.tap(Target::Cell(cell_idx::ALTITUDE));
        state.tap(Target::Cell(cell_idx::HEAT_INDEX));

        assert_eq!(state.cell_view(cell_idx::PRESSURE).unwrap().text().as_str(), "29.5 inHg");
        assert_eq!(state.cell_view(cell_idx::ALTITUDE).unwrap().text().as_str(), "328.1 ft");
        assert_eq!(state.cell_view(cell_idx::HEAT_INDEX).unwrap().text().as_str(), "86.0 °F");
    }

    #[test]
    fn test_cell_order_matches_indices() {
        let state = DashboardState::new();
        assert_eq!(state.cell_view(cell_idx::HUMIDITY).unwrap().label, "Humidity");
        assert_eq!(state.cell_view(cell_idx::PRESSURE).unwrap().label, "Pressure");
        assert_eq!(state.cell_view(cell_idx::WIND).unwrap().label, "Wind");
        assert_eq!(state.cell_view(cell_idx::HEAT_INDEX).unwrap().label, "Heat Index");
        assert_eq!(state.cell_view(cell_idx::ALTITUDE).unwrap().label, "Altitude");
        assert_eq!(state.cell_view(cell_idx::RAIN_SENSOR).unwrap().label, "Rain Sensor");
    }
}
