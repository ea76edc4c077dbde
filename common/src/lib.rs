//! Platform-agnostic core of the weather station dashboard.
//!
//! Everything here is shared between the desktop simulator and any embedded
//! display target:
//!
//! - [`units`]: unit identifiers, the conversion table and the unit-cycle state machine
//! - [`reading`]: feed values with an explicit "not received" state, and their formatting
//! - [`temperature`]: Celsius/Fahrenheit widget model and rain condition icon
//! - [`cell`]: multi-unit grid cell model
//! - [`snapshot`]: feed snapshot schema and mapping to widget inputs
//! - [`colors`]: RGB565 palette and sky gradient
//! - [`log`]: debug log ring buffer
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation free. Text lives in fixed-capacity
//! `heapless` strings that truncate instead of failing.

#![no_std]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod cell;
pub mod colors;
pub mod log;
pub mod reading;
pub mod snapshot;
pub mod temperature;
pub mod units;

pub use cell::{CellSpec, CellView, Icon, MultiUnitCell, UnitStyle};
pub use reading::{PLACEHOLDER, Reading};
pub use snapshot::{Field, WeatherSnapshot};
pub use temperature::{ConditionIcon, TemperatureDisplay, TemperatureInput, TemperatureScale, TemperatureView};
