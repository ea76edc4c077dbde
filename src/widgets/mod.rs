//! Widget components for the weather dashboard.
//!
//! - [`cells`]: grid cells (humidity, pressure, wind, heat index, altitude, rain sensor)
//! - [`header`]: header bar with clock, title and FPS counter
//! - [`icons`]: vector icons for cells and rain conditions
//! - [`popups`]: overlay popups (unit change, FPS toggle)
//! - [`primitives`]: sky background, cards, value/unit runs
//! - [`temperature`]: temperature and rain forecast panel
//!
//! Every draw function is generic over `DrawTarget<Color = Rgb565>` and takes
//! the screen area it draws into, so the same code renders to the simulator
//! window and to a `MockDisplay` in tests. Widgets only draw views; all unit
//! state lives in [`crate::state`].

mod cells;
mod header;
mod icons;
mod popups;
mod primitives;
mod temperature;

pub use cells::draw_cell;
pub use header::draw_header;
pub use popups::{draw_fps_toggle_popup, draw_unit_popup};
pub use primitives::draw_sky_background;
pub use temperature::draw_temperature_panel;
