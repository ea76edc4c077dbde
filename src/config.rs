//! Application configuration constants.
//!
//! Layout positions are derived from the screen size at compile time so the
//! drawing code and the hit-testing code read the same numbers.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ 12:34:56 UTC   Weather Station        50 FPS │  26px
//! ├──────────────────────────────────────────────┤
//! │  Temperature            Rain Forecast        │
//! │  25°C                   (icon) heavy         │  84px
//! ├──────────────┬───────────────┬───────────────┤
//! │   Humidity   │   Pressure    │     Wind      │  65px
//! ├──────────────┼───────────────┼───────────────┤
//! │  Heat Index  │   Altitude    │  Rain Sensor  │  65px
//! └──────────────┴───────────────┴───────────────┘
//!      106px          106px           106px
//! ```

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window scale factor for the desktop simulator.
pub const WINDOW_SCALE: u32 = 2;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long popups stay on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

/// Interval between simulated station snapshots.
pub const FEED_INTERVAL: Duration = Duration::from_secs(2);

/// Simulated connection delay before the first snapshot arrives.
pub const FEED_CONNECT_DELAY: Duration = Duration::from_millis(1500);

/// Number of feed entries the simulated store keeps.
pub const FEED_HISTORY: usize = 32;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Top edge of the temperature panel.
pub const TEMP_PANEL_Y: u32 = HEADER_HEIGHT;

/// Height of the temperature panel.
pub const TEMP_PANEL_HEIGHT: u32 = 84;

/// Top edge of the cell grid.
pub const GRID_Y: u32 = TEMP_PANEL_Y + TEMP_PANEL_HEIGHT;

/// Number of grid columns.
pub const GRID_COLS: u32 = 3;

/// Number of grid rows.
pub const GRID_ROWS: u32 = 2;

/// Width of one grid column.
pub const COL_WIDTH: u32 = SCREEN_WIDTH / GRID_COLS;

/// Height of one grid row.
pub const ROW_HEIGHT: u32 = (SCREEN_HEIGHT - GRID_Y) / GRID_ROWS;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

const _: () = assert!(GRID_Y + GRID_ROWS * ROW_HEIGHT <= SCREEN_HEIGHT);
const _: () = assert!(GRID_COLS * COL_WIDTH <= SCREEN_WIDTH);
