//! Input handling for simulator events.
//!
//! Converts keyboard and mouse events into dashboard actions. Taps only apply
//! on the dashboard page; `Y` works everywhere.
//!
//! | Input | Action |
//! |-------|--------|
//! | Click temperature panel, `A` | Toggle °C / °F |
//! | Click grid cell | Cycle that cell's unit |
//! | `W` / `P` / `I` / `L` | Cycle wind / pressure / heat index / altitude |
//! | `X` | Toggle FPS counter |
//! | `Y` | Switch page |

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};

use crate::config::{COL_WIDTH, GRID_COLS, GRID_ROWS, GRID_Y, ROW_HEIGHT, SCREEN_WIDTH, TEMP_PANEL_HEIGHT, TEMP_PANEL_Y};
use crate::pages::Page;
use crate::state::{CELL_COUNT, Target, cell_idx};

// =============================================================================
// Layout Geometry
// =============================================================================

/// Screen area of the temperature panel.
pub const TEMP_PANEL: Rectangle = Rectangle::new(
    Point::new(0, TEMP_PANEL_Y as i32),
    Size::new(SCREEN_WIDTH, TEMP_PANEL_HEIGHT),
);

/// Screen area of grid cell `idx` (row-major).
pub const fn cell_bounds(idx: usize) -> Rectangle {
    let col = idx as u32 % GRID_COLS;
    let row = idx as u32 / GRID_COLS;
    Rectangle::new(
        Point::new((col * COL_WIDTH) as i32, (GRID_Y + row * ROW_HEIGHT) as i32),
        Size::new(COL_WIDTH, ROW_HEIGHT),
    )
}

const _: () = assert!((GRID_COLS * GRID_ROWS) as usize == CELL_COUNT);

/// Widget under a screen point.
pub fn hit_test(point: Point) -> Option<Target> {
    if TEMP_PANEL.contains(point) {
        return Some(Target::Temperature);
    }
    (0..CELL_COUNT)
        .find(|&idx| cell_bounds(idx).contains(point))
        .map(Target::Cell)
}

// =============================================================================
// Actions
// =============================================================================

/// What one input event asks the dashboard to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Close the application.
    Quit,
    /// Show or hide the FPS counter.
    ToggleFps,
    /// Switch between dashboard and debug page.
    SwitchPage,
    /// Tap a widget.
    Tap(Target),
}

/// Map a key press to an action.
pub fn key_action(
    keycode: Keycode,
    page: Page,
) -> Option<Action> {
    let on_dashboard = page == Page::Dashboard;
    match keycode {
        Keycode::Y => Some(Action::SwitchPage),
        Keycode::X if on_dashboard => Some(Action::ToggleFps),
        Keycode::A if on_dashboard => Some(Action::Tap(Target::Temperature)),
        Keycode::W if on_dashboard => Some(Action::Tap(Target::Cell(cell_idx::WIND))),
        Keycode::P if on_dashboard => Some(Action::Tap(Target::Cell(cell_idx::PRESSURE))),
        Keycode::I if on_dashboard => Some(Action::Tap(Target::Cell(cell_idx::HEAT_INDEX))),
        Keycode::L if on_dashboard => Some(Action::Tap(Target::Cell(cell_idx::ALTITUDE))),
        _ => None,
    }
}

/// Map a left click to an action.
pub fn click_action(
    point: Point,
    page: Page,
) -> Option<Action> {
    if page != Page::Dashboard {
        return None;
    }
    hit_test(point).map(Action::Tap)
}

/// Map a simulator event to an action. OS key repeat is ignored.
pub fn event_action(
    event: SimulatorEvent,
    page: Page,
) -> Option<Action> {
    match event {
        SimulatorEvent::Quit => Some(Action::Quit),
        SimulatorEvent::KeyDown { keycode, repeat, .. } if !repeat => key_action(keycode, page),
        SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point,
        } => click_action(point, page),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
