//! Grid cells: icon, value with unit, label.
//!
//! Each cell is a white card with three rows:
//! - Icon at the top
//! - Converted value and active unit in the middle
//! - Label at the bottom
//!
//! | Unit style | Value font | Unit font |
//! |------------|-----------|-----------|
//! | `Attached` (`55.0%`) | `ProFont` 14pt | 10x20, dark |
//! | `Spaced` (`62.1 mph`) | `ProFont` 14pt | 6x10, muted |
//!
//! Cells are redrawn only when the body is dirty, so the card background is
//! always painted first to cover the previous value.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use weather_common::{CellView, UnitStyle};

use super::icons::draw_icon;
use super::primitives::{draw_card, draw_value_with_unit};
use crate::styles::{CAPTION_STYLE, CELL_VALUE_STYLE, CENTERED, UNIT_STYLE_LARGE, UNIT_STYLE_SMALL};

/// Icon center, below the card top.
const ICON_Y: i32 = 15;

/// Value baseline.
const VALUE_Y: i32 = 42;

/// Label baseline.
const LABEL_Y: i32 = 57;

/// Draw one grid cell into `bounds`.
pub fn draw_cell<D>(
    display: &mut D,
    bounds: Rectangle,
    view: &CellView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_card(display, bounds);

    let center_x = bounds.top_left.x + (bounds.size.width / 2) as i32;
    let top = bounds.top_left.y;

    draw_icon(display, view.icon, Point::new(center_x, top + ICON_Y));

    let (unit_style, spaced) = match view.unit_style {
        UnitStyle::Attached => (UNIT_STYLE_LARGE, false),
        UnitStyle::Spaced => (UNIT_STYLE_SMALL, true),
    };
    draw_value_with_unit(
        display,
        Point::new(center_x, top + VALUE_Y),
        &view.value,
        CELL_VALUE_STYLE,
        view.unit,
        unit_style,
        spaced,
    );

    Text::with_text_style(view.label, Point::new(center_x, top + LABEL_Y), CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================
