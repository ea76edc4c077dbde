//! Non-modal popup overlays for status messages.
//!
//! Popups appear centered on screen with a white border around a deep-blue
//! background. Only one popup displays at a time (most recent wins). Input is
//! still processed while a popup is visible, so tapping another widget simply
//! replaces it.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use weather_common::colors::{SKY_DEEP, WHITE};

use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::state::UnitChange;
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

// =============================================================================
// Popup Geometry
// =============================================================================

/// Border width around the popup background.
const BORDER: u32 = 3;

const FPS_POPUP: Rectangle = centered(140, 50);
const UNIT_POPUP: Rectangle = centered(200, 50);

/// Single line of text, vertically centered.
const TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 5);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const BG_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SKY_DEEP);

/// Screen-centered rectangle of the given size.
const fn centered(
    width: u32,
    height: u32,
) -> Rectangle {
    Rectangle::new(
        Point::new(((SCREEN_WIDTH - width) / 2) as i32, ((SCREEN_HEIGHT - height) / 2) as i32),
        Size::new(width, height),
    )
}

/// Rectangle grown by [`BORDER`] on every side.
const fn with_border(rect: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(rect.top_left.x - BORDER as i32, rect.top_left.y - BORDER as i32),
        Size::new(rect.size.width + BORDER * 2, rect.size.height + BORDER * 2),
    )
}

// =============================================================================
// Drawing Functions
// =============================================================================

fn draw_popup<D>(
    display: &mut D,
    area: Rectangle,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    with_border(area).into_styled(WHITE_FILL).draw(display).ok();
    area.into_styled(BG_FILL).draw(display).ok();
    Text::with_text_style(text, TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the "FPS ON/OFF" popup.
pub fn draw_fps_toggle_popup<D>(
    display: &mut D,
    fps_enabled: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let status = if fps_enabled { "FPS ON" } else { "FPS OFF" };
    draw_popup(display, FPS_POPUP, status);
}

/// Popup text for a unit change: `WIND: MPH`, `TEMPERATURE: °F`.
pub fn unit_popup_text(change: &UnitChange) -> String<32> {
    let mut s = String::new();
    for c in change.label.chars() {
        s.push(c.to_ascii_uppercase()).ok();
    }
    s.push_str(": ").ok();
    for c in change.unit.chars() {
        s.push(c.to_ascii_uppercase()).ok();
    }
    s
}

/// Draw the popup announcing a unit change.
pub fn draw_unit_popup<D>(
    display: &mut D,
    change: &UnitChange,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup(display, UNIT_POPUP, &unit_popup_text(change));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::text_width;

    #[test]
    fn test_unit_popup_text() {
        let wind = UnitChange {
            label: "Wind",
            unit: "mph",
        };
        assert_eq!(unit_popup_text(&wind).as_str(), "WIND: MPH");

        let temp = UnitChange {
            label: "Temperature",
            unit: "°F",
        };
        assert_eq!(unit_popup_text(&temp).as_str(), "TEMPERATURE: °F", "degree sign is kept");
    }

    #[test]
    fn test_longest_unit_text_fits_popup() {
        let longest = UnitChange {
            label: "Temperature",
            unit: "°F",
        };
        let width = text_width(&unit_popup_text(&longest), TITLE_STYLE_WHITE.font);
        assert!(width < UNIT_POPUP.size.width, "{width}px does not fit");
    }

    #[test]
    fn test_popups_are_centered() {
        for popup in [FPS_POPUP, UNIT_POPUP] {
            assert_eq!(popup.top_left.x * 2 + popup.size.width as i32, SCREEN_WIDTH as i32);
            assert_eq!(popup.top_left.y * 2 + popup.size.height as i32, SCREEN_HEIGHT as i32);
            assert!(with_border(popup).top_left.y > 0);
        }
    }
}
