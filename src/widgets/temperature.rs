//! Temperature panel: current temperature on the left, rain forecast on the right.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Temperature            Rain Forecast         │
//! │ 25°C                   (icon)  heavy         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Tapping anywhere in the panel toggles the scale; the forecast half is
//! unaffected by the scale.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use weather_common::TemperatureView;

use super::icons::draw_condition_icon;
use super::primitives::draw_card;
use crate::styles::{CAPTION_STYLE, LEFT_ALIGNED, STATUS_STYLE, TEMP_VALUE_STYLE, UNIT_STYLE_LARGE};

/// Horizontal padding inside the card.
const PAD_X: i32 = 14;

/// Caption baseline, relative to the panel top.
const CAPTION_Y: i32 = 20;

/// Temperature value baseline, relative to the panel top.
const VALUE_Y: i32 = 60;

/// Condition icon center, relative to the forecast half.
const ICON_OFFSET: Point = Point::new(PAD_X + 18, 50);

/// Status text baseline, relative to the forecast half.
const STATUS_OFFSET: Point = Point::new(PAD_X + 44, 56);

/// Draw the temperature panel into `bounds`.
pub fn draw_temperature_panel<D>(
    display: &mut D,
    bounds: Rectangle,
    view: &TemperatureView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_card(display, bounds);

    let left = bounds.top_left;
    let right = left + Point::new((bounds.size.width / 2) as i32, 0);

    // Temperature half
    Text::with_text_style("Temperature", left + Point::new(PAD_X, CAPTION_Y), CAPTION_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let value_pos = left + Point::new(PAD_X, VALUE_Y);
    let symbol_pos = Text::with_text_style(&view.value, value_pos, TEMP_VALUE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .unwrap_or(value_pos);
    Text::with_text_style(view.symbol, symbol_pos, UNIT_STYLE_LARGE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Forecast half
    Text::with_text_style("Rain Forecast", right + Point::new(PAD_X, CAPTION_Y), CAPTION_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    draw_condition_icon(display, view.icon, right + ICON_OFFSET);
    Text::with_text_style(&view.status, right + STATUS_OFFSET, STATUS_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use weather_common::{Reading, TemperatureDisplay, TemperatureInput};

    use super::*;
    use crate::config::{SCREEN_WIDTH, TEMP_PANEL_HEIGHT};

    /// Panel drawn at the origin so the temperature half lands on the mock display.
    fn render(view: &TemperatureView) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        let bounds = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, TEMP_PANEL_HEIGHT));
        draw_temperature_panel(&mut display, bounds, view);
        display
    }

    fn input() -> TemperatureInput {
        TemperatureInput {
            celsius: Reading::Number(25.0),
            fahrenheit: Some(77.0),
            status: None,
        }
    }

    #[test]
    fn test_panel_draw_is_deterministic() {
        let view = TemperatureDisplay::new().view(&input());
        assert_eq!(render(&view), render(&view), "same view should draw the same pixels");
    }

    #[test]
    fn test_scale_toggle_changes_pixels() {
        let mut widget = TemperatureDisplay::new();
        let celsius = render(&widget.view(&input()));
        widget.tap();
        let fahrenheit = render(&widget.view(&input()));
        assert_ne!(celsius, fahrenheit, "°C and °F must render differently");
    }

    #[test]
    fn test_missing_value_still_draws_placeholder() {
        let empty = TemperatureDisplay::new().view(&TemperatureInput::default());
        assert_eq!(empty.value.as_str(), "--");
        assert_ne!(render(&empty), render(&TemperatureDisplay::new().view(&input())));
    }
}
