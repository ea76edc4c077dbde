//! Header bar: snapshot clock, title and optional FPS counter.
//!
//! All positions are `const`; the header is only redrawn when
//! [`RenderState::check_header_dirty`](crate::render::RenderState::check_header_dirty)
//! reports a change.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;
use weather_common::colors::SKY_DEEP;

use crate::{
    config::{HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{CENTERED, LABEL_STYLE_GREEN, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Position of the title (centered horizontally).
const HEADER_TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 19);

/// Position of the snapshot clock (left-aligned, 4px from edge).
const HEADER_CLOCK_POS: Point = Point::new(4, 17);

/// Position of the FPS counter (right-aligned, 5px from edge).
const HEADER_FPS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);

const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SKY_DEEP);

/// Header title.
const TITLE: &str = "Weather Station";

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar.
///
/// `clock` is the formatted timestamp of the latest snapshot, if it carried one.
pub fn draw_header<D>(
    display: &mut D,
    show_fps: bool,
    fps: f32,
    clock: Option<&str>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style(TITLE, HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    if let Some(clock) = clock {
        Text::with_text_style(clock, HEADER_CLOCK_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    if show_fps {
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        Text::with_text_style(&fps_str, HEADER_FPS_POS, LABEL_STYLE_GREEN, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    fn render(clock: Option<&str>) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        draw_header(&mut display, false, 50.0, clock);
        display
    }

    #[test]
    fn test_clock_is_drawn_on_the_left() {
        assert_ne!(render(None), render(Some("12:34:56 UTC")), "clock should be visible at the left edge");
    }

    #[test]
    fn test_header_fills_its_bar() {
        let display = render(None);
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(SKY_DEEP));
        assert_eq!(display.get_pixel(Point::new(0, HEADER_HEIGHT as i32)), None, "nothing below the bar");
    }
}
