//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use weather_common::colors::{WHITE, sky_gradient};

use crate::config::SCREEN_HEIGHT;
use crate::styles::{LEFT_ALIGNED, text_width};

/// Inset between a layout slot and the card drawn in it.
const CARD_INSET: u32 = 3;

/// Card corner radius.
const CARD_RADIUS: u32 = 6;

const CARD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Fill `area` with the vertical sky gradient of the full screen.
pub fn draw_sky_background<D>(
    display: &mut D,
    area: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(bottom_right) = area.bottom_right() else {
        return;
    };
    for y in area.top_left.y..=bottom_right.y {
        let color = sky_gradient(y.max(0) as u32, SCREEN_HEIGHT);
        Line::new(Point::new(area.top_left.x, y), Point::new(bottom_right.x, y))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(display)
            .ok();
    }
}

/// Draw a rounded white card inside a layout slot.
pub fn draw_card<D>(
    display: &mut D,
    slot: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if slot.size.width <= CARD_INSET * 2 || slot.size.height <= CARD_INSET * 2 {
        return;
    }
    let inner = Rectangle::new(
        slot.top_left + Point::new(CARD_INSET as i32, CARD_INSET as i32),
        slot.size - Size::new(CARD_INSET * 2, CARD_INSET * 2),
    );
    RoundedRectangle::with_equal_corners(inner, Size::new(CARD_RADIUS, CARD_RADIUS))
        .into_styled(CARD_FILL)
        .draw(display)
        .ok();
}

/// Draw a value followed by its unit, centered on `center.x` at baseline `center.y`.
///
/// `spaced` inserts one space (in the unit font) between the two.
pub fn draw_value_with_unit<D>(
    display: &mut D,
    center: Point,
    value: &str,
    value_style: MonoTextStyle<'_, Rgb565>,
    unit: &str,
    unit_style: MonoTextStyle<'_, Rgb565>,
    spaced: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_w = text_width(value, value_style.font);
    let gap = if spaced { unit_style.font.character_size.width } else { 0 };
    let total = value_w + gap + text_width(unit, unit_style.font);

    let start = Point::new(center.x - (total / 2) as i32, center.y);
    Text::with_text_style(value, start, value_style, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let unit_pos = Point::new(start.x + (value_w + gap) as i32, center.y);
    Text::with_text_style(unit, unit_pos, unit_style, LEFT_ALIGNED)
        .draw(display)
        .ok();
}
