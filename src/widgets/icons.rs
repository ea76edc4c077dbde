//! Vector icons drawn with embedded-graphics primitives.
//!
//! Cell icons fit a 20×20 box, condition icons a 32×28 box, both centered on
//! the given point.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use weather_common::colors::{CLOUD_GRAY, EARTH, GRAY, ORANGE, RAIN_BLUE, TEXT_DARK, YELLOW};
use weather_common::{ConditionIcon, Icon};

const BLUE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RAIN_BLUE);
const BLUE_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RAIN_BLUE, 2);
const ORANGE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ORANGE);
const ORANGE_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(ORANGE, 2);
const DARK_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(TEXT_DARK, 2);
const DARK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(TEXT_DARK);
const EARTH_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(EARTH);
const GRAY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);
const SUN_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(YELLOW);
const CLOUD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CLOUD_GRAY);

#[inline]
const fn at(
    c: Point,
    dx: i32,
    dy: i32,
) -> Point {
    Point::new(c.x + dx, c.y + dy)
}

// =============================================================================
// Cell Icons
// =============================================================================

/// Draw a cell icon centered on `c`.
pub fn draw_icon<D>(
    display: &mut D,
    icon: Icon,
    c: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match icon {
        Icon::Droplet => {
            Triangle::new(at(c, 0, -8), at(c, -5, 1), at(c, 5, 1))
                .into_styled(BLUE_FILL)
                .draw(display)
                .ok();
            Circle::with_center(at(c, 0, 3), 11)
                .into_styled(BLUE_FILL)
                .draw(display)
                .ok();
        }
        Icon::Gauge => {
            Circle::with_center(c, 17).into_styled(DARK_STROKE).draw(display).ok();
            Line::new(c, at(c, 5, -4)).into_styled(ORANGE_STROKE).draw(display).ok();
            Circle::with_center(c, 3).into_styled(DARK_FILL).draw(display).ok();
        }
        Icon::Wind => {
            for (x0, x1, dy) in [(-8, 6, -5), (-6, 8, 0), (-8, 3, 5)] {
                Line::new(at(c, x0, dy), at(c, x1, dy))
                    .into_styled(BLUE_STROKE)
                    .draw(display)
                    .ok();
            }
        }
        Icon::Thermometer => {
            Rectangle::new(at(c, -2, -9), Size::new(5, 12))
                .into_styled(ORANGE_FILL)
                .draw(display)
                .ok();
            Circle::with_center(at(c, 0, 5), 9)
                .into_styled(ORANGE_FILL)
                .draw(display)
                .ok();
        }
        Icon::Mountain => {
            Triangle::new(at(c, -10, 7), at(c, -2, -7), at(c, 6, 7))
                .into_styled(EARTH_FILL)
                .draw(display)
                .ok();
            Triangle::new(at(c, 0, 7), at(c, 5, -2), at(c, 10, 7))
                .into_styled(GRAY_FILL)
                .draw(display)
                .ok();
        }
        Icon::Bolt => {
            Triangle::new(at(c, 3, -9), at(c, -5, 1), at(c, 1, 1))
                .into_styled(ORANGE_FILL)
                .draw(display)
                .ok();
            Triangle::new(at(c, -1, -1), at(c, 5, -1), at(c, -3, 9))
                .into_styled(ORANGE_FILL)
                .draw(display)
                .ok();
        }
    }
}

// =============================================================================
// Condition Icons
// =============================================================================

fn draw_cloud<D>(
    display: &mut D,
    c: Point,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(at(c, -6, 1), 12).into_styled(style).draw(display).ok();
    Circle::with_center(at(c, 2, -3), 16).into_styled(style).draw(display).ok();
    Circle::with_center(at(c, 9, 2), 10).into_styled(style).draw(display).ok();
    Rectangle::new(at(c, -12, 2), Size::new(26, 6))
        .into_styled(style)
        .draw(display)
        .ok();
}

fn draw_drops<D>(
    display: &mut D,
    c: Point,
    count: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let spacing = 6;
    let first = -(count - 1) * spacing / 2;
    for i in 0..count {
        let x = first + i * spacing;
        Line::new(at(c, x + 1, 10), at(c, x - 1, 14))
            .into_styled(BLUE_STROKE)
            .draw(display)
            .ok();
    }
}

/// Draw the rain condition icon centered on `c`.
pub fn draw_condition_icon<D>(
    display: &mut D,
    icon: ConditionIcon,
    c: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match icon {
        ConditionIcon::Clear => {
            Circle::with_center(at(c, -5, -5), 16)
                .into_styled(SUN_FILL)
                .draw(display)
                .ok();
            draw_cloud(display, at(c, 3, 4), CLOUD_FILL);
        }
        ConditionIcon::ModerateRain => {
            Circle::with_center(at(c, -7, -7), 12)
                .into_styled(SUN_FILL)
                .draw(display)
                .ok();
            draw_cloud(display, c, CLOUD_FILL);
            draw_drops(display, c, 2);
        }
        ConditionIcon::HeavyRain => {
            draw_cloud(display, c, GRAY_FILL);
            draw_drops(display, c, 4);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
