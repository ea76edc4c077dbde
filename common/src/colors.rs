//! Color palette for the weather dashboard.
//!
//! Rgb565 packs 5 bits red, 6 bits green and 5 bits blue, so the channel
//! ranges are 0-31, 0-63 and 0-31. The sky gradient endpoints are the two
//! background blues of the dashboard converted to those ranges.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Debug page background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Card backgrounds and text on the sky.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure yellow. Sun glyph.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure green. FPS counter.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Dashboard Palette
// =============================================================================

/// Light sky blue, top of the background gradient (#6dd5fa).
pub const SKY_LIGHT: Rgb565 = Rgb565::new(13, 53, 31);

/// Deep sky blue, bottom of the background gradient (#2980b9).
pub const SKY_DEEP: Rgb565 = Rgb565::new(5, 32, 23);

/// Dark slate for values and labels on white cards (#2c3e50).
pub const TEXT_DARK: Rgb565 = Rgb565::new(5, 15, 10);

/// Muted gray for captions and unit labels (#7f8c8d).
pub const TEXT_MUTED: Rgb565 = Rgb565::new(15, 35, 17);

/// Rain drop and droplet icon blue.
pub const RAIN_BLUE: Rgb565 = Rgb565::new(3, 30, 28);

/// Light gray for cloud glyphs.
pub const CLOUD_GRAY: Rgb565 = Rgb565::new(24, 50, 26);

/// Orange for thermometer bulb and bolt icons.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Mountain icon brown-green.
pub const EARTH: Rgb565 = Rgb565::new(12, 30, 8);

/// Divider lines and inactive outlines.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

// =============================================================================
// Gradient
// =============================================================================

/// Linear blend from `from` to `to` at `step / steps`.
///
/// `step` is clamped to `steps`; `steps == 0` returns `from`.
pub fn blend(
    from: Rgb565,
    to: Rgb565,
    step: u32,
    steps: u32,
) -> Rgb565 {
    if steps == 0 {
        return from;
    }
    let step = step.min(steps);
    let mix = |a: u8, b: u8| -> u8 {
        let (a, b) = (i32::from(a), i32::from(b));
        (a + (b - a) * step as i32 / steps as i32) as u8
    };
    Rgb565::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Background color of screen row `y` in a sky gradient `height` rows tall.
#[inline]
pub fn sky_gradient(
    y: u32,
    height: u32,
) -> Rgb565 {
    blend(SKY_LIGHT, SKY_DEEP, y, height.saturating_sub(1))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(SKY_LIGHT, SKY_DEEP, 0, 10), SKY_LIGHT);
        assert_eq!(blend(SKY_LIGHT, SKY_DEEP, 10, 10), SKY_DEEP);
        assert_eq!(blend(SKY_LIGHT, SKY_DEEP, 99, 10), SKY_DEEP, "step is clamped");
    }

    #[test]
    fn test_blend_zero_steps() {
        assert_eq!(blend(BLACK, WHITE, 5, 0), BLACK);
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(BLACK, WHITE, 1, 2);
        assert_eq!((mid.r(), mid.g(), mid.b()), (15, 31, 15));
    }

    #[test]
    fn test_sky_gradient_monotonic_green() {
        let mut prev = sky_gradient(0, 240).g();
        for y in 1..240 {
            let g = sky_gradient(y, 240).g();
            assert!(g <= prev, "gradient should darken towards the bottom (row {y})");
            prev = g;
        }
        assert_eq!(sky_gradient(239, 240), SKY_DEEP);
    }
}
