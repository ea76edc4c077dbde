//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` constructors are `const fn`, so every style
//! used per frame lives in read-only data instead of being rebuilt in each
//! draw call.
//!
//! Numbers use ProFont. Labels and unit symbols use the ISO 8859-1 variants of
//! the built-in mono fonts because the ASCII ones have no degree sign.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_9X15_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};
use weather_common::colors::{GREEN, TEXT_DARK, TEXT_MUTED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Cell labels and popup text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Composite value/unit runs and console output.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. FPS counter in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Fonts
// =============================================================================

/// Small label font (6x10). Captions, small unit labels and the debug page.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large unit font (10x20). Attached units and the temperature suffix.
pub const UNIT_FONT_LARGE: &MonoFont = &FONT_10X20;

/// Cell value font (`ProFont` 14pt).
pub const CELL_VALUE_FONT: &MonoFont = &PROFONT_14_POINT;

/// Temperature value font (`ProFont` 24pt).
pub const TEMP_VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Header title.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Small white text on the sky background.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// FPS counter.
pub const LABEL_STYLE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);

/// Captions on white cards.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, TEXT_MUTED);

/// Small unit label after a spaced value.
pub const UNIT_STYLE_SMALL: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, TEXT_MUTED);

/// Large unit label attached to a value.
pub const UNIT_STYLE_LARGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(UNIT_FONT_LARGE, TEXT_DARK);

/// Cell values.
pub const CELL_VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(CELL_VALUE_FONT, TEXT_DARK);

/// Temperature value.
pub const TEMP_VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(TEMP_VALUE_FONT, TEXT_DARK);

/// Rain status next to the condition icon.
pub const STATUS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15_BOLD, TEXT_DARK);

/// Pixel width of `text` rendered in `font`.
pub fn text_width(
    text: &str,
    font: &MonoFont,
) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * font.character_size.width + (n - 1) * font.character_spacing
}
