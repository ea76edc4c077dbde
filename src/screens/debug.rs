//! Debug/profiling page.
//!
//! Shows frame timing, render counters, feed status and the debug log.
//! Toggled from the dashboard with `Y`.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DEBUG VIEW                              UP 00:12:34       53 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ TIMING              │ RENDER            │ FEED                   │
//! │ Frame:  20.0ms      │ Frames: 12847     │ Link:  live            │
//! │ Render: 0.5ms       │ Hdrs:   12        │ Snaps: 31              │
//! │ Sleep:  19.5ms      │ Body:   40        │ Taps:  5               │
//! │ Min:    19.8ms      │ Cells:  240       │ Last:  12:34:56        │
//! │ Max:    25.1ms      │                   │                        │
//! │ Avg:    20.1ms      │                   │                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > First snapshot received                                        │
//! │ > Wind: mph                                                      │
//! │ > _                                                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::{self, Write};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use weather_common::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use weather_common::log::DebugLog;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::profiling::ProfilingMetrics;
use crate::styles::LABEL_FONT;

// =============================================================================
// Layout Constants
// =============================================================================

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 28;
const STATS_Y: i32 = 40;
const STAT_LINE_HEIGHT: i32 = 13;

const LOG_DIVIDER_Y: i32 = 130;
const LOG_Y: i32 = 142;
const LOG_LINE_HEIGHT: i32 = 12;

/// Log lines that fit above the cursor line.
const LOG_VISIBLE_LINES: usize = 7;

const COL1_X: i32 = 4;
const COL2_X: i32 = 110;
const COL3_X: i32 = 215;

// =============================================================================
// Styles
// =============================================================================

const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, GREEN);
const SECTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, GRAY);
const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, WHITE);
const HIGHLIGHT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, YELLOW);
const PROMPT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, GREEN);
const LOG_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, ORANGE);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Very dark green terminal background.
const TERMINAL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1));

const TERMINAL_RECT: Rectangle = Rectangle::new(
    Point::new(0, LOG_DIVIDER_Y + 2),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
);

// =============================================================================
// Feed Status
// =============================================================================

/// Feed information shown in the FEED column.
#[derive(Clone, Copy, Debug)]
pub struct FeedStatus<'a> {
    /// Whether the station thread is still sending.
    pub connected: bool,
    /// Clock text of the latest snapshot.
    pub last_clock: Option<&'a str>,
}

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug page. Clears the whole display.
pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    feed: FeedStatus<'_>,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    draw_title_bar(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    for (title, x) in [("TIMING", COL1_X), ("RENDER", COL2_X), ("FEED", COL3_X)] {
        Text::new(title, Point::new(x, SECTION_HEADER_Y), SECTION_STYLE)
            .draw(display)
            .ok();
    }

    draw_timing_column(display, metrics);
    draw_render_column(display, metrics);
    draw_feed_column(display, metrics, feed);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_title_bar<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), HEADER_STYLE)
        .draw(display)
        .ok();

    let mut s: String<24> = String::new();
    let _ = write!(s, "UP {}", metrics.uptime_string());
    Text::new(&s, Point::new(160, HEADER_Y), VALUE_STYLE).draw(display).ok();

    let mut s: String<12> = String::new();
    let _ = write!(s, "{fps:.0} FPS");
    Text::new(&s, Point::new(280, HEADER_Y), VALUE_STYLE).draw(display).ok();
}

/// Draw one formatted line of a stat column and move to the next row.
fn stat_line<D>(
    display: &mut D,
    pos: &mut Point,
    style: MonoTextStyle<'static, Rgb565>,
    args: fmt::Arguments<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut s: String<24> = String::new();
    let _ = s.write_fmt(args);
    Text::new(&s, *pos, style).draw(display).ok();
    pos.y += STAT_LINE_HEIGHT;
}

#[inline]
fn ms(us: u32) -> f32 { us as f32 / 1000.0 }

fn draw_timing_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut pos = Point::new(COL1_X, STATS_Y);
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Frame: {:.1}ms", ms(metrics.frame_time_us)));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Render:{:.1}ms", ms(metrics.render_time_us)));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Sleep: {:.1}ms", ms(metrics.sleep_time_us)));
    stat_line(
        display,
        &mut pos,
        HIGHLIGHT_STYLE,
        format_args!("Min:   {:.1}ms", ms(metrics.frame_time_min_or_zero_us())),
    );
    stat_line(display, &mut pos, HIGHLIGHT_STYLE, format_args!("Max:   {:.1}ms", ms(metrics.frame_time_max_us)));
    stat_line(display, &mut pos, HIGHLIGHT_STYLE, format_args!("Avg:   {:.1}ms", ms(metrics.frame_time_avg_us())));
}

fn draw_render_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut pos = Point::new(COL2_X, STATS_Y);
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Frames:{}", metrics.total_frames));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Hdrs:  {}", metrics.header_redraws));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Body:  {}", metrics.body_redraws));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Cells: {}", metrics.cell_draws));
}

fn draw_feed_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    feed: FeedStatus<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut pos = Point::new(COL3_X, STATS_Y);
    let (link, link_style) = if feed.connected { ("live", VALUE_STYLE) } else { ("lost", HIGHLIGHT_STYLE) };
    stat_line(display, &mut pos, link_style, format_args!("Link:  {link}"));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Snaps: {}", metrics.snapshots));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Taps:  {}", metrics.unit_changes));
    // "HH:MM:SS UTC" is too wide for the column; drop the zone.
    let clock = feed.last_clock.map_or("--", |c| c.split(' ').next().unwrap_or(c));
    stat_line(display, &mut pos, VALUE_STYLE, format_args!("Last:  {clock}"));
}

/// Draw the last log lines followed by a cursor.
fn draw_log_terminal<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    TERMINAL_RECT.into_styled(TERMINAL_FILL).draw(display).ok();

    let mut y = LOG_Y;
    for line in log.iter().skip(log.len().saturating_sub(LOG_VISIBLE_LINES)) {
        Text::new(">", Point::new(COL1_X, y), PROMPT_STYLE).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), LOG_TEXT_STYLE)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), PROMPT_STYLE).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    const LIVE: FeedStatus<'static> = FeedStatus {
        connected: true,
        last_clock: Some("12:34:56 UTC"),
    };

    fn render(metrics: &ProfilingMetrics) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        draw_debug_page(&mut display, metrics, &DebugLog::new(), LIVE, 50.0);
        display
    }

    #[test]
    fn test_debug_page_shows_timing() {
        let idle = ProfilingMetrics::new();
        let mut busy = ProfilingMetrics::new();
        busy.record_frame(
            core::time::Duration::from_micros(25_000),
            core::time::Duration::from_micros(9_000),
            core::time::Duration::from_micros(16_000),
        );
        assert_ne!(render(&idle), render(&busy), "timing column should reflect recorded frames");
    }

    #[test]
    fn test_log_terminal_fits_screen() {
        let last_line_y = LOG_Y + LOG_VISIBLE_LINES as i32 * LOG_LINE_HEIGHT;
        assert!(last_line_y < SCREEN_HEIGHT as i32, "cursor line at {last_line_y} is off screen");
    }
}
