//! Loading screen shown until the first snapshot arrives.
//!
//! Displays a console-style view of the debug log under an animated spinner
//! title. The dashboard has nothing to show before the first snapshot, so the
//! frame loop only starts once the feed delivered one.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │   |  Waiting for data  -           │  Title with spinner
//! │────────────────────────────────────│  Divider line
//! │   Weather dashboard started        │
//! │ > Connecting to station...         │  Console (debug log)
//! └────────────────────────────────────┘
//! ```

use core::fmt::Write;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use weather_common::WeatherSnapshot;
use weather_common::colors::WHITE;
use weather_common::log::DebugLog;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, LEFT_ALIGNED, TITLE_STYLE_WHITE};
use crate::widgets::draw_sky_background;

// =============================================================================
// Loading Screen Layout Constants
// =============================================================================

const TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 25);

const LINE_START: Point = Point::new(10, 35);
const LINE_END: Point = Point::new((SCREEN_WIDTH - 10) as i32, 35);

const CONSOLE_X: i32 = 10;
const CONSOLE_START_Y: i32 = 52;
const CONSOLE_LINE_HEIGHT: i32 = 14;

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

const SCREEN: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Frames per spinner step (~130ms at 60 FPS).
const SPINNER_FRAMES: u32 = 8;

/// Loading screen redraw interval (~60 FPS for a smooth spinner).
const LOADING_FRAME_TIME: Duration = Duration::from_millis(16);

// =============================================================================
// Drawing
// =============================================================================

/// Draw one loading frame: background, spinner title, divider and the log.
pub fn draw_loading_frame<D>(
    display: &mut D,
    spinner_idx: usize,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_sky_background(display, SCREEN);

    let left = SPINNER[spinner_idx % SPINNER.len()];
    let right = SPINNER[(spinner_idx + 2) % SPINNER.len()];
    let mut title: String<32> = String::new();
    let _ = write!(title, "{left}  Waiting for data  {right}");
    Text::with_text_style(&title, TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    Line::new(LINE_START, LINE_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    let last = log.len().saturating_sub(1);
    for (i, line) in log.iter().enumerate() {
        let y = CONSOLE_START_Y + i as i32 * CONSOLE_LINE_HEIGHT;
        let prefix = if i == last { "> " } else { "  " };
        let mut full: String<64> = String::new();
        let _ = write!(full, "{prefix}{line}");
        Text::with_text_style(&full, Point::new(CONSOLE_X, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Loading Screen Loop
// =============================================================================

/// Show the loading screen until the feed delivers its first snapshot.
///
/// Returns `None` if the window is closed or the feed disconnects first.
pub fn run_loading_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    feed: &Receiver<WeatherSnapshot>,
    log: &mut DebugLog,
) -> Option<WeatherSnapshot> {
    log.push("Connecting to station...");

    let mut spinner_idx = 0;
    let mut frame = 0u32;

    loop {
        if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return None;
        }

        match feed.try_recv() {
            Ok(snapshot) => {
                log.push("First snapshot received");
                return Some(snapshot);
            }
            Err(TryRecvError::Disconnected) => {
                log.push("Feed disconnected");
                return None;
            }
            Err(TryRecvError::Empty) => {}
        }

        frame = frame.wrapping_add(1);
        if frame.is_multiple_of(SPINNER_FRAMES) {
            spinner_idx = (spinner_idx + 1) % SPINNER.len();
        }

        draw_loading_frame(display, spinner_idx, log);
        window.update(display);
        thread::sleep(LOADING_FRAME_TIME);
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    fn render(
        spinner_idx: usize,
        log: &DebugLog,
    ) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        draw_loading_frame(&mut display, spinner_idx, log);
        display
    }

    #[test]
    fn test_spinner_animates() {
        let log = DebugLog::new();
        assert_ne!(render(0, &log), render(1, &log), "spinner should change between steps");
        assert_eq!(render(0, &log), render(4, &log), "spinner wraps after four steps");
    }

    #[test]
    fn test_log_lines_are_shown() {
        let empty = DebugLog::new();
        let mut log = DebugLog::new();
        log.push("Connecting to station...");
        assert_ne!(render(0, &empty), render(0, &log), "console should show log lines");
    }
}
