// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/u64->f32 in timing and graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for screen coordinates
#![allow(clippy::cast_sign_loss)] // i32->u32 where the sign is known to be positive
#![allow(clippy::too_many_lines)] // main() is long but linear
#![allow(clippy::struct_excessive_bools)] // RenderState tracks independent flags

//! Weather station dashboard simulator.
//!
//! Shows the latest snapshot of a weather station feed on a 320×240 display:
//! - Temperature panel with rain forecast (tap toggles °C / °F)
//! - Humidity, pressure, wind, heat index, altitude and rain sensor cells
//!   (tap cycles units where a cell has more than one)
//!
//! Unit selections belong to the widgets and survive new snapshots. All
//! conversion and formatting logic lives in the `no_std` `weather-common`
//! crate; this binary owns the window, the frame loop, the simulated
//! station and the drawing.
//!
//! # Frame Loop
//!
//! | Step | What happens |
//! |------|--------------|
//! | Input | Simulator events mapped to [`input::Action`]s |
//! | Feed | Channel drained, newest snapshot applied |
//! | Popup | Expiry checked before the render state update |
//! | Header | Redrawn when FPS, clock or popup state changed |
//! | Body | Redrawn on snapshot, tap, popup close or page switch |
//! | Popup | Drawn last so it stays on top |
//!
//! # Controls (Simulator Mode)
//!
//! | Input | Action |
//! |-------|--------|
//! | Click temperature panel, `A` | Toggle °C / °F |
//! | Click a cell | Cycle that cell's unit |
//! | `W` / `P` / `I` / `L` | Cycle wind / pressure / heat index / altitude |
//! | `X` | Toggle FPS display on/off |
//! | `Y` | Switch between Dashboard and Debug page |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod config;
mod feed;
mod input;
mod pages;
mod profiling;
mod render;
mod screens;
mod state;
mod styles;
mod widgets;

use std::sync::mpsc::TryRecvError;
use std::thread;
use std::time::Instant;

use config::{FEED_INTERVAL, FRAME_TIME, HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use input::{Action, TEMP_PANEL, cell_bounds, event_action};
use pages::Page;
use profiling::ProfilingMetrics;
use render::{Popup, RenderState};
use screens::{FeedStatus, draw_debug_page, run_loading_screen};
use state::{CELL_COUNT, DashboardState};
use weather_common::WeatherSnapshot;
use weather_common::colors::BLACK;
use weather_common::log::DebugLog;
use widgets::{
    draw_cell,
    draw_fps_toggle_popup,
    draw_header,
    draw_sky_background,
    draw_temperature_panel,
    draw_unit_popup,
};

/// Everything below the header.
const BODY: Rectangle = Rectangle::new(
    Point::new(0, HEADER_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT),
);

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Weather Station", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut debug_log = DebugLog::new();
    debug_log.push("Weather dashboard started");

    // The station thread ends on its next send once `feed` is dropped.
    let feed = feed::spawn_station(FEED_INTERVAL);
    debug_log.push_fmt(format_args!("Station interval: {}s", FEED_INTERVAL.as_secs()));

    // Nothing to show until the first snapshot arrives
    let Some(first_snapshot) = run_loading_screen(&mut display, &mut window, &feed, &mut debug_log) else {
        return;
    };

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut dashboard = DashboardState::new();
    dashboard.apply_snapshot(first_snapshot);

    let mut metrics = ProfilingMetrics::new();
    metrics.inc_snapshots();

    // Active popup (only one at a time, most recent wins)
    let mut active_popup: Option<Popup> = None;

    // FPS counter state (X toggles)
    let mut show_fps = true;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    let mut render_state = RenderState::new();
    let mut current_page = Page::default();
    let mut feed_connected = true;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // ======================================================================
        // Input
        // ======================================================================

        for ev in window.events() {
            let Some(action) = event_action(ev, current_page) else {
                continue;
            };
            match action {
                Action::Quit => return,
                Action::ToggleFps => {
                    show_fps = !show_fps;
                    active_popup = Some(Popup::Fps(Instant::now()));
                    debug_log.push(if show_fps { "FPS: ON" } else { "FPS: OFF" });
                }
                Action::SwitchPage => {
                    current_page = current_page.toggle();
                    active_popup = None;
                    render_state.mark_display_cleared();
                    display.clear(BLACK).ok();
                    debug_log.push_fmt(format_args!("Page: {}", current_page.name()));
                }
                Action::Tap(target) => {
                    // Fixed-unit cells ignore taps and open no popup
                    if let Some(change) = dashboard.tap(target) {
                        active_popup = Some(Popup::Unit(Instant::now(), change));
                        debug_log.push_fmt(format_args!("{}: {}", change.label, change.unit));
                        metrics.inc_unit_changes();
                        render_state.mark_content_dirty();
                    }
                }
            }
        }

        // ======================================================================
        // Feed
        // ======================================================================

        let mut newest: Option<WeatherSnapshot> = None;
        loop {
            match feed.try_recv() {
                Ok(snapshot) => {
                    metrics.inc_snapshots();
                    newest = Some(snapshot);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if feed_connected {
                        feed_connected = false;
                        debug_log.push("Feed disconnected");
                    }
                    break;
                }
            }
        }
        if let Some(snapshot) = newest {
            dashboard.apply_snapshot(snapshot);
            render_state.mark_content_dirty();
        }

        // ======================================================================
        // Popup Expiry
        // ======================================================================

        // Checked before the render state update so cleanup happens in the
        // same frame the popup disappears
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }
        render_state.update_popup(active_popup.as_ref());

        // ======================================================================
        // FPS Calculation (updated once per second)
        // ======================================================================

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        let snapshot = dashboard.snapshot();
        let clock = snapshot.and_then(WeatherSnapshot::clock);

        match current_page {
            Page::Dashboard => {
                if render_state.check_header_dirty(show_fps, current_fps, snapshot.and_then(|s| s.timestamp)) {
                    draw_header(&mut display, show_fps, current_fps, clock.as_deref());
                    metrics.inc_header_redraws();
                }

                // Sky background also wipes popup remnants
                if render_state.need_content() {
                    draw_sky_background(&mut display, BODY);
                    draw_temperature_panel(&mut display, TEMP_PANEL, &dashboard.temperature_view());
                    for idx in 0..CELL_COUNT {
                        if let Some(view) = dashboard.cell_view(idx) {
                            draw_cell(&mut display, cell_bounds(idx), &view);
                        }
                    }
                    metrics.inc_body_redraws(CELL_COUNT as u32);
                }

                // Popup drawn after the body to stay on top
                match active_popup {
                    Some(Popup::Fps(_)) => draw_fps_toggle_popup(&mut display, show_fps),
                    Some(Popup::Unit(_, change)) => draw_unit_popup(&mut display, &change),
                    None => {}
                }
            }

            Page::Debug => {
                let feed_status = FeedStatus {
                    connected: feed_connected,
                    last_clock: clock.as_deref(),
                };
                draw_debug_page(&mut display, &metrics, &debug_log, feed_status, current_fps);
            }
        }

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let render_time = frame_start.elapsed();
        render_state.end_frame();
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let pre_sleep = frame_start.elapsed();
        let sleep_time = FRAME_TIME.saturating_sub(pre_sleep);
        if !sleep_time.is_zero() {
            thread::sleep(sleep_time);
        }

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

