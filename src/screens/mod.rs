//! Full-screen views outside the dashboard.
//!
//! 1. **Loading Screen** ([`loading`]): spinner and debug log until the first snapshot
//! 2. Main dashboard (handled in `main.rs`)
//! 3. **Debug Page** ([`debug`]): profiling metrics, feed status and log terminal (`Y`)
//!
//! The loading screen returns `None` if the window is closed or the feed
//! disconnects before any data arrives, so the application exits without
//! entering the main loop.

mod debug;
mod loading;

pub use debug::{FeedStatus, draw_debug_page};
pub use loading::run_loading_screen;
