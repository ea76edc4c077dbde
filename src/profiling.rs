//! Frame timing and dashboard counters for the debug page.
//!
//! The debug log ring buffer lives in `weather_common::log`; this module holds
//! the parts that need `std::time`.
//!
//! ```ignore
//! let frame_start = Instant::now();
//! // ... render ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Frame timing and render statistics.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent drawing
    pub render_time_us: u32,
    /// Time spent sleeping
    pub sleep_time_us: u32,

    // Statistics
    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    /// Exponential moving average of the frame time
    frame_time_avg_us: f32,

    // Counters
    /// Total frames since startup
    pub total_frames: u64,
    /// Header redraws (low when dirty tracking works)
    pub header_redraws: u32,
    /// Dashboard body redraws
    pub body_redraws: u32,
    /// Cell draws (six per body redraw)
    pub cell_draws: u32,
    /// Snapshots received from the feed
    pub snapshots: u32,
    /// Widget taps that changed a unit
    pub unit_changes: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create new metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            header_redraws: 0,
            body_redraws: 0,
            cell_draws: 0,
            snapshots: 0,
            unit_changes: 0,
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average alpha.
    const EMA_ALPHA: f32 = 0.1;

    /// Record timing for one frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Minimum frame time in microseconds, 0 before the first frame.
    #[inline]
    pub const fn frame_time_min_or_zero_us(&self) -> u32 {
        if self.frame_time_min_us == u32::MAX { 0 } else { self.frame_time_min_us }
    }

    /// Time since the metrics were created.
    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }

    #[inline]
    pub const fn inc_header_redraws(&mut self) { self.header_redraws += 1; }

    /// Count one body redraw with `cells` cells.
    #[inline]
    pub const fn inc_body_redraws(
        &mut self,
        cells: u32,
    ) {
        self.body_redraws += 1;
        self.cell_draws += cells;
    }

    #[inline]
    pub const fn inc_snapshots(&mut self) { self.snapshots += 1; }

    #[inline]
    pub const fn inc_unit_changes(&mut self) { self.unit_changes += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format a number of seconds as `HH:MM:SS`.
fn format_hms(secs: u64) -> String<12> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiling_metrics_new() {
        let metrics = ProfilingMetrics::new();
        assert_eq!(metrics.total_frames, 0);
        assert_eq!(metrics.frame_time_min_us, u32::MAX);
        assert_eq!(metrics.frame_time_min_or_zero_us(), 0);
        assert_eq!(metrics.frame_time_max_us, 0);
    }

    #[test]
    fn test_record_frame() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(
            Duration::from_micros(20000),
            Duration::from_micros(1500),
            Duration::from_micros(18000),
        );

        assert_eq!(metrics.total_frames, 1);
        assert_eq!(metrics.frame_time_us, 20000);
        assert_eq!(metrics.render_time_us, 1500);
        assert_eq!(metrics.sleep_time_us, 18000);
        assert_eq!(metrics.frame_time_avg_us(), 20000, "first frame seeds the average");
    }

    #[test]
    fn test_frame_min_max() {
        let mut metrics = ProfilingMetrics::new();
        for us in [20000, 15000, 25000] {
            metrics.record_frame(Duration::from_micros(us), Duration::ZERO, Duration::ZERO);
        }

        assert_eq!(metrics.frame_time_min_us, 15000);
        assert_eq!(metrics.frame_time_max_us, 25000);
    }

    #[test]
    fn test_counters() {
        let mut metrics = ProfilingMetrics::new();
        metrics.inc_body_redraws(6);
        metrics.inc_body_redraws(6);
        metrics.inc_snapshots();
        metrics.inc_unit_changes();
        metrics.inc_header_redraws();
        assert_eq!(metrics.body_redraws, 2);
        assert_eq!(metrics.cell_draws, 12);
        assert_eq!(metrics.snapshots, 1);
        assert_eq!(metrics.unit_changes, 1);
        assert_eq!(metrics.header_redraws, 1);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0).as_str(), "00:00:00");
        assert_eq!(format_hms(3_725).as_str(), "01:02:05");
    }

    #[test]
    fn test_uptime_string_format() {
        let uptime = ProfilingMetrics::new().uptime_string();
        assert_eq!(uptime.len(), 8);
    }
}
