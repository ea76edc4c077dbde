//! Debug log ring buffer shown on the debug page.
//!
//! Lines are fixed-capacity `heapless` strings. Long messages are cut at a
//! character boundary and the oldest line is dropped once the buffer is full,
//! so logging never allocates and never fails.
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Station online");
//! log.push_fmt(format_args!("Wind: {}", "mph"));
//! ```

use core::fmt::{self, Write};

use heapless::string::StringInner;
use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines kept.
pub const LOG_BUFFER_SIZE: usize = 10;

/// Maximum characters per log line (one row of 6px glyphs on a 320px screen).
pub const LOG_LINE_LENGTH: usize = 50;

/// One stored log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Debug Log
// =============================================================================

/// Ring buffer of the most recent log lines.
pub struct DebugLog {
    lines: Deque<LogLine, LOG_BUFFER_SIZE>,
    total: u32,
}

impl DebugLog {
    /// Empty log.
    pub const fn new() -> Self {
        Self {
            lines: Deque::new(),
            total: 0,
        }
    }

    /// Append a message, dropping the oldest line when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LogLine::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Append a formatted message.
    ///
    /// Output past [`LOG_LINE_LENGTH`] is dropped.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = Truncating(LogLine::new());
        let _ = line.write_fmt(args);
        self.push_line(line.0);
    }

    fn push_line(
        &mut self,
        line: LogLine,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        self.lines.push_back(line).ok();
        self.total = self.total.saturating_add(1);
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(StringInner::as_str) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.lines.back().map(StringInner::as_str) }

    /// Number of lines currently held.
    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Messages pushed since start-up, including dropped ones.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// Writer that keeps what fits and silently discards the rest.
struct Truncating(LogLine);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("Station online");
        log.push("First snapshot");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("First snapshot"));
    }

    #[test]
    fn test_debug_log_drops_oldest() {
        let mut log = DebugLog::new();
        for i in 0..=LOG_BUFFER_SIZE {
            log.push_fmt(format_args!("Line {i}"));
        }

        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("Line 1"), "line 0 should have been dropped");
        assert_eq!(log.total() as usize, LOG_BUFFER_SIZE + 1);
    }

    #[test]
    fn test_debug_log_truncates_long_lines() {
        let mut log = DebugLog::new();
        log.push("A very long message that keeps going well past the width of the debug page");
        assert_eq!(log.last().map(|l| l.chars().count()), Some(LOG_LINE_LENGTH));
    }

    #[test]
    fn test_push_fmt_truncates_without_losing_line() {
        let mut log = DebugLog::new();
        let long = "0123456789012345678901234567890123456789012345678901234567890123456789";
        log.push_fmt(format_args!("Wind: {long}"));
        let line = log.last().unwrap();
        assert!(line.starts_with("Wind: "));
        assert_eq!(line.len(), LOG_LINE_LENGTH);
    }

    #[test]
    fn test_push_fmt_formats_units() {
        let mut log = DebugLog::new();
        log.push_fmt(format_args!("{}: {}", "Wind", "mph"));
        assert_eq!(log.last(), Some("Wind: mph"));
    }
}
