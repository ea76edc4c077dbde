//! Render state tracking for selective display updates.
//!
//! The dashboard only changes when a snapshot arrives, a unit is tapped, a
//! popup closes or the page switches, so the body is redrawn on those events
//! instead of every frame.
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Header | On FPS / clock change, popup close, page switch | Conditional redraw |
//! | Body (panel + cells) | On snapshot, tap, popup close, page switch | Dirty flag |
//! | Popups | Every frame while active | Full clear on close |
//!
//! # Popup Cleanup
//!
//! When a popup closes (or is replaced by a popup of a different kind) the
//! display is cleared and everything is redrawn in the same frame, which
//! removes the popup border remnants.

use std::time::Instant;

use crate::config::POPUP_DURATION;
use crate::state::UnitChange;

/// Active popup with its start time. Only one is shown at a time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "FPS ON/OFF".
    Fps(Instant),
    /// "WIND: MPH" after a unit tap.
    Unit(Instant, UnitChange),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Fps(t) | Self::Unit(t, _) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Popup kind (discriminant only, for comparison).
    #[inline]
    const fn kind(&self) -> u8 {
        match self {
            Self::Fps(_) => 0,
            Self::Unit(..) => 1,
        }
    }
}

/// Tracks what needs redrawing this frame.
pub struct RenderState {
    /// Previous FPS display state.
    prev_show_fps: bool,

    /// Previous FPS value (rounded to match the displayed value).
    prev_fps_rounded: u32,

    /// Timestamp of the snapshot shown in the header last time.
    prev_clock: Option<u64>,

    /// Previous popup kind (discriminant only, for detecting switches).
    prev_popup_kind: Option<u8>,

    /// Whether a popup closed or switched this frame.
    popup_just_closed: bool,

    /// Whether this is the first frame.
    first_frame: bool,

    /// Whether the display was cleared externally (page switch).
    display_cleared: bool,

    /// Whether widget inputs or unit selections changed.
    content_dirty: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            prev_show_fps: true,
            prev_fps_rounded: 0,
            prev_clock: None,
            prev_popup_kind: None,
            popup_just_closed: false,
            first_frame: true,
            display_cleared: false,
            content_dirty: false,
        }
    }

    /// Check if the header needs redrawing.
    ///
    /// FPS is compared rounded, matching the `{:.0}` display format.
    pub const fn check_header_dirty(
        &mut self,
        show_fps: bool,
        fps: f32,
        clock: Option<u64>,
    ) -> bool {
        let fps_rounded = fps.round() as u32;
        let clock_changed = match (clock, self.prev_clock) {
            (Some(a), Some(b)) => a != b,
            (None, None) => false,
            _ => true,
        };
        let dirty = self.first_frame
            || self.popup_just_closed
            || self.display_cleared
            || clock_changed
            || show_fps != self.prev_show_fps
            || (show_fps && fps_rounded != self.prev_fps_rounded);

        self.prev_show_fps = show_fps;
        self.prev_fps_rounded = fps_rounded;
        self.prev_clock = clock;
        dirty
    }

    /// Update popup state with the current active popup.
    ///
    /// Both a close and a switch to another kind need a display clear.
    pub fn update_popup(
        &mut self,
        popup: Option<&Popup>,
    ) {
        let current_kind = popup.map(Popup::kind);
        let changed = current_kind != self.prev_popup_kind;
        let was_visible = self.prev_popup_kind.is_some();
        self.prev_popup_kind = current_kind;

        if changed && was_visible {
            self.popup_just_closed = true;
        }
    }

    /// Mark that the display was cleared because of a page switch.
    pub const fn mark_display_cleared(&mut self) { self.display_cleared = true; }

    /// Mark that widget inputs or unit selections changed.
    pub const fn mark_content_dirty(&mut self) { self.content_dirty = true; }

    /// Whether the dashboard body needs redrawing.
    #[inline]
    pub const fn need_content(&self) -> bool {
        self.first_frame || self.popup_just_closed || self.display_cleared || self.content_dirty
    }

    /// Reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.popup_just_closed = false;
        self.display_cleared = false;
        self.content_dirty = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
