//! Page navigation. `Y` switches between the two pages.

/// Pages of the dashboard application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Temperature panel and the six-cell reading grid.
    #[default]
    Dashboard,

    /// Frame timing, feed counters and the debug log terminal.
    Debug,
}

impl Page {
    /// Switch to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dashboard => Self::Debug,
            Self::Debug => Self::Dashboard,
        }
    }

    /// Name written to the debug log.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Debug => "Debug",
        }
    }
}
