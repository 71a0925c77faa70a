//! Page and input mode state types.
//!
//! The portal shows one [`Page`] at a time. [`InputMode`] decides how key
//! presses are interpreted: in `Search` mode printable keys edit the table
//! filter instead of triggering commands.

/// Top-level page selected in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Reports,
}

impl Page {
    /// Navbar order.
    pub const ALL: [Self; 2] = [Self::Home, Self::Reports];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Reports => "Reports",
        }
    }

    /// The page after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Reports,
            Self::Reports => Self::Home,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys trigger commands.
    #[default]
    Normal,
    /// Keys edit the reports filter query.
    Search,
}
