//! Staff Portal: a Zellij plugin hosting a school staff portal.
//!
//! The portal keeps the signed-in session and a log of notifications in a
//! Redux-style store, and renders two pages from it: the staff home page and a
//! sortable, paginated student reports table.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, pipes, commands
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, page and table state             │
//! │  - Effects for the runtime                          │
//! └─────────────────────────────────────────────────────┘
//!         │ Action                          │ AppState
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ Store (store/)        │       │ UI Layer (ui/)        │
//! │ - auth slice          │ ────▶ │ - views (pure)        │
//! │ - message slice       │ snap- │ - data table engine   │
//! │ - snapshots/listeners │ shot  │ - components, themes  │
//! └───────────────────────┘       └───────────────────────┘
//!         │                                 │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Infrastructure (paths)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← rotating log file
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: Global store, slices, actions and snapshots
//! - [`app`]: Event handler and application state
//! - [`domain`]: Users, roles, student records, messages, errors
//! - [`ui`]: Views, view models, table engine, rendering, themes
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/staff-portal.wasm" {
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!         page_size "15"
//!         message_capacity "5"
//!         students_command "curl -s http://localhost:8080/api/reports/students"
//!         trace_dispatch "true"
//!     }
//! }
//! ```
//!
//! Other processes talk to the portal over Zellij pipes:
//!
//! ```sh
//! zellij pipe --name portal::action -- '{"type": "message/add", "kind": "info", "text": "Hello"}'
//! zellij pipe --name portal::students -- '[{"studentID": "S1", "averageGrade": 88, "group": "A"}]'
//! ```
//!
//! # Example
//!
//! ```
//! use staff_portal::{handle_event, initialize, Config, Event};
//! use staff_portal::domain::{Role, User};
//! use staff_portal::store::AuthAction;
//!
//! let mut state = initialize(&Config::default())?;
//! let login = AuthAction::LoginSucceeded(User::new("u1", Role::Staff));
//! let (render, _effects) = handle_event(&mut state, &Event::Dispatch(login.into()))?;
//!
//! assert!(render);
//! assert!(state.store.snapshot().auth().is_authenticated());
//! # Ok::<(), staff_portal::PortalError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, AppState, Effect, Event, InputMode, Page};
pub use domain::{PortalError, Result};
pub use store::{Action, Store, StoreConfig};
pub use ui::Theme;

use std::collections::BTreeMap;
use store::DEFAULT_MESSAGE_CAPACITY;
use ui::datatable::DEFAULT_PAGE_SIZE;

/// Plugin configuration parsed from Zellij's plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file; `~` maps into the sandbox.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `staff_portal=trace`. Default `info`.
    pub trace_level: Option<String>,

    /// Rows per reports page.
    pub page_size: usize,

    /// Notifications kept before the oldest is evicted.
    pub message_capacity: usize,

    /// Command whose stdout is a JSON array of student records. Empty when
    /// records only arrive through the `portal::students` pipe.
    pub students_command: Vec<String>,

    /// Log every dispatched action at debug level.
    pub trace_dispatch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            page_size: DEFAULT_PAGE_SIZE,
            message_capacity: DEFAULT_MESSAGE_CAPACITY,
            students_command: Vec::new(),
            trace_dispatch: false,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Numbers that do not parse fall back to their defaults. Zero values are
    /// kept so that [`initialize`] can reject them.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use staff_portal::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("students_command".to_string(), "cat /host/students.json".to_string());
    /// map.insert("trace_dispatch".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert_eq!(config.students_command, vec!["cat", "/host/students.json"]);
    /// assert!(config.trace_dispatch);
    /// assert_eq!(config.message_capacity, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let number = |key: &str, default: usize| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(default)
        };

        let students_command = config
            .get("students_command")
            .map(|s| s.split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        let trace_dispatch = config
            .get("trace_dispatch")
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("true"));

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            page_size: number("page_size", DEFAULT_PAGE_SIZE),
            message_capacity: number("message_capacity", DEFAULT_MESSAGE_CAPACITY),
            students_command,
            trace_dispatch,
        }
    }
}

/// Builds the application state from `config`.
///
/// An unreadable theme falls back to the default theme with a warning.
///
/// # Errors
///
/// Returns [`PortalError::Config`] if `page_size` or `message_capacity` is zero.
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    if config.page_size == 0 {
        return Err(PortalError::Config("page_size must be at least 1".to_string()));
    }

    let store = Store::new(StoreConfig {
        message_capacity: config.message_capacity,
        trace_dispatch: config.trace_dispatch,
    })?;

    let theme = load_theme(config);
    tracing::debug!(
        theme = %theme.name,
        page_size = config.page_size,
        message_capacity = config.message_capacity,
        has_students_command = !config.students_command.is_empty(),
        "application state initialized"
    );

    Ok(AppState::new(store, theme, config.page_size))
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_keys_missing_or_invalid() {
        let config = Config::from_zellij(&map(&[("page_size", "many")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_values_are_rejected() {
        let config = Config::from_zellij(&map(&[("page_size", "0")]));
        assert!(matches!(initialize(&config), Err(PortalError::Config(_))));

        let config = Config::from_zellij(&map(&[("message_capacity", "0")]));
        assert!(matches!(initialize(&config), Err(PortalError::Config(_))));
    }

    #[test]
    fn theme_selection() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-latte")]));
        assert_eq!(initialize(&config).unwrap().theme.name, "catppuccin-latte");

        let config = Config::from_zellij(&map(&[("theme", "nope")]));
        assert_eq!(initialize(&config).unwrap().theme.name, "catppuccin-mocha");

        let config = Config::from_zellij(&map(&[("theme_file", "/nonexistent.toml")]));
        assert_eq!(initialize(&config).unwrap().theme.name, "catppuccin-mocha");
    }

    #[test]
    fn page_size_reaches_table_state() {
        let config = Config::from_zellij(&map(&[("page_size", "3")]));
        assert_eq!(initialize(&config).unwrap().table.page_size, 3);
    }
}
