//! Application layer between the plugin runtime and the store.
//!
//! ```text
//! host input ──▶ Event ──▶ handle_event ──▶ Store::dispatch / UI state
//!                               │
//!                               └──▶ Effect ──▶ plugin runtime (close pane, fetch students)
//! ```
//!
//! # Modules
//!
//! - [`effects`]: Host-side commands emitted by the handler
//! - [`handler`]: Event processing
//! - [`modes`]: Page and input mode enums
//! - [`state`]: [`AppState`] and view model computation

pub mod effects;
pub mod handler;
pub mod modes;
pub mod state;

pub use effects::Effect;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Page};
pub use state::AppState;
