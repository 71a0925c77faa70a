//! Top-level rendering coordinator.
//!
//! Computes the view model from [`AppState`] and draws it into an ANSI frame.
//! The plugin runtime prints the returned string.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;

/// Renders the portal for a `rows` x `cols` terminal.
///
/// # Example
///
/// ```
/// use staff_portal::app::AppState;
/// use staff_portal::store::Store;
/// use staff_portal::ui::{helpers::strip_ansi, render, Theme};
///
/// let state = AppState::new(Store::default(), Theme::default(), 10);
/// let frame = render(&state, 24, 80);
/// assert!(strip_ansi(&frame).contains("Staff Home"));
/// ```
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::debug_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(cols);
    let mut canvas = Canvas::new();
    components::render_frame(&mut canvas, &viewmodel, &state.theme, rows, cols);
    canvas.finish()
}
