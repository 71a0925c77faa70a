//! Centered notices: home page greeting, table loading and no-data states.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;

/// Renders `message` in `color`, with an optional dimmed subtitle below it.
///
/// Returns the next free row.
pub fn render_notice(
    canvas: &mut Canvas,
    row: usize,
    message: &str,
    subtitle: Option<&str>,
    color: &str,
    theme: &Theme,
    cols: usize,
) -> usize {
    canvas.put(&Theme::fg(color));
    canvas.put_centered(row, message, cols);
    canvas.put(Theme::reset());

    let Some(subtitle) = subtitle else {
        return row + 1;
    };

    canvas.put(Theme::dim());
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.put_centered(row + 1, subtitle, cols);
    canvas.put(Theme::reset());
    row + 2
}
