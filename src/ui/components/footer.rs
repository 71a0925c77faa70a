//! Footer help bar renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders centered keybinding hints. Text wider than the terminal is cut.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help: String = footer.keybindings.chars().take(cols).collect();

    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.put_centered(row, &help, cols);
    canvas.put(Theme::reset());
    row + 1
}
