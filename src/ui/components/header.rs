//! Navbar and page title renderers.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavbarInfo;

/// Renders the navbar: portal title and page tabs on the left, the signed-in
/// user on the right.
///
/// ```text
///  Staff Portal   Home   Reports                     Jane Doe (Staff)
/// ```
///
/// Returns the next free row.
pub fn render_navbar(
    canvas: &mut Canvas,
    row: usize,
    navbar: &NavbarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let base = header_style(theme);

    canvas.move_to(row, 1);
    canvas.put(&base);
    canvas.put(Theme::bold());
    let title = format!(" {} ", navbar.title);
    canvas.put(&title);
    canvas.put(Theme::reset());
    canvas.put(&base);
    let mut used = text_width(&title);

    for tab in &navbar.tabs {
        let label = format!(" {} ", tab.label);
        canvas.put(" ");
        if tab.active {
            canvas.put(&Theme::fg(&theme.colors.nav_active_fg));
            canvas.put(&Theme::bg(&theme.colors.nav_active_bg));
            canvas.put(Theme::bold());
            canvas.put(&label);
            canvas.put(Theme::reset());
            canvas.put(&base);
        } else {
            canvas.put(&label);
        }
        used += 1 + text_width(&label);
    }

    let user = format!("{} ", navbar.user_label);
    let user_len = text_width(&user);
    if used + user_len <= cols {
        canvas.pad(cols - used - user_len);
        canvas.put(&Theme::fg(&theme.colors.text_dim));
        canvas.put(&user);
    } else {
        canvas.pad(cols.saturating_sub(used));
    }

    canvas.put(Theme::reset());
    row + 1
}

/// Renders a bold centered page title. Returns the next free row.
pub fn render_title(canvas: &mut Canvas, row: usize, title: &str, theme: &Theme, cols: usize) -> usize {
    canvas.put(Theme::bold());
    canvas.put(&header_style(theme));
    canvas.put_centered(row, title, cols);
    canvas.put(Theme::reset());
    row + 1
}

fn header_style(theme: &Theme) -> String {
    let mut style = Theme::fg(&theme.colors.header_fg);
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }
    style
}
