//! Component renderers composing a frame.
//!
//! # Components
//!
//! - `header`: Navbar and page titles
//! - `messages`: Notification banner
//! - `search`: Filter input box
//! - `table`: Data table with pagination line
//! - `empty`: Centered notices
//! - `footer`: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Navbar]
//! [Border]
//! [Messages, one line each]
//! [Page body: title, optional search bar, table or greeting]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod messages;
mod search;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageBody, PortalViewModel};

use empty::render_notice;
use footer::render_footer;
use header::{render_navbar, render_title};
use messages::render_messages;
use search::render_search_bar;
use table::render_table;

/// Renders a horizontal rule. Returns the next free row.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(color));
    canvas.put(&"─".repeat(cols));
    canvas.put(Theme::reset());
    row + 1
}

/// Draws the whole frame for a `rows` x `cols` terminal.
pub fn render_frame(canvas: &mut Canvas, vm: &PortalViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.saturating_sub(1).max(1);
    let bottom_border = footer_row.saturating_sub(1);
    let last_body_row = bottom_border.saturating_sub(1);

    let mut current_row = 2;
    current_row = render_navbar(canvas, current_row, &vm.navbar, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);
    current_row = render_messages(canvas, current_row, &vm.messages, theme, cols);
    current_row += 1;

    if current_row <= last_body_row {
        match &vm.body {
            PageBody::Home(home) | PageBody::Restricted(home) => {
                current_row = render_title(canvas, current_row + 1, &home.title, theme, cols);
                render_notice(
                    canvas,
                    current_row,
                    &home.subtitle,
                    None,
                    &theme.colors.text_dim,
                    theme,
                    cols,
                );
            }
            PageBody::Reports(reports) => {
                current_row = render_title(canvas, current_row, &reports.title, theme, cols);
                if let Some(search) = &vm.search_bar {
                    current_row = render_search_bar(canvas, current_row, search, theme, cols);
                }
                render_table(canvas, current_row, last_body_row, &reports.table, theme, cols);
            }
        }
    }

    if bottom_border > 0 {
        render_border(canvas, bottom_border, &theme.colors.border, cols);
    }
    render_footer(canvas, footer_row, &vm.footer, theme, cols);
}
