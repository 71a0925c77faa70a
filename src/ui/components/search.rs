//! Filter input box renderer.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders a three-line bordered box holding the filter query.
///
/// ```text
///   ┌──────────────────┐
///   │ Filter: s1       │
///   └──────────────────┘
/// ```
///
/// Returns `row + 3`.
pub fn render_search_bar(
    canvas: &mut Canvas,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    canvas.move_to(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    let text: String = format!(" Filter: {}", search.query)
        .chars()
        .take(inner_width)
        .collect();

    canvas.move_to(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put("│");
    canvas.put(&Theme::fg(&theme.colors.text_normal));
    canvas.put(&text);
    canvas.pad(inner_width.saturating_sub(text_width(&text)));
    canvas.put(&border);
    canvas.put("│");
    canvas.put(Theme::reset());

    canvas.move_to(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&border);
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    row + 3
}
