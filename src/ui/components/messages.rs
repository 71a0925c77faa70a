//! Notification banner renderer.

use crate::domain::MessageKind;
use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MessageLine;

/// Renders one line per notification, oldest first.
///
/// Returns the next free row, which equals `row` when there is nothing to show.
pub fn render_messages(
    canvas: &mut Canvas,
    row: usize,
    messages: &[MessageLine],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for message in messages {
        let line = format!(" {} {}", marker(message.kind), message.text);
        let line: String = line.chars().take(cols).collect();

        canvas.move_to(current_row, 1);
        canvas.put(&Theme::fg(theme.colors.message_fg(message.kind)));
        canvas.put(&line);
        canvas.pad(cols.saturating_sub(text_width(&line)));
        canvas.put(Theme::reset());
        current_row += 1;
    }
    current_row
}

const fn marker(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "i",
        MessageKind::Success => "✓",
        MessageKind::Error => "✗",
    }
}
